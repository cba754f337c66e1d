//! Functions to build the discrete HUQCE operators and advance the state
//! through a single implicit time step.
//!
//! The stepping scheme is Crank–Nicolson applied to `i ∂ψ/∂t = H ψ` with
//! `H = -½∇² + γ|ψ|²` (ħ = m = 1, zero external potential), followed by a
//! deterministic momentum-deviation perturbation and forced renormalization.
//! See [`docs`][crate::docs] for background.

use ndarray as nd;
use ndarray_linalg::Solve;
use num_complex::Complex64 as C64;
use crate::{
    Arr1,
    Arr2,
    error::StepError,
    utils::{ gradient, renormalize },
};

pub type StepResult<T> = Result<T, StepError>;

/// Build the finite-difference Laplacian over `n` points with spacing `dx`.
///
/// The matrix carries `-2/dx²` on the main diagonal and `1/dx²` on the first
/// sub- and super-diagonals; the implied boundary condition is a wavefunction
/// vanishing outside the grid. Built once per simulation and read-only
/// afterward.
pub fn laplacian(n: usize, dx: f64) -> nd::Array2<f64> {
    let ondx2 = dx.powi(2).recip();
    let mut L: nd::Array2<f64> = nd::Array2::from_diag_elem(n, -2.0 * ondx2);
    if n > 1 {
        L.slice_mut(nd::s![1..n, 0..n - 1]).diag_mut().fill(ondx2);
        L.slice_mut(nd::s![0..n - 1, 1..n]).diag_mut().fill(ondx2);
    }
    L
}

/// Compute the expectation value of the momentum operator for a state sampled
/// with spacing `dx`,
/// ```text
/// ⟨p⟩ = δx Σ_k conj(ψ[k]) (-i ∂ψ/∂x)[k]
/// ```
/// with the derivative estimated by [`gradient`].
///
/// The result is complex even when its imaginary part vanishes; for a purely
/// real state it is purely imaginary.
pub fn momentum_expectation<S>(psi: &Arr1<S>, dx: f64) -> C64
where S: nd::Data<Elem = C64>
{
    let g: nd::Array1<C64> = gradient(psi, dx);
    let acc: C64 = psi.iter().zip(&g)
        .map(|(pk, gk)| pk.conj() * (-C64::i() * *gk))
        .sum();
    dx * acc
}

/// Advance a state through a single Crank–Nicolson step with nonlinear
/// diagonal, chaos perturbation, and renormalization.
///
/// The effective Hamiltonian is `H = -½L + diag(γ|ψ[k]|²)`, rebuilt from the
/// current state on every call; `A = I + (i δt/2) H` is solved directly
/// against `rhs = (I - (i δt/2) H) ψ + δt c ψ`, where the perturbation
/// ```text
/// c[k] = ε α (-i ∂ψ/∂k - ⟨p⟩)
/// ```
/// drives the step by the deviation of the local momentum density from its
/// expectation. The perturbation is not generated by a Hermitian operator and
/// the linear part is not exactly unitary, so the solved state is rescaled to
/// unit Euclidean norm before it is returned; a state of exactly zero norm
/// passes through unchanged.
///
/// Fails if the implicit system is singular or otherwise rejected by the
/// LAPACK solve.
pub fn crank_nicolson_step<S, T>(
    psi: &Arr1<S>,
    laplacian: &Arr2<T>,
    dt: f64,
    gamma: f64,
    alpha: f64,
    epsilon: f64,
    momentum_expectation: C64,
) -> StepResult<nd::Array1<C64>>
where
    S: nd::Data<Elem = C64>,
    T: nd::Data<Elem = f64>,
{
    let nl: nd::Array1<f64> = psi.mapv(|pk| gamma * pk.norm_sqr());
    let ihdt: C64 = C64::i() * dt / 2.0;
    let n: usize = psi.len();
    let mut A: nd::Array2<C64> = nd::Array2::zeros((n, n));
    let mut B: nd::Array2<C64> = nd::Array2::zeros((n, n));
    nd::Zip::indexed(&mut A).and(&mut B).and(laplacian)
        .for_each(|(i, j), aij, bij, &lij| {
            let hij: f64 = if i == j { -0.5 * lij + nl[i] } else { -0.5 * lij };
            *aij = ihdt * hij;
            *bij = -ihdt * hij;
            if i == j {
                *aij += 1.0;
                *bij += 1.0;
            }
        });
    let mut rhs: nd::Array1<C64> = B.dot(psi);
    // the chaos gradient runs over sample index, not physical distance
    let g: nd::Array1<C64> = gradient(psi, 1.0);
    nd::Zip::from(&mut rhs).and(psi).and(&g)
        .for_each(|rk, &pk, &gk| {
            let ck: C64
                = epsilon * alpha * (-C64::i() * gk - momentum_expectation);
            *rk += dt * ck * pk;
        });
    let mut psi_next: nd::Array1<C64> = A.solve_into(rhs)?;
    renormalize(&mut psi_next);
    Ok(psi_next)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sine_state(n: usize, dx: f64) -> nd::Array1<C64> {
        let len = n as f64 * dx;
        let x: nd::Array1<f64> = nd::Array1::linspace(0.0, len, n);
        x.mapv(|xk| C64::from(
            (2.0 / len).sqrt() * (std::f64::consts::PI * xk / len).sin()
        ))
    }

    #[test]
    fn laplacian_is_tridiagonal() {
        let n: usize = 5;
        let dx: f64 = 0.5;
        let ondx2 = dx.powi(2).recip();
        let L = laplacian(n, dx);
        for i in 0..n {
            for j in 0..n {
                let expected = if i == j {
                    -2.0 * ondx2
                } else if i.abs_diff(j) == 1 {
                    ondx2
                } else {
                    0.0
                };
                assert_eq!(
                    L[[i, j]], expected,
                    "unexpected entry at ({}, {})", i, j,
                );
            }
        }
    }

    #[test]
    fn laplacian_handles_single_point() {
        let L = laplacian(1, 0.1);
        assert_eq!(L.dim(), (1, 1));
        assert_eq!(L[[0, 0]], -2.0 / 0.01);
    }

    #[test]
    fn momentum_of_real_state_is_imaginary() {
        let psi = sine_state(64, 0.1);
        let p = momentum_expectation(&psi, 0.1);
        assert!(
            p.re.abs() < 1e-12,
            "real state should have purely imaginary ⟨p⟩; got {}", p,
        );
    }

    #[test]
    fn momentum_of_plane_wave_recovers_wavenumber() {
        let n: usize = 128;
        let dx: f64 = 0.1;
        let k: f64 = 0.5;
        let psi: nd::Array1<C64>
            = (0..n).map(|j| C64::cis(k * j as f64 * dx)).collect();
        let p = momentum_expectation(&psi, dx);
        // Σ|ψ|² δx = n δx for the unnormalized wave, so ⟨p⟩ ≈ k n δx
        let expected = k * n as f64 * dx;
        assert!(
            (p.re - expected).abs() < 0.01,
            "expected ⟨p⟩ ≈ {}; got {}", expected, p,
        );
        assert!(p.im.abs() < 1e-9);
    }

    #[test]
    fn step_returns_unit_norm_state() {
        let n: usize = 32;
        let dx: f64 = 0.1;
        let psi = sine_state(n, dx);
        let L = laplacian(n, dx);
        let p = momentum_expectation(&psi, dx);
        let next = crank_nicolson_step(&psi, &L, 0.01, 0.01, 0.005, 0.1, p)
            .unwrap();
        let norm: f64
            = next.iter().map(|qk| qk.norm_sqr()).sum::<f64>().sqrt();
        assert!((norm - 1.0).abs() < 1e-10, "got norm {}", norm);
    }

    #[test]
    fn step_passes_zero_state_through() {
        let n: usize = 16;
        let psi: nd::Array1<C64> = nd::Array1::zeros(n);
        let L = laplacian(n, 0.1);
        let p = momentum_expectation(&psi, 0.1);
        let next = crank_nicolson_step(&psi, &L, 0.01, 0.01, 0.005, 0.1, p)
            .unwrap();
        assert!(next.iter().all(|qk| *qk == C64::new(0.0, 0.0)));
    }
}
