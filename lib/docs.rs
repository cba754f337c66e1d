//! Theoretical background.
//!
//! # Contents
//! - [Background](#background)
//! - [Time stepping](#time-stepping)
//! - [Chaos term](#chaos-term)
//! - [Spectral entropy](#spectral-entropy)
//!
//! # Background
//! The system evolved here is a one-dimensional nonlinear Schrödinger-type
//! equation,
//! ```text
//!   ∂ψ            1 ∂²ψ
//! i -- = H ψ = - -- --- + γ |ψ|² ψ
//!   ∂t            2 ∂x²
//! ```
//! (with *ħ* = *m* = 1 and no external potential), sampled on a uniform grid
//! ```text
//! x[k] = k L / (N - 1), k ∊ {0, ..., N - 1}, L = N δx
//! ```
//! with the second derivative realized as the usual three-point stencil
//! ```text
//! ∂²ψ      ψ[k+1] - 2 ψ[k] + ψ[k-1]
//! ---[k] = ------------------------
//! ∂x²                δx²
//! ```
//! i.e. the tridiagonal matrix *L* = (*I*{-1} - 2 *I*{0} + *I*{+1}) / *δx*².
//! The stencil takes ψ to vanish outside the grid, so the boundary rows are
//! simply truncated (Dirichlet-like boundary).
//!
//! The γ |ψ|² term is the density-dependent self-interaction familiar from
//! the Gross–Pitaevskii equation[^1]; since it depends on the state itself,
//! the effective Hamiltonian must be rebuilt from the current state on every
//! step and no factorization can be reused across steps.
//!
//! # Time stepping
//! Time evolution uses Crank–Nicolson[^2], the implicit, time-centered
//! average of the forward and backward Euler updates:
//! ```text
//!        i δt                    i δt
//! (I  +  ---- H) ψ(t + δt) = (I - ---- H) ψ(t)
//!         2                       2
//! ```
//! For a Hermitian *H* the update operator is a Cayley transform and hence
//! exactly unitary in exact arithmetic; the scheme is unconditionally stable
//! and second-order accurate in *δt*. Each step amounts to one dense linear
//! solve against the left-hand matrix, which here goes through LAPACK's
//! `zgesv` with no attempt at factorization reuse (see above).
//!
//! # Chaos term
//! After the right-hand side *B* ψ is formed, a perturbation
//! ```text
//! rhs[k] += δt ε α (-i (∇ψ)[k] - ⟨p⟩) ψ[k]
//! ```
//! is added, where ⟨p⟩ is the momentum expectation value
//! ```text
//! ⟨p⟩ = δx Σ_k conj(ψ[k]) (-i ∇ψ / δx)[k]
//! ```
//! and the gradient in the perturbation itself runs over the bare sample
//! index (unit spacing). The term drives each sample by the deviation of its
//! local momentum density from the global expectation — a deterministic
//! stand-in for chaotic sensitivity, not a physical coupling: it is not
//! generated by any Hermitian operator, and the gradient factor is not even
//! skew-Hermitian on the grid. The linear step therefore loses strict
//! unitarity, and the state is forcibly rescaled to unit Euclidean norm at
//! the end of every step. The sequence (perturb, then solve, then
//! renormalize) is load-bearing; downstream consumers only rely on the norm
//! invariant, not on the perturbation being physical.
//!
//! # Spectral entropy
//! The disorder of an evolved state (or any sampled signal) is measured by
//! the Shannon entropy of its normalized power spectrum,
//! ```text
//! p[k] = |F[k]|² / Σ_j |F[j]|², S = -Σ_k p[k] ln(p[k] + ε)
//! ```
//! with *F* the DFT of the signal and ε = 10⁻¹² a floor keeping empty bins
//! out of the logarithm's domain edge. A signal with all power in one bin
//! (e.g. a constant) scores ≈ 0; white noise spreads power over all *N* bins
//! and approaches the maximum ln *N*.
//!
//! [^1]: L. P. Pitaevskii, "Vortex lines in an imperfect Bose gas." Sov.
//! Phys. JETP **13** 451-454 (1961).
//!
//! [^2]: J. Crank and P. Nicolson, "A practical method for numerical
//! evaluation of solutions of partial differential equations of the
//! heat-conduction type." Math. Proc. Camb. Phil. Soc. **43** 50-67 (1947).
