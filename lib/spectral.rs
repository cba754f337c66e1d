//! Frequency-domain diagnostics over arbitrary real or complex signals.
//!
//! Nothing here depends on the simulator types; any finite one-dimensional
//! sequence can be analyzed, though the usual input is a state produced by
//! [`HuqceSimulator::run`][crate::evolve::HuqceSimulator::run].

use ndarray::{ self as nd, Ix1 };
use ndarray_linalg::Scalar;
use num_complex::Complex64 as C64;
use crate::{ ENTROPY_FLOOR, utils::fft_inplace };

/// Compute the Shannon entropy of a signal's normalized power spectrum,
/// ```text
/// S = -Σ_k p[k] ln(p[k] + ε), p[k] = |F[k]|² / Σ_j |F[j]|²
/// ```
/// where `F` is the discrete Fourier transform of the signal and the floor
/// `ε = 1e-12` guards the logarithm at empty bins.
///
/// A signal of exactly zero total power is assigned entropy `0.0` directly,
/// skipping the (undefined) normalization.
///
/// ```
/// use ndarray as nd;
/// use huqce::spectral::spectral_entropy;
///
/// // all power in the zero-frequency bin
/// let constant: nd::Array1<f64> = nd::Array1::ones(8);
/// assert!(spectral_entropy(&constant) < 1e-6);
///
/// // power spread over several bins
/// let tones: nd::Array1<f64>
///     = (0..64)
///     .map(|k| (0.5 * k as f64).sin() + (1.3 * k as f64).cos())
///     .collect();
/// assert!(spectral_entropy(&tones) > 0.0);
/// ```
pub fn spectral_entropy<S, A>(signal: &nd::ArrayBase<S, Ix1>) -> f64
where
    S: nd::Data<Elem = A>,
    A: Scalar<Real = f64>,
{
    let mut spectrum: nd::Array1<C64>
        = signal.iter().map(|ak| C64::new(ak.re(), ak.im())).collect();
    fft_inplace(&mut spectrum);
    let total: f64 = spectrum.iter().map(|fk| fk.norm_sqr()).sum();
    if total == 0.0 { return 0.0; }
    spectrum.iter()
        .map(|fk| {
            let p = fk.norm_sqr() / total;
            -p * (p + ENTROPY_FLOOR).ln()
        })
        .sum()
}
