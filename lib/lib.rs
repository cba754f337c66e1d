#![allow(dead_code, non_snake_case)]

//! Provides a simulator for a one-dimensional nonlinear Schrödinger-type
//! system ("HUQCE") evolved via an implicit Crank–Nicolson scheme with a
//! density-dependent self-interaction and a deterministic, non-unitary
//! "chaos" perturbation, renormalized after every step.
//!
//! Provides implementations for the following numerical routines:
//! - Time stepping:
//!     - Implicit Crank–Nicolson with a per-step nonlinear diagonal (dense
//!       LAPACK solve; no factorization reuse)
//!     - Momentum-deviation chaos perturbation with forced renormalization
//! - Diagnostics:
//!     - Momentum expectation value
//!     - Shannon entropy of a signal's normalized power spectrum
//!
//! See [`docs`] for theoretical background.

pub mod error;
pub mod params;
pub mod utils;
pub mod solve;
pub mod evolve;
pub mod spectral;

pub mod docs;

pub(crate) const ENTROPY_FLOOR: f64 = 1e-12;

pub type Arr1<S> = ndarray::ArrayBase<S, ndarray::Ix1>;
pub type Arr2<S> = ndarray::ArrayBase<S, ndarray::Ix2>;
