//! Collection of all error types.
//!
//! All errors derive [`thiserror::Error`], making them composable when allowed
//! and compatible with application code using [`anyhow`][anyhow].
//!
//! [anyhow]: https://crates.io/crates/anyhow

use ndarray as nd;
use ndarray_linalg::error::LinalgError;
use num_complex::Complex64 as C64;
use thiserror::Error;

/// Returned when constructing a simulator from an out-of-range parameter set.
#[derive(Debug, Error)]
pub enum ParamError {
    /// Returned when the grid has no points.
    #[error("grid size must be at least 1; got {0}")]
    BadGridSize(usize),

    /// Returned when a non-positive or non-finite grid spacing is encountered.
    #[error("grid spacing must be positive and finite; got {0}")]
    BadSpacing(f64),

    /// Returned when a non-finite time step is encountered.
    #[error("time step must be finite; got {0}")]
    BadTimeStep(f64),

    /// Returned when a non-finite physical coefficient is encountered.
    #[error("coefficient {0} must be finite; got {1}")]
    BadCoeff(&'static str, f64),
}

impl ParamError {
    pub(crate) fn check_grid_size(n: usize) -> Result<(), Self> {
        (n >= 1).then_some(()).ok_or(Self::BadGridSize(n))
    }

    pub(crate) fn check_spacing(dx: f64) -> Result<(), Self> {
        (dx > 0.0 && dx.is_finite()).then_some(()).ok_or(Self::BadSpacing(dx))
    }

    pub(crate) fn check_time_step(dt: f64) -> Result<(), Self> {
        dt.is_finite().then_some(()).ok_or(Self::BadTimeStep(dt))
    }

    pub(crate) fn check_coeff(name: &'static str, val: f64) -> Result<(), Self> {
        val.is_finite().then_some(()).ok_or(Self::BadCoeff(name, val))
    }
}

/// Returned from a single Crank–Nicolson step when the implicit system cannot
/// be solved.
#[derive(Debug, Error)]
pub enum StepError {
    /// [`LinalgError`].
    #[error("linalg error: {0}")]
    Linalg(#[from] LinalgError),
}

/// Returned from [`HuqceSimulator::run`][crate::evolve::HuqceSimulator::run]
/// when a step fails.
///
/// Carries the index of the failed step along with the last successfully
/// computed state, so a caller can accept partial results or retry with a
/// different parameter set. Time stepping is deterministic, so retrying with
/// the same parameters repeats the failure.
#[derive(Debug, Error)]
#[error("step {step} failed: {error}")]
pub struct RunError {
    /// Index of the step that failed.
    pub step: usize,
    /// State as of the last successful step.
    pub last: nd::Array1<C64>,
    /// The underlying step failure.
    #[source]
    pub error: StepError,
}
