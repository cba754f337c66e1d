//! Simulation parameter set.

use crate::error::ParamError;

/// Full parameter set for a [`HuqceSimulator`][crate::evolve::HuqceSimulator].
///
/// A value object: once handed to a simulator it is never modified. All
/// fields are public and carry defaults via [`Default`], so a caller usually
/// writes
/// ```
/// use huqce::params::HuqceParams;
///
/// let params = HuqceParams { steps: 500, ..HuqceParams::default() };
/// ```
///
/// Construction itself performs no checking; [`Self::validate`] is called at
/// simulator construction to reject parameter sets that could only produce
/// divergent or NaN-filled states.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HuqceParams {
    /// Number of spatial grid points.
    pub n: usize,
    /// Grid spacing.
    pub dx: f64,
    /// Time step.
    pub dt: f64,
    /// Number of steps taken by a full run.
    pub steps: usize,
    /// Nonlinearity strength.
    pub gamma: f64,
    /// Chaos coefficient.
    pub alpha: f64,
    /// Chaos strength scaling.
    pub epsilon: f64,
}

impl Default for HuqceParams {
    fn default() -> Self {
        Self {
            n: 256,
            dx: 0.1,
            dt: 0.01,
            steps: 100,
            gamma: 0.01,
            alpha: 0.005,
            epsilon: 0.1,
        }
    }
}

impl HuqceParams {
    /// Check all fields for sanity: the grid must have at least one point
    /// with positive, finite spacing, and the time step and coefficients
    /// must be finite.
    ///
    /// `steps == 0` is allowed; a zero-step run returns the initial state.
    pub fn validate(&self) -> Result<(), ParamError> {
        ParamError::check_grid_size(self.n)?;
        ParamError::check_spacing(self.dx)?;
        ParamError::check_time_step(self.dt)?;
        ParamError::check_coeff("gamma", self.gamma)?;
        ParamError::check_coeff("alpha", self.alpha)?;
        ParamError::check_coeff("epsilon", self.epsilon)?;
        Ok(())
    }

    /// Physical extent of the grid, `n * dx`.
    pub fn extent(&self) -> f64 { self.n as f64 * self.dx }
}
