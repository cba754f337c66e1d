//! Time evolution of an owned HUQCE state.

use std::f64::consts::PI;
use ndarray as nd;
use num_complex::Complex64 as C64;
use crate::{
    error::{ ParamError, RunError },
    params::HuqceParams,
    solve::{ crank_nicolson_step, laplacian, momentum_expectation, StepResult },
};

pub type RunResult<T> = Result<T, RunError>;

/// Drives repeated [`crank_nicolson_step`]s over an owned state vector.
///
/// The state is seeded at construction as the fundamental sine mode on
/// `[0, n δx]`, `ψ(x) = √(2/L) sin(πx/L)` with `L = n δx`, promoted to
/// complex. The discrete Laplacian is built once at the same time and never
/// modified afterward. Each step replaces the state wholesale; intermediate
/// states can be observed through [`Self::state`] between [`Self::step`]
/// calls.
///
/// Evolution is fully deterministic: the chaos perturbation is a function of
/// the current state, not a random process, so two simulators built from the
/// same parameters produce the same trajectory.
///
/// A simulator is single-threaded; concurrent callers should each hold their
/// own instance.
///
/// ```
/// use huqce::{ evolve::HuqceSimulator, params::HuqceParams };
///
/// let params = HuqceParams { steps: 10, ..HuqceParams::default() };
/// let mut sim = HuqceSimulator::new(params).unwrap();
/// let psi = sim.run().unwrap();
/// assert_eq!(psi.len(), params.n);
/// ```
#[derive(Clone, Debug)]
pub struct HuqceSimulator {
    params: HuqceParams,
    psi: nd::Array1<C64>,
    laplacian: nd::Array2<f64>,
}

impl HuqceSimulator {
    /// Create a new simulator from a validated parameter set.
    ///
    /// Fails fast on an out-of-range parameter set; retrying with the same
    /// parameters cannot succeed.
    pub fn new(params: HuqceParams) -> Result<Self, ParamError> {
        params.validate()?;
        let len = params.extent();
        let x: nd::Array1<f64> = nd::Array1::linspace(0.0, len, params.n);
        let amp = (2.0 / len).sqrt();
        let psi: nd::Array1<C64>
            = x.mapv(|xk| C64::from(amp * (PI * xk / len).sin()));
        let lap = laplacian(params.n, params.dx);
        Ok(Self { params, psi, laplacian: lap })
    }

    /// Return the parameter set.
    pub fn params(&self) -> &HuqceParams { &self.params }

    /// View the current state.
    pub fn state(&self) -> nd::ArrayView1<'_, C64> { self.psi.view() }

    /// Advance the state by a single time step.
    pub fn step(&mut self) -> StepResult<()> {
        let p_exp = momentum_expectation(&self.psi, self.params.dx);
        self.psi = crank_nicolson_step(
            &self.psi,
            &self.laplacian,
            self.params.dt,
            self.params.gamma,
            self.params.alpha,
            self.params.epsilon,
            p_exp,
        )?;
        Ok(())
    }

    /// Advance the state by `params.steps` time steps and return the final
    /// state.
    ///
    /// Aborts on the first failed step; the error carries the index of that
    /// step and the state as of the last successful one.
    pub fn run(&mut self) -> RunResult<nd::Array1<C64>> {
        for k in 0..self.params.steps {
            self.step().map_err(|error| {
                RunError { step: k, last: self.psi.clone(), error }
            })?;
        }
        Ok(self.psi.clone())
    }
}
