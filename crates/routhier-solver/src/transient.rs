//! Time-domain simulation of the state-space model.
//!
//! Fixed-step 4th-order Runge-Kutta over `dx/dt = Ax + Bu` with zero
//! initial state. The input is held constant across the four stage
//! evaluations (zero-order hold); each step depends on the previous state,
//! so this loop stays sequential.

use nalgebra::DVector;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::state_space::StateSpaceModel;

/// Simulation configuration: total horizon and integration step, in the
/// system's time units. Fixed defaults, never derived from the dynamics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationParams {
    /// Total simulated time.
    pub horizon: f64,
    /// Integration step size.
    pub step: f64,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            horizon: 10.0,
            step: 0.01,
        }
    }
}

impl SimulationParams {
    /// The uniform time grid `0, dt, 2dt, …, horizon`.
    pub fn time_grid(&self) -> Vec<f64> {
        let steps = (self.horizon / self.step).round() as usize;
        (0..=steps).map(|i| i as f64 * self.step).collect()
    }
}

/// A sampled response: equal-length time and value sequences.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeSeries {
    pub time: Vec<f64>,
    pub response: Vec<f64>,
}

/// Integrate the model over a uniform time grid with the given input
/// signal, returning one output sample per grid point.
pub fn simulate(model: &StateSpaceModel, input: &[f64], time: &[f64]) -> Result<Vec<f64>> {
    if input.len() != time.len() {
        return Err(Error::DimensionMismatch {
            expected: time.len(),
            actual: input.len(),
        });
    }
    if time.len() < 2 {
        return Err(Error::TimeGridTooShort);
    }
    let dt = time[1] - time[0];

    let mut x = DVector::zeros(model.order());
    let mut output = Vec::with_capacity(input.len());

    for &u in input {
        let bu = &model.b * u;
        let k1 = &model.a * &x + &bu;
        let k2 = &model.a * (&x + &k1 * (dt / 2.0)) + &bu;
        let k3 = &model.a * (&x + &k2 * (dt / 2.0)) + &bu;
        let k4 = &model.a * (&x + &k3 * dt) + &bu;
        x += (k1 + k2 * 2.0 + k3 * 2.0 + k4) * (dt / 6.0);

        // Output is sampled from the updated state.
        output.push((&model.c * &x)[(0, 0)] + model.d * u);
    }

    Ok(output)
}

/// Unit-step response over the configured grid.
pub fn step_response(model: &StateSpaceModel, params: &SimulationParams) -> Result<TimeSeries> {
    let time = params.time_grid();
    let input = vec![1.0; time.len()];
    let response = simulate(model, &input, &time)?;
    Ok(TimeSeries { time, response })
}

/// Impulse response over the configured grid.
///
/// The impulse is approximated by a single spike of magnitude `1/dt` at
/// the first grid point. The approximation error scales with the step
/// size; this is the documented behavior, not an accuracy guarantee.
pub fn impulse_response(model: &StateSpaceModel, params: &SimulationParams) -> Result<TimeSeries> {
    let time = params.time_grid();
    let mut input = vec![0.0; time.len()];
    if !input.is_empty() {
        input[0] = 1.0 / params.step;
    }
    let response = simulate(model, &input, &time)?;
    Ok(TimeSeries { time, response })
}
