// src/solvers/ode.rs
//! Deterministic Conditional Trajectory
//!
//! # Mathematical Framework
//!
//! The probability-flow ODE path conditioned on a data point has the closed
//! form
//! ```text
//! x(t) = α(t) * x_data + β(t) * x_initial
//! ```
//! so no integration is needed: each grid point is evaluated independently
//! from the schedule. For any schedule with α(0) = 0, β(0) = 1 the path
//! starts at the initial sample, and with α(1) = 1, β(1) = 0 it ends exactly
//! at the data point.

use crate::point::Point2D;
use crate::schedules::NoiseSchedule;

/// Evaluate the deterministic interpolation path on a time grid
///
/// Returns one point per grid time. Carries no state between points — the
/// same inputs always produce bit-identical output.
pub fn conditional_ode_trajectory(
    initial_sample: Point2D,
    data_point: Point2D,
    schedule: &NoiseSchedule,
    frame_times: &[f64],
) -> Vec<Point2D> {
    frame_times
        .iter()
        .map(|&t| data_point * schedule.alpha(t) + initial_sample * schedule.beta(t))
        .collect()
}
