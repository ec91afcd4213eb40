// src/grid.rs
//! Time-Grid Construction
//!
//! The animation layer maps a frame index to a time in [0, 1]; these helpers
//! build the full grid a trajectory is evaluated on. Both constructors pin
//! the endpoints to exactly 0 and 1, which the schedule boundary invariants
//! assume.

use crate::error::{validation::*, PathResult};

/// Uniform grid of `num_steps` intervals: num_steps + 1 points from 0 to 1
pub fn uniform_time_grid(num_steps: usize) -> PathResult<Vec<f64>> {
    validate_steps(num_steps)?;
    Ok((0..=num_steps)
        .map(|i| i as f64 / num_steps as f64)
        .collect())
}

/// Power-law grid: tᵢ = (i / num_steps)^exponent
///
/// An exponent above 1 concentrates points near t = 0 (slow start, fast
/// finish on screen); below 1 concentrates them near t = 1. Endpoints stay
/// exactly 0 and 1 for any positive exponent.
pub fn power_law_time_grid(num_steps: usize, exponent: f64) -> PathResult<Vec<f64>> {
    validate_steps(num_steps)?;
    validate_positive("exponent", exponent)?;
    validate_finite("exponent", exponent)?;
    Ok((0..=num_steps)
        .map(|i| (i as f64 / num_steps as f64).powf(exponent))
        .collect())
}
