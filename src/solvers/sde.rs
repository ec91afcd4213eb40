// src/solvers/sde.rs
//! Stochastic Conditional Trajectory
//!
//! # Mathematical Framework
//!
//! The stochastic path tracks the residual process
//! ```text
//! r_t = x_t - α(t) * x_data
//! ```
//! which follows a linear (Ornstein-Uhlenbeck-like) SDE with drift rate
//! ```text
//! a(t) = β'(t)/β(t) - σ(t)²/(2 β(t)²)
//! ```
//! Over one grid step of width dt the solution has decay factor
//! φ = exp(a·dt) and residual variance
//! ```text
//! Var = σ²/(2a) * (φ² - 1)        (→ σ²·dt as a → 0)
//! ```
//! The update `r ← φ·r + √Var · z` matches the exact first and second
//! moments of the OU solution, so the step is exact for any dt — not a
//! first-order Euler approximation.
//!
//! # Convergence
//!
//! As t → 1, β → 0 drives a → -∞, so φ → 0 and the variance increment → 0:
//! the residual is annihilated and the trajectory lands on the data point.
//! With all-zero noise increments the recursion degenerates to r ← φ·r and
//! the convergence is exact.
//!
//! # Numerical Guards
//!
//! - β is floored at 1e-4 (β legitimately reaches 0 at t = 1).
//! - |a| below 1e-8 switches the variance to its σ²·dt limit (avoids 0/0).
//! - A variance increment that rounds slightly negative is floored at 0.
//! - A non-increasing grid pair is skipped and the previous point re-emitted.

use crate::error::{PathError, PathResult};
use crate::point::Point2D;
use crate::schedules::{DiffusionSchedule, NoiseSchedule};

/// Division floor for β(t); β reaches 0 exactly at t = 1
const BETA_FLOOR: f64 = 1e-4;

/// Below this drift magnitude the variance formula degenerates to 0/0
const DRIFT_EPSILON: f64 = 1e-8;

/// Integrate the conditional SDE path on a time grid
///
/// Consumes pre-scaled Wiener increments (one per grid interval, scaled by
/// √dt of that interval) produced by [`crate::rng`]. Randomness is injected
/// as data, never drawn here, so a fixed noise sequence makes the result
/// fully deterministic and replayable.
///
/// # Errors
///
/// Fails with [`PathError::NoiseLengthMismatch`] when fewer than
/// `frame_times.len() - 1` increments are supplied. An empty grid yields an
/// empty trajectory.
pub fn conditional_sde_trajectory(
    initial_sample: Point2D,
    data_point: Point2D,
    schedule: &NoiseSchedule,
    frame_times: &[f64],
    diffusion: &DiffusionSchedule,
    noise: &[Point2D],
) -> PathResult<Vec<Point2D>> {
    if frame_times.is_empty() {
        return Ok(Vec::new());
    }
    if noise.len() + 1 < frame_times.len() {
        return Err(PathError::NoiseLengthMismatch {
            grid_points: frame_times.len(),
            increments: noise.len(),
        });
    }

    let mut trajectory = Vec::with_capacity(frame_times.len());
    let mut residual = initial_sample - data_point * schedule.alpha(frame_times[0]);
    trajectory.push(initial_sample);

    for i in 1..frame_times.len() {
        let t = frame_times[i];
        let dt = t - frame_times[i - 1];
        if dt <= 0.0 {
            // Lenient policy for malformed grids: hold the previous point.
            let held = trajectory[i - 1];
            trajectory.push(held);
            continue;
        }

        let beta = schedule.beta(t).max(BETA_FLOOR);
        let beta_prime = schedule.beta_derivative(t);
        let sigma = diffusion.value(t);

        let drift_rate = beta_prime / beta - sigma * sigma / (2.0 * beta * beta);
        let decay = (drift_rate * dt).exp();

        let variance_increment = if drift_rate.abs() < DRIFT_EPSILON {
            sigma * sigma * dt
        } else {
            sigma * sigma / (2.0 * drift_rate) * (decay * decay - 1.0)
        };
        let noise_scale = variance_increment.max(0.0).sqrt();

        // Stored increments are pre-scaled by √dt of their own interval;
        // undo that to recover unit-variance shocks.
        let shock = noise[i - 1] * (1.0 / dt.sqrt());

        residual = residual * decay + shock * noise_scale;
        trajectory.push(data_point * schedule.alpha(t) + residual);
    }

    Ok(trajectory)
}
