// src/schedules/diffusion.rs
//! Diffusion Coefficient Schedules
//!
//! The diffusion coefficient σ(t) ≥ 0 sets the magnitude of the stochastic
//! driving noise in the SDE path. Only [`Constant`] is exercised by the rest
//! of the system; the enum leaves room for time-dependent schedules without
//! changing the `solvers::sde` call site.
//!
//! [`Constant`]: DiffusionSchedule::Constant

use crate::error::{validation::validate_non_negative, PathResult};

/// Stochastic diffusion magnitude σ(t)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DiffusionSchedule {
    /// Fixed σ, independent of t
    Constant(f64),
}

impl DiffusionSchedule {
    /// Constant schedule with validated σ ≥ 0
    pub fn constant(sigma: f64) -> PathResult<Self> {
        validate_non_negative("sigma", sigma)?;
        Ok(DiffusionSchedule::Constant(sigma))
    }

    /// Evaluate σ at time t
    pub fn value(&self, _t: f64) -> f64 {
        match self {
            DiffusionSchedule::Constant(sigma) => *sigma,
        }
    }
}
