// src/schedules/noise.rs
//! Noise Schedules for Diffusion Probability Paths
//!
//! # Mathematical Framework
//!
//! A noise schedule is a pair of mixing coefficients (α, β) defining how much
//! of the data signal vs. independent noise is present at time t:
//! ```text
//! x_t = α(t) * x_data + β(t) * x_noise,   t ∈ [0, 1]
//! ```
//!
//! At t = 0 the sample is pure noise (α = 0, β = 1); at t = 1 it is the data
//! point (α = 1, β = 0). The one documented exception is [`LinearStdDev`],
//! whose β grows with t by design.
//!
//! # Variant Table
//!
//! | Variant            | α(t)      | β(t)        |
//! |--------------------|-----------|-------------|
//! | `Linear`           | t         | 1 − t       |
//! | `Sqrt`             | t         | √(1 − t)    |
//! | `InverseSqrt`      | t         | 1 − t²      |
//! | `ConstantVariance` | t         | √(1 − t²)   |
//! | `SqrtSqrt`         | √t        | √(1 − t)    |
//! | `Circular`         | sin(πt/2) | cos(πt/2)   |
//! | `LinearVariance`   | t         | √(t(1 − t)) |
//! | `LinearStdDev`     | t         | t           |
//!
//! # Domain Boundary Policy
//!
//! The input t is saturated to [0, 1] before evaluating α/β — values outside
//! are clamped, never extrapolated. Derivatives are evaluated only on the
//! open interval (0, 1): at t ≤ 0 or t ≥ 1 every derivative returns exactly
//! 0. Several schedules have singular one-sided derivatives at the boundary
//! (e.g. β′ = −t/√(1 − t²) for [`ConstantVariance`] blows up at t = 1), and
//! the variance-matching math in `solvers::sde` relies on the zero
//! convention there. Callers must not expect derivative continuity at the
//! endpoints, even for schedules where the true one-sided derivative is
//! finite and nonzero.
//!
//! [`LinearStdDev`]: NoiseSchedule::LinearStdDev
//! [`ConstantVariance`]: NoiseSchedule::ConstantVariance

use std::f64::consts::FRAC_PI_2;

/// Closed-form noise schedule variants
///
/// Each variant is a stateless bundle of pure functions {α, α′, β, β′};
/// a single value can be created once and reused across many trajectory
/// computations, including concurrently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoiseSchedule {
    /// α = t, β = 1 − t (straight interpolation)
    Linear,
    /// α = t, β = √(1 − t)
    Sqrt,
    /// α = t, β = 1 − t²
    InverseSqrt,
    /// α = t, β = √(1 − t²) (variance-preserving)
    ConstantVariance,
    /// α = √t, β = √(1 − t)
    SqrtSqrt,
    /// α = sin(πt/2), β = cos(πt/2)
    Circular,
    /// α = t, β = √(t(1 − t)); β vanishes at both endpoints
    LinearVariance,
    /// α = t, β = t; the exception to β(1) = 0 — noise grows with t
    LinearStdDev,
}

/// Saturate t to the schedule domain [0, 1]
fn clamp_unit(t: f64) -> f64 {
    t.clamp(0.0, 1.0)
}

impl NoiseSchedule {
    /// Every variant, in UI display order
    pub const ALL: [NoiseSchedule; 8] = [
        NoiseSchedule::Linear,
        NoiseSchedule::Sqrt,
        NoiseSchedule::InverseSqrt,
        NoiseSchedule::ConstantVariance,
        NoiseSchedule::SqrtSqrt,
        NoiseSchedule::Circular,
        NoiseSchedule::LinearVariance,
        NoiseSchedule::LinearStdDev,
    ];

    /// Signal coefficient α(t)
    pub fn alpha(&self, t: f64) -> f64 {
        let t = clamp_unit(t);
        match self {
            NoiseSchedule::Linear
            | NoiseSchedule::Sqrt
            | NoiseSchedule::InverseSqrt
            | NoiseSchedule::ConstantVariance
            | NoiseSchedule::LinearVariance
            | NoiseSchedule::LinearStdDev => t,
            NoiseSchedule::SqrtSqrt => t.sqrt(),
            NoiseSchedule::Circular => (FRAC_PI_2 * t).sin(),
        }
    }

    /// Noise coefficient β(t)
    pub fn beta(&self, t: f64) -> f64 {
        let t = clamp_unit(t);
        match self {
            NoiseSchedule::Linear => 1.0 - t,
            NoiseSchedule::Sqrt | NoiseSchedule::SqrtSqrt => (1.0 - t).sqrt(),
            NoiseSchedule::InverseSqrt => 1.0 - t * t,
            NoiseSchedule::ConstantVariance => (1.0 - t * t).sqrt(),
            NoiseSchedule::Circular => (FRAC_PI_2 * t).cos(),
            NoiseSchedule::LinearVariance => (t * (1.0 - t)).sqrt(),
            NoiseSchedule::LinearStdDev => t,
        }
    }

    /// dα/dt, exactly 0 at t ≤ 0 and t ≥ 1 (boundary convention)
    pub fn alpha_derivative(&self, t: f64) -> f64 {
        if t <= 0.0 || t >= 1.0 {
            return 0.0;
        }
        match self {
            NoiseSchedule::Linear
            | NoiseSchedule::Sqrt
            | NoiseSchedule::InverseSqrt
            | NoiseSchedule::ConstantVariance
            | NoiseSchedule::LinearVariance
            | NoiseSchedule::LinearStdDev => 1.0,
            NoiseSchedule::SqrtSqrt => 0.5 / t.sqrt(),
            NoiseSchedule::Circular => FRAC_PI_2 * (FRAC_PI_2 * t).cos(),
        }
    }

    /// dβ/dt, exactly 0 at t ≤ 0 and t ≥ 1 (boundary convention)
    pub fn beta_derivative(&self, t: f64) -> f64 {
        if t <= 0.0 || t >= 1.0 {
            return 0.0;
        }
        match self {
            NoiseSchedule::Linear => -1.0,
            NoiseSchedule::Sqrt | NoiseSchedule::SqrtSqrt => -0.5 / (1.0 - t).sqrt(),
            NoiseSchedule::InverseSqrt => -2.0 * t,
            NoiseSchedule::ConstantVariance => -t / (1.0 - t * t).sqrt(),
            NoiseSchedule::Circular => -FRAC_PI_2 * (FRAC_PI_2 * t).sin(),
            NoiseSchedule::LinearVariance => (1.0 - 2.0 * t) / (2.0 * (t * (1.0 - t)).sqrt()),
            NoiseSchedule::LinearStdDev => 1.0,
        }
    }

    /// Display name, as selected by the consuming UI
    pub fn name(&self) -> &'static str {
        match self {
            NoiseSchedule::Linear => "linear",
            NoiseSchedule::Sqrt => "sqrt",
            NoiseSchedule::InverseSqrt => "inverse-sqrt",
            NoiseSchedule::ConstantVariance => "constant-variance",
            NoiseSchedule::SqrtSqrt => "sqrt-sqrt",
            NoiseSchedule::Circular => "circular-circular",
            NoiseSchedule::LinearVariance => "linear-variance",
            NoiseSchedule::LinearStdDev => "linear-stddev",
        }
    }

    /// Look up a variant by its display name
    pub fn from_name(name: &str) -> Option<NoiseSchedule> {
        NoiseSchedule::ALL.iter().copied().find(|s| s.name() == name)
    }
}
