// src/gaussian.rs
//! Gaussian Densities and 1-D Mixtures
//!
//! # Mathematical Foundation
//!
//! The marginal density rendered alongside a probability path is a weighted
//! mixture of 1-D Gaussians:
//! ```text
//! p(x) = Σᵢ wᵢ * N(x; μᵢ, σᵢ),    N(x; μ, σ) = exp(-(x-μ)²/(2σ²)) / (σ√(2π))
//! ```
//!
//! The mixture is a normalized density only when the weights sum to 1;
//! [`normalize_components`] rescales an arbitrary non-negative weight vector
//! to that state. Evaluation shares the same numerical-correctness bar as the
//! trajectory integrator even though it feeds rendering, not integration.

use crate::error::{validation::*, PathError, PathResult};
use rand::Rng;
use rand_distr::{Distribution, Normal};
use statrs::function::erf;
use std::f64::consts::{PI, SQRT_2};

/// One weighted Gaussian in a mixture
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaussianComponent {
    pub weight: f64,
    pub mean: f64,
    pub std_dev: f64,
}

impl GaussianComponent {
    pub fn new(weight: f64, mean: f64, std_dev: f64) -> Self {
        GaussianComponent {
            weight,
            mean,
            std_dev,
        }
    }
}

/// Unchecked density kernel, shared by the fallible entry points
fn density(x: f64, mean: f64, std_dev: f64) -> f64 {
    let z = (x - mean) / std_dev;
    (-0.5 * z * z).exp() / (std_dev * (2.0 * PI).sqrt())
}

/// Gaussian probability density N(x; mean, std_dev)
///
/// Fails with an invalid-parameter error when `std_dev` ≤ 0.
pub fn gaussian_pdf(x: f64, mean: f64, std_dev: f64) -> PathResult<f64> {
    validate_positive("std_dev", std_dev)?;
    Ok(density(x, mean, std_dev))
}

/// Gaussian cumulative distribution Φ((x - mean) / std_dev)
///
/// # Formula
/// ```text
/// Φ(z) = (1 + erf(z / √2)) / 2
/// ```
pub fn gaussian_cdf(x: f64, mean: f64, std_dev: f64) -> PathResult<f64> {
    validate_positive("std_dev", std_dev)?;
    let z = (x - mean) / std_dev;
    Ok(0.5 * (1.0 + erf::erf(z / SQRT_2)))
}

/// Check every component of a mixture for validity
fn validate_components(components: &[GaussianComponent]) -> PathResult<()> {
    for component in components {
        validate_positive("std_dev", component.std_dev)?;
        validate_non_negative("weight", component.weight)?;
    }
    Ok(())
}

/// Rescale mixture weights to sum to 1
///
/// Pure: returns a new sequence and leaves the input untouched. Fails when
/// the total weight is not positive or any component std_dev ≤ 0.
pub fn normalize_components(
    components: &[GaussianComponent],
) -> PathResult<Vec<GaussianComponent>> {
    validate_components(components)?;

    let total_weight: f64 = components.iter().map(|c| c.weight).sum();
    if total_weight <= 0.0 {
        return Err(PathError::DegenerateMixture { total_weight });
    }

    Ok(components
        .iter()
        .map(|c| GaussianComponent {
            weight: c.weight / total_weight,
            ..*c
        })
        .collect())
}

/// Build the mixture density function x ↦ Σ wᵢ·N(x; μᵢ, σᵢ)
///
/// A weighted sum of densities — a normalized density of a single
/// distribution only when the weights already sum to 1. Components are
/// validated up front so the returned closure is infallible.
pub fn make_gaussian_mixture(
    components: &[GaussianComponent],
) -> PathResult<impl Fn(f64) -> f64> {
    validate_components(components)?;

    let components = components.to_vec();
    Ok(move |x: f64| {
        components
            .iter()
            .map(|c| c.weight * density(x, c.mean, c.std_dev))
            .sum()
    })
}

/// Weight-proportional component choice for a uniform draw u ∈ [0, 1)
///
/// Cumulative-sum round-off can leave the total slightly below u; that
/// shortfall falls back to the last positively weighted component, never a
/// zero-weight one.
fn choose_component(normalized: &[GaussianComponent], u: f64) -> usize {
    let mut cumulative = 0.0;
    for (i, component) in normalized.iter().enumerate() {
        cumulative += component.weight;
        if u < cumulative {
            return i;
        }
    }
    normalized
        .iter()
        .rposition(|c| c.weight > 0.0)
        .unwrap_or(0)
}

/// Draw one sample from a mixture
///
/// Picks a component with probability proportional to its weight, then
/// samples it through [`rand_distr::Normal`]. Fails on a degenerate mixture.
pub fn sample_mixture<R: Rng + ?Sized>(
    rng: &mut R,
    components: &[GaussianComponent],
) -> PathResult<f64> {
    let normalized = normalize_components(components)?;

    let u: f64 = rng.gen();
    let component = normalized[choose_component(&normalized, u)];
    let normal = Normal::new(component.mean, component.std_dev).map_err(|e| {
        PathError::RandomGenerationError {
            reason: format!("normal distribution rejected component: {}", e),
        }
    })?;
    Ok(normal.sample(rng))
}
