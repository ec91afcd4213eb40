// src/rng.rs
//! Brownian Increment Generation
//!
//! # Design Philosophy
//!
//! The SDE integrator never draws randomness itself — noise is generated
//! here, up front, and passed in as data. Fixing a noise sequence therefore
//! makes the whole stochastic trajectory deterministic and replayable, which
//! is what the animation layer needs to scrub back and forth through a path.
//! Both entry points take an explicit `rand::Rng`, so reproducibility is a
//! matter of seeding: same seed → same increments → same trajectory.
//!
//! # Box-Muller Transform
//!
//! Converts uniform random variables to normal draws:
//! ```text
//! Z₁ = √(-2 ln(U₁)) * cos(2π U₂)
//! Z₂ = √(-2 ln(U₁)) * sin(2π U₂)
//! ```
//! where U₁, U₂ ~ Uniform(0,1) and Z₁, Z₂ ~ N(0,1). One uniform pair yields
//! both coordinates of a [`Point2D`] increment.
//!
//! # Pre-Scaling Contract
//!
//! A Wiener increment over an interval of width dt has variance dt, so each
//! coordinate is scaled by √dt here, at generation time. The integrator
//! divides the stored increment by √dt of its own interval to recover
//! unit-variance shocks.

use crate::error::{validation::*, PathResult};
use crate::point::Point2D;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::PI;

/// Build a reproducible generator from a fixed seed
pub fn seed_rng_from_u64(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// One Box-Muller draw: two independent standard normals
fn box_muller<R: Rng + ?Sized>(rng: &mut R) -> (f64, f64) {
    // 1 - U maps [0, 1) to (0, 1], keeping the log argument positive.
    let u1: f64 = 1.0 - rng.gen::<f64>();
    let u2: f64 = rng.gen();
    let mag = (-2.0 * u1.ln()).sqrt();
    let angle = 2.0 * PI * u2;
    (mag * angle.cos(), mag * angle.sin())
}

/// Wiener increments for a uniform time grid
///
/// Produces `num_steps` independent increments, each coordinate drawn as
/// N(0, dt). Errors on a zero step count or non-positive dt.
pub fn generate_brownian_noise<R: Rng + ?Sized>(
    rng: &mut R,
    num_steps: usize,
    dt: f64,
) -> PathResult<Vec<Point2D>> {
    validate_steps(num_steps)?;
    validate_positive("dt", dt)?;
    validate_finite("dt", dt)?;

    let scale = dt.sqrt();
    Ok((0..num_steps)
        .map(|_| {
            let (zx, zy) = box_muller(rng);
            Point2D::new(zx * scale, zy * scale)
        })
        .collect())
}

/// Wiener increments for a (possibly non-uniform) time grid
///
/// Produces one increment per consecutive pair of grid times, scaled by
/// √(dt_i) of the local interval — the first grid point has no increment.
/// A non-increasing pair yields a zero increment, matching the integrator's
/// hold-previous-point policy for malformed grids.
pub fn generate_brownian_noise_for_times<R: Rng + ?Sized>(
    rng: &mut R,
    frame_times: &[f64],
) -> Vec<Point2D> {
    frame_times
        .windows(2)
        .map(|pair| {
            let dt = (pair[1] - pair[0]).max(0.0);
            let scale = dt.sqrt();
            let (zx, zy) = box_muller(rng);
            Point2D::new(zx * scale, zy * scale)
        })
        .collect()
}

/// The all-zero increment sequence
///
/// Driving the SDE integrator with zero noise isolates its deterministic
/// drift, which is how the convergence-to-data-point property is exercised.
pub fn zero_noise(num_steps: usize) -> Vec<Point2D> {
    vec![Point2D::ORIGIN; num_steps]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_noise_count_and_finiteness() {
        let mut rng = seed_rng_from_u64(42);
        let noise = generate_brownian_noise(&mut rng, 100, 0.01).expect("valid arguments");

        assert_eq!(noise.len(), 100);
        assert!(noise.iter().all(|dw| dw.is_finite()));
    }

    #[test]
    fn test_uniform_noise_rejects_bad_arguments() {
        let mut rng = seed_rng_from_u64(42);
        assert!(generate_brownian_noise(&mut rng, 0, 0.01).is_err());
        assert!(generate_brownian_noise(&mut rng, 10, 0.0).is_err());
        assert!(generate_brownian_noise(&mut rng, 10, -0.5).is_err());
    }

    #[test]
    fn test_non_uniform_noise_count() {
        let mut rng = seed_rng_from_u64(7);
        let times = [0.0, 0.1, 0.3, 0.7, 1.0];
        let noise = generate_brownian_noise_for_times(&mut rng, &times);

        assert_eq!(noise.len(), 4);
        assert!(noise.iter().all(|dw| dw.is_finite()));
    }

    #[test]
    fn test_non_increasing_pair_yields_zero_increment() {
        let mut rng = seed_rng_from_u64(7);
        let times = [0.0, 0.5, 0.5, 1.0];
        let noise = generate_brownian_noise_for_times(&mut rng, &times);

        assert_eq!(noise.len(), 3);
        assert_eq!(noise[1], Point2D::ORIGIN);
    }

    #[test]
    fn test_seed_reproducibility() {
        let mut rng1 = seed_rng_from_u64(1234);
        let mut rng2 = seed_rng_from_u64(1234);

        let a = generate_brownian_noise(&mut rng1, 50, 0.02).expect("valid arguments");
        let b = generate_brownian_noise(&mut rng2, 50, 0.02).expect("valid arguments");

        assert_eq!(a, b);
    }

    #[test]
    fn test_increment_variance_matches_dt() {
        let mut rng = seed_rng_from_u64(99);
        let dt = 0.01;
        let noise = generate_brownian_noise(&mut rng, 50_000, dt).expect("valid arguments");

        let n = noise.len() as f64;
        let mean_x = noise.iter().map(|dw| dw.x).sum::<f64>() / n;
        let var_x = noise.iter().map(|dw| (dw.x - mean_x).powi(2)).sum::<f64>() / n;

        assert!(mean_x.abs() < 0.002, "mean {} should be near 0", mean_x);
        assert!(
            (var_x - dt).abs() < 0.001,
            "variance {} should be near dt = {}",
            var_x,
            dt
        );
    }

    #[test]
    fn test_zero_noise() {
        let noise = zero_noise(10);
        assert_eq!(noise.len(), 10);
        assert!(noise.iter().all(|dw| *dw == Point2D::ORIGIN));
    }
}
