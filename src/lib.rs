//! # flow-paths: Noise Schedules and Conditional Trajectories
//!
//! A Rust library for computing the probability paths behind diffusion and
//! flow-matching generative models: the deterministic (ODE) and stochastic
//! (SDE) 2-D sample paths connecting pure noise at t = 0 to a data point at
//! t = 1, driven by closed-form noise schedules.
//!
//! ## Key Features
//!
//! - **Eight noise schedules**: closed-form α(t)/β(t) pairs with derivatives
//! - **Exact SDE steps**: moment-matched Ornstein-Uhlenbeck residual updates,
//!   exact for any step size, not just small dt
//! - **Injectable randomness**: Brownian increments are generated separately
//!   and passed in as data, so every stochastic trajectory is replayable
//! - **Gaussian mixtures**: density evaluation, normalization and sampling
//!   for the 1-D marginals rendered alongside a path
//! - **Robust numerics**: vanishing diffusion, non-uniform grids and boundary
//!   singularities all handled explicitly
//!
//! ## Quick Start
//!
//! ```rust
//! use flow_paths::grid::uniform_time_grid;
//! use flow_paths::point::Point2D;
//! use flow_paths::rng::{generate_brownian_noise_for_times, seed_rng_from_u64};
//! use flow_paths::schedules::{DiffusionSchedule, NoiseSchedule};
//! use flow_paths::solvers::{conditional_ode_trajectory, conditional_sde_trajectory};
//!
//! let schedule = NoiseSchedule::ConstantVariance;
//! let times = uniform_time_grid(100).expect("valid step count");
//!
//! let initial = Point2D::new(-1.5, 2.0); // a draw from pure noise
//! let data = Point2D::new(1.0, -0.5);    // the data point to reach
//!
//! // Deterministic path: pure interpolation, lands exactly on the data point
//! let ode_path = conditional_ode_trajectory(initial, data, &schedule, &times);
//! assert!(ode_path[times.len() - 1].distance(&data) < 1e-12);
//!
//! // Stochastic path: same endpoints, Brownian wander in between
//! let diffusion = DiffusionSchedule::constant(0.5).expect("valid sigma");
//! let mut rng = seed_rng_from_u64(42);
//! let noise = generate_brownian_noise_for_times(&mut rng, &times);
//! let sde_path = conditional_sde_trajectory(initial, data, &schedule, &times, &diffusion, &noise)
//!     .expect("matching grid and noise");
//! assert_eq!(sde_path.len(), times.len());
//! ```
//!
//! ## Mathematical Foundation
//!
//! A noise schedule (α, β) defines the conditional interpolation
//! `x_t = α(t)·x_data + β(t)·x_noise`. The SDE path simulates the residual
//! `r_t = x_t − α(t)·x_data` as a linear SDE and reconstructs the sample at
//! each grid point; see [`solvers::sde`] for the moment-matching derivation.

// Module declarations
pub mod error;
pub mod gaussian;
pub mod grid;
pub mod point;
pub mod rng;
pub mod schedules;
pub mod solvers;

// Re-export commonly used types for convenience
pub use error::{PathError, PathResult};
pub use point::Point2D;
