// src/solvers/mod.rs
//! Conditional trajectory calculators (deterministic and stochastic)

pub mod ode;
pub mod sde;

pub use ode::conditional_ode_trajectory;
pub use sde::conditional_sde_trajectory;
