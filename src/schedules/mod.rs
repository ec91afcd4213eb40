// src/schedules/mod.rs
//! Noise and diffusion coefficient schedules

pub mod diffusion;
pub mod noise;

pub use diffusion::DiffusionSchedule;
pub use noise::NoiseSchedule;
