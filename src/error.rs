// src/error.rs
use std::fmt;

/// Custom error types for the flow-paths library
#[derive(Debug, Clone)]
pub enum PathError {
    /// Invalid parameter values
    InvalidParameters {
        parameter: String,
        value: f64,
        constraint: String,
    },

    /// Gaussian mixture whose weights cannot be normalized
    DegenerateMixture { total_weight: f64 },

    /// Supplied noise increments do not cover the time grid
    NoiseLengthMismatch {
        grid_points: usize,
        increments: usize,
    },

    /// Invalid configuration
    InvalidConfiguration { field: String, reason: String },

    /// RNG or random number generation error
    RandomGenerationError { reason: String },
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathError::InvalidParameters {
                parameter,
                value,
                constraint,
            } => {
                write!(
                    f,
                    "Invalid parameter '{}' = {}: {}",
                    parameter, value, constraint
                )
            }
            PathError::DegenerateMixture { total_weight } => {
                write!(
                    f,
                    "Degenerate Gaussian mixture: total weight {} is not positive",
                    total_weight
                )
            }
            PathError::NoiseLengthMismatch {
                grid_points,
                increments,
            } => {
                write!(
                    f,
                    "Noise sequence too short: {} increments for a {}-point time grid (need at least {})",
                    increments,
                    grid_points,
                    grid_points.saturating_sub(1)
                )
            }
            PathError::InvalidConfiguration { field, reason } => {
                write!(f, "Invalid configuration for '{}': {}", field, reason)
            }
            PathError::RandomGenerationError { reason } => {
                write!(f, "Random number generation error: {}", reason)
            }
        }
    }
}

impl std::error::Error for PathError {}

/// Result type alias for flow-paths operations
pub type PathResult<T> = Result<T, PathError>;

/// Validation utilities
pub mod validation {
    use super::{PathError, PathResult};

    /// Validate that a parameter is positive
    pub fn validate_positive(name: &str, value: f64) -> PathResult<()> {
        if value <= 0.0 {
            Err(PathError::InvalidParameters {
                parameter: name.to_string(),
                value,
                constraint: "must be positive (> 0)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate that a parameter is non-negative
    pub fn validate_non_negative(name: &str, value: f64) -> PathResult<()> {
        if value < 0.0 {
            Err(PathError::InvalidParameters {
                parameter: name.to_string(),
                value,
                constraint: "must be non-negative (≥ 0)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate that a value is finite and not NaN
    pub fn validate_finite(name: &str, value: f64) -> PathResult<()> {
        if !value.is_finite() {
            Err(PathError::InvalidParameters {
                parameter: name.to_string(),
                value,
                constraint: "must be finite (not NaN or infinite)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate steps count
    pub fn validate_steps(steps: usize) -> PathResult<()> {
        if steps == 0 {
            Err(PathError::InvalidConfiguration {
                field: "steps".to_string(),
                reason: "must be greater than 0".to_string(),
            })
        } else if steps > 1_000_000 {
            Err(PathError::InvalidConfiguration {
                field: "steps".to_string(),
                reason: "exceeds maximum allowed (1,000,000)".to_string(),
            })
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::validation::*;
    use super::*;

    #[test]
    fn test_validate_positive() {
        assert!(validate_positive("std_dev", 0.2).is_ok());
        assert!(validate_positive("std_dev", 0.0).is_err());
        assert!(validate_positive("std_dev", -0.1).is_err());
    }

    #[test]
    fn test_validate_non_negative() {
        assert!(validate_non_negative("sigma", 0.0).is_ok());
        assert!(validate_non_negative("sigma", 0.5).is_ok());
        assert!(validate_non_negative("sigma", -0.5).is_err());
    }

    #[test]
    fn test_validate_finite() {
        assert!(validate_finite("value", 1.0).is_ok());
        assert!(validate_finite("value", f64::NAN).is_err());
        assert!(validate_finite("value", f64::INFINITY).is_err());
        assert!(validate_finite("value", f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_validate_steps() {
        assert!(validate_steps(1).is_ok());
        assert!(validate_steps(300).is_ok());
        assert!(validate_steps(0).is_err());
        assert!(validate_steps(2_000_000).is_err());
    }

    #[test]
    fn test_error_display() {
        let error = PathError::InvalidParameters {
            parameter: "std_dev".to_string(),
            value: -0.1,
            constraint: "must be positive".to_string(),
        };

        let display = format!("{}", error);
        assert!(display.contains("std_dev"));
        assert!(display.contains("-0.1"));
        assert!(display.contains("positive"));
    }

    #[test]
    fn test_noise_mismatch_display() {
        let error = PathError::NoiseLengthMismatch {
            grid_points: 101,
            increments: 50,
        };

        let display = format!("{}", error);
        assert!(display.contains("101"));
        assert!(display.contains("50"));
        assert!(display.contains("100"));
    }
}
