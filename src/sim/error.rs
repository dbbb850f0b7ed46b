//! Validation errors for world construction

use std::fmt;

/// Rejected play field configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Dimensions must be finite and positive
    InvalidDimensions { width: f32, height: f32 },
    /// Each dimension must be at least `min`, or the wraparound snap for the
    /// largest asteroid tier degenerates
    FieldTooSmall { width: f32, height: f32, min: f32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidDimensions { width, height } => {
                write!(
                    f,
                    "field dimensions {width}x{height} must be finite and positive"
                )
            }
            ConfigError::FieldTooSmall { width, height, min } => {
                write!(
                    f,
                    "field {width}x{height} is below the {min} minimum per axis"
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}
