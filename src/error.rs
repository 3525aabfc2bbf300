//! Configuration errors raised while building a controller.
//!
//! Runtime frame updates never fail; every implausible tuning value is caught
//! here, once, at initialisation.

use std::path::PathBuf;

use thiserror::Error;

/// Reasons a [`crate::LocomotionConfig`] cannot produce a controller.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A value that must be strictly positive was zero or negative.
    #[error("{field} must be greater than zero, got {value}")]
    NonPositive {
        /// Name of the offending config field.
        field: &'static str,
        /// Value supplied.
        value: f32,
    },
    /// A value was NaN or infinite.
    #[error("{field} must be finite, got {value}")]
    NotFinite {
        /// Name of the offending config field.
        field: &'static str,
        /// Value supplied.
        value: f32,
    },
    /// A rate or speed was below zero.
    #[error("{field} must not be negative, got {value}")]
    Negative {
        /// Name of the offending config field.
        field: &'static str,
        /// Value supplied.
        value: f32,
    },
    /// A downward velocity was zero or pointed upwards.
    #[error("{field} must be below zero, got {value}")]
    NotNegative {
        /// Name of the offending config field.
        field: &'static str,
        /// Value supplied.
        value: f32,
    },
    /// The config file could not be read.
    #[error("failed to read config {path}: {source}")]
    Io {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The config text was not valid JSON for [`crate::LocomotionConfig`].
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ConfigError {
    /// Checks `value` is finite and strictly positive.
    pub(crate) fn require_positive(field: &'static str, value: f32) -> Result<f32, Self> {
        Self::require_finite(field, value)?;
        if value > 0.0 {
            Ok(value)
        } else {
            Err(Self::NonPositive { field, value })
        }
    }

    /// Checks `value` is finite and not below zero.
    pub(crate) fn require_non_negative(field: &'static str, value: f32) -> Result<f32, Self> {
        Self::require_finite(field, value)?;
        if value >= 0.0 {
            Ok(value)
        } else {
            Err(Self::Negative { field, value })
        }
    }

    /// Checks `value` is finite and strictly below zero.
    pub(crate) fn require_negative(field: &'static str, value: f32) -> Result<f32, Self> {
        Self::require_finite(field, value)?;
        if value < 0.0 {
            Ok(value)
        } else {
            Err(Self::NotNegative { field, value })
        }
    }

    fn require_finite(field: &'static str, value: f32) -> Result<f32, Self> {
        if value.is_finite() {
            Ok(value)
        } else {
            Err(Self::NotFinite { field, value })
        }
    }
}
