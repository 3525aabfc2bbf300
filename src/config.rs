//! Tuning parameters for the locomotion controller.
//!
//! Values are plain design-time constants. They can be built in code, or
//! loaded from JSON with any omitted field falling back to its default.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_FACING_SMOOTHING_RATE, DEFAULT_FALLING_THRESHOLD, DEFAULT_HORIZONTAL_SPEED,
    DEFAULT_JUMP_DURATION, DEFAULT_JUMP_HEIGHT, DEFAULT_MAX_JUMP_CHARGES, DEFAULT_REST_VELOCITY,
    DEFAULT_ROTATION_SMOOTHING_RATE,
};
use crate::error::ConfigError;

/// Design-time tuning for a single character.
///
/// # Examples
///
/// ```
/// use locomotion::LocomotionConfig;
///
/// let config = LocomotionConfig::from_json_str(r#"{ "jump_height": 2.0 }"#).unwrap();
/// assert_eq!(config.jump_height, 2.0);
/// assert_eq!(config.max_jump_charges, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LocomotionConfig {
    /// Ground speed in world units per second at full input.
    pub horizontal_speed: f32,
    /// Fraction per second the model turns toward its movement direction.
    pub rotation_smoothing_rate: f32,
    /// Fraction per second the character turns toward the camera yaw.
    pub facing_smoothing_rate: f32,
    /// Vertical velocity held while standing on a surface.
    pub rest_velocity: f32,
    /// Height of a jump apex above take-off, in world units.
    pub jump_height: f32,
    /// Seconds from take-off back to take-off height.
    pub jump_duration: f32,
    /// Jumps available between landings.
    pub max_jump_charges: u32,
    /// Vertical velocity below which the character counts as falling.
    pub falling_threshold: f32,
    /// Longest frame time fed to the simulation, if any.
    ///
    /// Frame hitches longer than this are clamped so the character does not
    /// tunnel or overshoot its jump arc.
    pub max_delta_seconds: Option<f32>,
}

impl Default for LocomotionConfig {
    fn default() -> Self {
        Self {
            horizontal_speed: DEFAULT_HORIZONTAL_SPEED,
            rotation_smoothing_rate: DEFAULT_ROTATION_SMOOTHING_RATE,
            facing_smoothing_rate: DEFAULT_FACING_SMOOTHING_RATE,
            rest_velocity: DEFAULT_REST_VELOCITY,
            jump_height: DEFAULT_JUMP_HEIGHT,
            jump_duration: DEFAULT_JUMP_DURATION,
            max_jump_charges: DEFAULT_MAX_JUMP_CHARGES,
            falling_threshold: DEFAULT_FALLING_THRESHOLD,
            max_delta_seconds: None,
        }
    }
}

impl LocomotionConfig {
    /// Parses and validates a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or unknown fields, and
    /// any validation error from [`LocomotionConfig::validate`].
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON config file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] when the file cannot be read, otherwise as
    /// [`LocomotionConfig::from_json_str`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let file = path.as_ref();
        let text = fs::read_to_string(file).map_err(|source| ConfigError::Io {
            path: file.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Rejects values that would yield an implausible or unstable controller.
    ///
    /// # Errors
    ///
    /// Returns the first offending field as a [`ConfigError`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        ConfigError::require_positive("jump_height", self.jump_height)?;
        ConfigError::require_positive("jump_duration", self.jump_duration)?;
        ConfigError::require_non_negative("horizontal_speed", self.horizontal_speed)?;
        ConfigError::require_non_negative("rotation_smoothing_rate", self.rotation_smoothing_rate)?;
        ConfigError::require_non_negative("facing_smoothing_rate", self.facing_smoothing_rate)?;
        ConfigError::require_negative("rest_velocity", self.rest_velocity)?;
        ConfigError::require_negative("falling_threshold", self.falling_threshold)?;
        if let Some(max_delta) = self.max_delta_seconds {
            ConfigError::require_positive("max_delta_seconds", max_delta)?;
        }
        Ok(())
    }
}
