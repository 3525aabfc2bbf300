//! Closed-form jump kinematics.
//!
//! Gravity is not a world constant here: it is derived from the desired jump
//! height and duration so designers tune the arc directly. A projectile that
//! rises `height` in `duration / 2` under constant acceleration `g` satisfies
//!
//! ```text
//! g  = -2 * height / (duration / 2)^2
//! v0 = sqrt(-2 * g * height)
//! ```

use crate::error::ConfigError;

/// Gravity and take-off velocity derived from a jump arc.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JumpKinematics {
    gravity: f32,
    initial_jump_velocity: f32,
    time_to_apex: f32,
}

impl JumpKinematics {
    /// Derives gravity and take-off velocity for a jump of `jump_height`
    /// units lasting `jump_duration` seconds.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when either parameter is non-finite or not
    /// strictly positive.
    ///
    /// # Examples
    ///
    /// ```
    /// use locomotion::JumpKinematics;
    /// let jump = JumpKinematics::from_jump(3.0, 0.5).unwrap();
    /// assert!((jump.gravity() + 96.0).abs() < 1e-3);
    /// assert!((jump.initial_jump_velocity() - 24.0).abs() < 1e-3);
    /// ```
    pub fn from_jump(jump_height: f32, jump_duration: f32) -> Result<Self, ConfigError> {
        let height = ConfigError::require_positive("jump_height", jump_height)?;
        let duration = ConfigError::require_positive("jump_duration", jump_duration)?;

        let time_to_apex = duration / 2.0;
        let gravity = -2.0 * height / time_to_apex.powi(2);
        let initial_jump_velocity = (height * -2.0 * gravity).sqrt();

        // Extremely small durations overflow to infinite gravity.
        ConfigError::require_negative("gravity", gravity)?;
        ConfigError::require_positive("initial_jump_velocity", initial_jump_velocity)?;

        Ok(Self {
            gravity,
            initial_jump_velocity,
            time_to_apex,
        })
    }

    /// Constant downward acceleration, always negative.
    #[must_use]
    pub const fn gravity(&self) -> f32 {
        self.gravity
    }

    /// Upward velocity applied on take-off, always positive.
    #[must_use]
    pub const fn initial_jump_velocity(&self) -> f32 {
        self.initial_jump_velocity
    }

    /// Seconds from take-off to the apex.
    #[must_use]
    pub const fn time_to_apex(&self) -> f32 {
        self.time_to_apex
    }

    /// Vertical velocity `t` seconds after take-off.
    #[must_use]
    pub fn velocity_at(&self, t: f32) -> f32 {
        self.gravity.mul_add(t, self.initial_jump_velocity)
    }

    /// Height above take-off `t` seconds after take-off.
    #[must_use]
    pub fn height_at(&self, t: f32) -> f32 {
        (0.5 * self.gravity * t).mul_add(t, self.initial_jump_velocity * t)
    }

    /// Height reached at the apex.
    #[must_use]
    pub fn peak_height(&self) -> f32 {
        self.height_at(self.time_to_apex)
    }
}
