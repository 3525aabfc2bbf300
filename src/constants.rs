//! Default tuning values for a walking, double-jumping character.
//!
//! These seed [`crate::LocomotionConfig::default`] and are exported so tests
//! and hosts can refer to them by name.

/// Ground speed in world units per second.
pub const DEFAULT_HORIZONTAL_SPEED: f32 = 9.0;
/// Fraction per second the model turns toward its movement direction.
pub const DEFAULT_ROTATION_SMOOTHING_RATE: f32 = 10.0;
/// Fraction per second the character turns toward the camera yaw.
pub const DEFAULT_FACING_SMOOTHING_RATE: f32 = 10.0;
/// Velocity applied while grounded so the mover keeps reporting contact
/// through collision tolerance.
pub const DEFAULT_REST_VELOCITY: f32 = -4.0;
/// Jump apex height in world units.
pub const DEFAULT_JUMP_HEIGHT: f32 = 3.0;
/// Seconds from take-off to landing at take-off height.
pub const DEFAULT_JUMP_DURATION: f32 = 0.5;
/// Jumps granted on landing; two allows a double jump.
pub const DEFAULT_MAX_JUMP_CHARGES: u32 = 2;
/// Vertical velocity below which the falling animation state engages.
pub const DEFAULT_FALLING_THRESHOLD: f32 = -25.0;
