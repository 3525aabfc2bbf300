//! Per-character locomotion controller.
//!
//! [`LocomotionController::update`] runs once per rendered frame. It turns
//! directional input into a horizontal displacement, integrates vertical
//! velocity under the gravity derived in [`JumpKinematics`], resolves
//! landing and jumping, and hands the result to a [`Mover`]. Facing and
//! animation parameters are written as side effects.
//!
//! Everything the controller reads from the outside world arrives through
//! [`FrameInput`], [`Pose`], and the collaborator traits, so a frame can be
//! replayed deterministically in tests.

use glam::{Quat, Vec2, Vec3};
use log::{debug, trace, warn};

use crate::animation::Animator;
use crate::config::LocomotionConfig;
use crate::error::ConfigError;
use crate::kinematics::JumpKinematics;
use crate::mover::Mover;
use crate::vector_math::{horizontal_intent, look_rotation_flat, smooth_toward, yaw_only};

/// Everything sampled from the host for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInput {
    /// Strafe (`x`) and forward (`y`) axes, each in `[-1, 1]`.
    pub axes: Vec2,
    /// Whether jump was pressed this frame (an edge, not a held state).
    pub jump_pressed: bool,
    /// Seconds elapsed since the previous frame.
    pub dt: f32,
    /// Current world orientation of the camera.
    pub camera_rotation: Quat,
}

impl FrameInput {
    /// Creates a frame with no input and an identity camera.
    #[must_use]
    pub const fn idle(dt: f32) -> Self {
        Self {
            axes: Vec2::ZERO,
            jump_pressed: false,
            dt,
            camera_rotation: Quat::IDENTITY,
        }
    }
}

/// Orientations the controller reads and smooths each frame.
///
/// The default pose has both orientations at identity.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Pose {
    /// Orientation of the character root; input is interpreted in this frame.
    pub character: Quat,
    /// Orientation of the visual model, turned to face movement.
    pub model: Quat,
}

/// Vertical motion phase as last observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionPhase {
    /// Resting on a surface.
    Grounded,
    /// Rising or falling.
    Airborne,
}

/// Mutable per-character state carried between frames.
///
/// A fresh state is at rest with no jump charges; charges are granted on
/// the first landing.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LocomotionState {
    /// Signed vertical velocity accumulator.
    pub vertical_velocity: f32,
    /// Jumps left before the next landing.
    pub jump_charges: u32,
    /// Whether the falling animation state is engaged.
    pub falling: bool,
    /// Mover contact sampled on the last processed frame.
    pub grounded: bool,
}

/// What a processed frame did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameReport {
    /// Displacement submitted to the mover.
    pub displacement: Vec3,
    /// Clamped input magnitude reported as the movement blend.
    pub intent_magnitude: f32,
    /// Mover contact sampled this frame.
    pub grounded: bool,
    /// Whether a jump fired.
    pub jumped: bool,
    /// Whether the falling state is engaged after this frame.
    pub falling: bool,
}

/// Locomotion for one controlled character.
///
/// # Examples
///
/// ```
/// use glam::Vec3;
/// use locomotion::{
///     AnimationParams, FloorMover, FrameInput, LocomotionConfig, LocomotionController, Pose,
/// };
///
/// let mut controller = LocomotionController::new(LocomotionConfig::default()).unwrap();
/// let mut mover = FloorMover::new(Vec3::ZERO, 0.0);
/// let mut anim = AnimationParams::default();
/// let mut pose = Pose::default();
///
/// controller.update(&FrameInput::idle(1.0 / 60.0), &mut pose, &mut mover, &mut anim);
/// assert_eq!(controller.state().jump_charges, 2);
///
/// let jump = FrameInput { jump_pressed: true, ..FrameInput::idle(1.0 / 60.0) };
/// let report = controller.update(&jump, &mut pose, &mut mover, &mut anim).unwrap();
/// assert!(report.jumped);
/// assert!(mover.translation().y > 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LocomotionController {
    config: LocomotionConfig,
    kinematics: JumpKinematics,
    state: LocomotionState,
}

impl LocomotionController {
    /// Validates `config` and derives the jump kinematics.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when any tuning value is implausible.
    pub fn new(config: LocomotionConfig) -> Result<Self, ConfigError> {
        Self::with_state(config, LocomotionState::default())
    }

    /// Like [`LocomotionController::new`] but resuming from `state`.
    ///
    /// Jump charges above the configured maximum are clamped.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when any tuning value is implausible.
    pub fn with_state(
        config: LocomotionConfig,
        state: LocomotionState,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let kinematics = JumpKinematics::from_jump(config.jump_height, config.jump_duration)?;
        debug!(
            "locomotion ready: gravity {:.3}, jump velocity {:.3}, {} jump charges",
            kinematics.gravity(),
            kinematics.initial_jump_velocity(),
            config.max_jump_charges
        );
        let resumed = LocomotionState {
            jump_charges: state.jump_charges.min(config.max_jump_charges),
            ..state
        };
        Ok(Self {
            config,
            kinematics,
            state: resumed,
        })
    }

    /// Tuning in effect.
    #[must_use]
    pub const fn config(&self) -> &LocomotionConfig {
        &self.config
    }

    /// Derived gravity and take-off velocity.
    #[must_use]
    pub const fn kinematics(&self) -> &JumpKinematics {
        &self.kinematics
    }

    /// State carried between frames.
    #[must_use]
    pub const fn state(&self) -> &LocomotionState {
        &self.state
    }

    /// Vertical phase as of the last processed frame.
    #[must_use]
    pub const fn phase(&self) -> MotionPhase {
        if self.state.grounded && self.state.vertical_velocity <= 0.0 {
            MotionPhase::Grounded
        } else {
            MotionPhase::Airborne
        }
    }

    /// Advances the character by one frame.
    ///
    /// Frames with a non-finite or non-positive `dt` are skipped entirely and
    /// return `None`: nothing in `self`, `pose`, `mover`, or `animator` is
    /// touched. When `max_delta_seconds` is configured, longer frames are
    /// clamped to it.
    pub fn update<M, A>(
        &mut self,
        frame: &FrameInput,
        pose: &mut Pose,
        mover: &mut M,
        animator: &mut A,
    ) -> Option<FrameReport>
    where
        M: Mover + ?Sized,
        A: Animator + ?Sized,
    {
        let Some(dt) = self.frame_seconds(frame.dt) else {
            warn!("skipping locomotion frame with invalid dt {}", frame.dt);
            return None;
        };

        let local_intent = horizontal_intent(frame.axes);
        let intent_magnitude = local_intent.length();
        animator.set_movement_blend(intent_magnitude);

        let world_intent = pose.character * local_intent;
        if intent_magnitude > 0.0 {
            self.turn(pose, world_intent, frame.camera_rotation, dt);
        }

        let mut displacement = world_intent * self.config.horizontal_speed;
        let grounded = mover.is_grounded();
        let jumped = self.integrate_vertical(dt, grounded, frame.jump_pressed, animator);
        animator.set_grounded(grounded);

        displacement.y = self.state.vertical_velocity;
        displacement *= dt;
        mover.move_by(displacement);

        Some(FrameReport {
            displacement,
            intent_magnitude,
            grounded,
            jumped,
            falling: self.state.falling,
        })
    }

    fn frame_seconds(&self, dt: f32) -> Option<f32> {
        if !dt.is_finite() || dt <= 0.0 {
            return None;
        }
        Some(self.config.max_delta_seconds.map_or(dt, |max| dt.min(max)))
    }

    /// Smooths the model toward the movement direction and the character
    /// toward the camera yaw.
    fn turn(&self, pose: &mut Pose, world_intent: Vec3, camera: Quat, dt: f32) {
        if let Some(target) = look_rotation_flat(world_intent) {
            pose.model = smooth_toward(pose.model, target, self.config.rotation_smoothing_rate * dt);
        }
        pose.character = smooth_toward(
            pose.character,
            yaw_only(camera),
            self.config.facing_smoothing_rate * dt,
        );
    }

    /// Applies gravity, landing and jumping. Returns whether a jump fired.
    fn integrate_vertical<A>(
        &mut self,
        dt: f32,
        grounded: bool,
        jump_pressed: bool,
        animator: &mut A,
    ) -> bool
    where
        A: Animator + ?Sized,
    {
        let state = &mut self.state;
        let was_grounded = std::mem::replace(&mut state.grounded, grounded);
        state.vertical_velocity += self.kinematics.gravity() * dt;

        if state.vertical_velocity < self.config.falling_threshold {
            state.falling = true;
            animator.set_falling(true);
        }

        if grounded && state.vertical_velocity < 0.0 {
            if !was_grounded {
                trace!("landed at {:.3} units/s", state.vertical_velocity);
            }
            state.vertical_velocity = self.config.rest_velocity;
            state.jump_charges = self.config.max_jump_charges;
            state.falling = false;
            animator.set_falling(false);
        }

        if jump_pressed && state.jump_charges > 0 {
            animator.trigger_jump();
            state.vertical_velocity = self.kinematics.initial_jump_velocity();
            state.jump_charges -= 1;
            trace!("jump fired, {} charges left", state.jump_charges);
            return true;
        }
        false
    }
}
