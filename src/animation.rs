//! Animation parameters driven by locomotion.
//!
//! The controller only reports parameters; graph playback and blending are
//! the host's concern.

use bevy::prelude::Component;

/// Receives animation parameters once per frame.
pub trait Animator {
    /// Horizontal input magnitude in `[0, 1]`, used as a locomotion blend.
    fn set_movement_blend(&mut self, magnitude: f32);
    /// Whether the character is falling fast enough to play a fall loop.
    fn set_falling(&mut self, falling: bool);
    /// Whether the mover reported contact this frame.
    fn set_grounded(&mut self, grounded: bool);
    /// One-shot trigger fired when a jump is performed.
    fn trigger_jump(&mut self);
}

impl<A: Animator + ?Sized> Animator for &mut A {
    fn set_movement_blend(&mut self, magnitude: f32) {
        (**self).set_movement_blend(magnitude);
    }

    fn set_falling(&mut self, falling: bool) {
        (**self).set_falling(falling);
    }

    fn set_grounded(&mut self, grounded: bool) {
        (**self).set_grounded(grounded);
    }

    fn trigger_jump(&mut self) {
        (**self).trigger_jump();
    }
}

/// Last reported animation parameters, with a latched jump trigger.
///
/// Hosts read the flags every frame and consume the trigger with
/// [`AnimationParams::take_jump_trigger`], mirroring how animation graphs
/// reset triggers once a transition fires.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct AnimationParams {
    /// Last movement blend.
    pub movement_blend: f32,
    /// Falling flag.
    pub falling: bool,
    /// Grounded flag.
    pub grounded: bool,
    jump_pending: bool,
}

impl AnimationParams {
    /// Whether a jump trigger is waiting to be consumed.
    #[must_use]
    pub const fn jump_pending(&self) -> bool {
        self.jump_pending
    }

    /// Consumes the jump trigger, returning whether it was set.
    pub fn take_jump_trigger(&mut self) -> bool {
        std::mem::take(&mut self.jump_pending)
    }
}

impl Animator for AnimationParams {
    fn set_movement_blend(&mut self, magnitude: f32) {
        self.movement_blend = magnitude;
    }

    fn set_falling(&mut self, falling: bool) {
        self.falling = falling;
    }

    fn set_grounded(&mut self, grounded: bool) {
        self.grounded = grounded;
    }

    fn trigger_jump(&mut self) {
        self.jump_pending = true;
    }
}
