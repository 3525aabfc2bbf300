//! Recording collaborators for controller tests.

use glam::Vec3;
use locomotion::{Animator, Mover};

/// One call received by [`RecordingAnimator`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AnimationCall {
    MovementBlend(f32),
    Falling(bool),
    Grounded(bool),
    Jump,
}

/// Animator that keeps every call in order.
#[derive(Clone, Debug, Default)]
pub struct RecordingAnimator {
    pub calls: Vec<AnimationCall>,
}

impl RecordingAnimator {
    /// Number of jump triggers received.
    pub fn jumps(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, AnimationCall::Jump))
            .count()
    }

    /// Movement blend values in the order received.
    pub fn blends(&self) -> Vec<f32> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                AnimationCall::MovementBlend(value) => Some(*value),
                _ => None,
            })
            .collect()
    }
}

impl Animator for RecordingAnimator {
    fn set_movement_blend(&mut self, magnitude: f32) {
        self.calls.push(AnimationCall::MovementBlend(magnitude));
    }

    fn set_falling(&mut self, falling: bool) {
        self.calls.push(AnimationCall::Falling(falling));
    }

    fn set_grounded(&mut self, grounded: bool) {
        self.calls.push(AnimationCall::Grounded(grounded));
    }

    fn trigger_jump(&mut self) {
        self.calls.push(AnimationCall::Jump);
    }
}

/// Mover whose contact flag is set by the test rather than by geometry.
#[derive(Clone, Debug, Default)]
pub struct ScriptedMover {
    pub grounded: bool,
    pub moves: Vec<Vec3>,
}

impl ScriptedMover {
    /// A mover reporting `grounded` until changed.
    ///
    /// # Examples
    /// ```
    /// use locomotion::Mover;
    /// use test_utils::fakes::ScriptedMover;
    /// let mover = ScriptedMover::new(true);
    /// assert!(mover.is_grounded());
    /// assert!(mover.moves.is_empty());
    /// ```
    pub fn new(grounded: bool) -> Self {
        Self {
            grounded,
            moves: Vec::new(),
        }
    }

    /// Displacement submitted on the most recent frame.
    pub fn last_move(&self) -> Option<Vec3> {
        self.moves.last().copied()
    }
}

impl Mover for ScriptedMover {
    fn move_by(&mut self, displacement: Vec3) {
        self.moves.push(displacement);
    }

    fn is_grounded(&self) -> bool {
        self.grounded
    }
}
