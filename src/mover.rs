//! Collision-aware movers.
//!
//! The controller never moves the character itself: it hands a world-space
//! displacement to a [`Mover`] and asks it whether the character is resting
//! on something. Real collision resolution belongs to the host engine.

use glam::Vec3;

/// Applies per-frame displacement and reports surface contact.
pub trait Mover {
    /// Applies `displacement` with whatever collision resolution the mover
    /// supports. Contact state is refreshed afterwards.
    fn move_by(&mut self, displacement: Vec3);

    /// Whether the character rested on a supporting surface after the last
    /// applied displacement.
    fn is_grounded(&self) -> bool;
}

impl<M: Mover + ?Sized> Mover for &mut M {
    fn move_by(&mut self, displacement: Vec3) {
        (**self).move_by(displacement);
    }

    fn is_grounded(&self) -> bool {
        (**self).is_grounded()
    }
}

/// A mover resolving contact against a single horizontal floor plane.
///
/// Any displacement that would carry the character below `floor_height`
/// stops on the floor and marks it grounded. Useful for tests, demos, and
/// hosts whose levels are flat.
///
/// # Examples
///
/// ```
/// use glam::Vec3;
/// use locomotion::{FloorMover, Mover};
///
/// let mut mover = FloorMover::new(Vec3::new(0.0, 1.0, 0.0), 0.0);
/// assert!(!mover.is_grounded());
/// mover.move_by(Vec3::new(0.5, -2.0, 0.0));
/// assert!(mover.is_grounded());
/// assert_eq!(mover.translation(), Vec3::new(0.5, 0.0, 0.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloorMover {
    translation: Vec3,
    floor_height: f32,
    grounded: bool,
}

impl FloorMover {
    /// Creates a mover at `translation` above a floor at `floor_height`.
    ///
    /// A character starting on or below the floor is snapped onto it and
    /// begins grounded.
    #[must_use]
    pub fn new(translation: Vec3, floor_height: f32) -> Self {
        let grounded = translation.y <= floor_height;
        Self {
            translation: Vec3::new(translation.x, translation.y.max(floor_height), translation.z),
            floor_height,
            grounded,
        }
    }

    /// Current world position.
    #[must_use]
    pub const fn translation(&self) -> Vec3 {
        self.translation
    }

    /// Height of the floor plane.
    #[must_use]
    pub const fn floor_height(&self) -> f32 {
        self.floor_height
    }

    /// Moves the character without collision, e.g. for a teleport.
    ///
    /// Contact is re-evaluated against the floor.
    pub fn set_translation(&mut self, translation: Vec3) {
        *self = Self::new(translation, self.floor_height);
    }
}

impl Mover for FloorMover {
    fn move_by(&mut self, displacement: Vec3) {
        let target = self.translation + displacement;
        self.grounded = target.y <= self.floor_height;
        self.translation = Vec3::new(target.x, target.y.max(self.floor_height), target.z);
    }

    fn is_grounded(&self) -> bool {
        self.grounded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upward_move_leaves_the_floor() {
        let mut mover = FloorMover::new(Vec3::ZERO, 0.0);
        assert!(mover.is_grounded());
        mover.move_by(Vec3::new(0.0, 0.4, 0.0));
        assert!(!mover.is_grounded());
        assert_eq!(mover.translation().y, 0.4);
    }

    #[test]
    fn resting_push_keeps_contact() {
        let mut mover = FloorMover::new(Vec3::new(0.0, 2.0, 0.0), 2.0);
        for _ in 0..5 {
            mover.move_by(Vec3::new(0.1, -0.0667, 0.0));
        }
        assert!(mover.is_grounded());
        assert_eq!(mover.translation().y, 2.0);
        assert!((mover.translation().x - 0.5).abs() < 1e-5);
    }

    #[test]
    fn start_below_floor_snaps_up() {
        let mover = FloorMover::new(Vec3::new(1.0, -3.0, 0.0), 0.0);
        assert!(mover.is_grounded());
        assert_eq!(mover.translation(), Vec3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn teleport_reevaluates_contact() {
        let mut mover = FloorMover::new(Vec3::new(0.0, 1.5, 0.0), 1.5);
        mover.set_translation(Vec3::new(0.0, 10.0, 0.0));
        assert!(!mover.is_grounded());

        mover.set_translation(Vec3::new(3.0, -2.0, 0.0));
        assert!(mover.is_grounded());
        assert_eq!(mover.floor_height(), 1.5);
        assert_eq!(mover.translation(), Vec3::new(3.0, mover.floor_height(), 0.0));
    }

    fn drop_to_floor<M: Mover>(mut mover: M) -> bool {
        mover.move_by(Vec3::NEG_Y * 2.0);
        mover.is_grounded()
    }

    #[test]
    fn forwards_through_mutable_reference() {
        let mut mover = FloorMover::new(Vec3::new(0.0, 1.0, 0.0), 0.0);
        assert!(drop_to_floor(&mut mover));
        assert_eq!(mover.translation().y, 0.0);
    }
}
