//! Convenience constructors for controllers and frames used in tests.

use glam::{Quat, Vec2, Vec3};
use locomotion::{FloorMover, FrameInput, LocomotionConfig, LocomotionController, LocomotionState};

/// A 60 Hz frame.
pub const DT: f32 = 1.0 / 60.0;

/// Controller with default tuning and a fresh state.
///
/// # Panics
/// Panics if the default config is rejected.
pub fn default_controller() -> LocomotionController {
    LocomotionController::new(LocomotionConfig::default()).expect("default config is valid")
}

/// Controller with default tuning resumed at the given velocity and charges.
///
/// # Panics
/// Panics if the default config is rejected.
///
/// # Examples
/// ```
/// use test_utils::fixtures::controller_with;
/// let c = controller_with(-4.0, 2);
/// assert_eq!(c.state().jump_charges, 2);
/// assert_eq!(c.state().vertical_velocity, -4.0);
/// ```
pub fn controller_with(vertical_velocity: f32, jump_charges: u32) -> LocomotionController {
    let state = LocomotionState {
        vertical_velocity,
        jump_charges,
        ..LocomotionState::default()
    };
    LocomotionController::with_state(LocomotionConfig::default(), state)
        .expect("default config is valid")
}

/// A 60 Hz frame with the given axes and jump edge and an identity camera.
///
/// # Examples
/// ```
/// use test_utils::fixtures::frame;
/// let f = frame(0.0, 1.0, true);
/// assert!(f.jump_pressed);
/// assert_eq!(f.axes.y, 1.0);
/// ```
pub fn frame(strafe: f32, forward: f32, jump_pressed: bool) -> FrameInput {
    FrameInput {
        axes: Vec2::new(strafe, forward),
        jump_pressed,
        dt: DT,
        camera_rotation: Quat::IDENTITY,
    }
}

/// Like [`frame`] but with the camera yawed by `camera_yaw` radians.
pub fn frame_with_camera(strafe: f32, forward: f32, camera_yaw: f32) -> FrameInput {
    FrameInput {
        camera_rotation: Quat::from_rotation_y(camera_yaw),
        ..frame(strafe, forward, false)
    }
}

/// A mover standing on a floor at height zero.
pub fn grounded_mover() -> FloorMover {
    FloorMover::new(Vec3::ZERO, 0.0)
}

/// A mover `height` units above a floor at zero.
pub fn airborne_mover(height: f32) -> FloorMover {
    FloorMover::new(Vec3::new(0.0, height, 0.0), 0.0)
}
