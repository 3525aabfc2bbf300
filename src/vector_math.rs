//! Small vector and rotation helpers for locomotion.
//!
//! Rotations here are yaw-only: the character stands upright, so every
//! orientation it targets lives in the horizontal plane.
use glam::{EulerRot, Quat, Vec2, Vec3};

/// Builds a horizontal intent vector from two input axes.
///
/// The strafe axis maps to local `+X` and the forward axis to local `+Z`.
/// Non-finite input is treated as no input. The result never exceeds unit
/// length, so diagonal input is no faster than a single axis.
///
/// # Examples
///
/// ```
/// use glam::Vec2;
/// use locomotion::vector_math::horizontal_intent;
///
/// let diagonal = horizontal_intent(Vec2::new(1.0, 1.0));
/// assert!((diagonal.length() - 1.0).abs() < 1e-6);
/// assert_eq!(diagonal.y, 0.0);
/// ```
#[must_use]
pub fn horizontal_intent(axes: Vec2) -> Vec3 {
    if !axes.is_finite() {
        return Vec3::ZERO;
    }
    Vec3::new(axes.x, 0.0, axes.y).clamp_length_max(1.0)
}

/// Extracts the yaw of `rotation`, discarding pitch and roll.
#[must_use]
pub fn yaw_of(rotation: Quat) -> f32 {
    let (yaw, _pitch, _roll) = rotation.to_euler(EulerRot::YXZ);
    yaw
}

/// Returns a rotation with the same yaw as `rotation` and no pitch or roll.
///
/// # Examples
///
/// ```
/// use glam::Quat;
/// use locomotion::vector_math::yaw_only;
///
/// let tilted = Quat::from_rotation_y(0.5) * Quat::from_rotation_x(-0.3);
/// let flat = yaw_only(tilted);
/// assert!(flat.angle_between(Quat::from_rotation_y(0.5)) < 1e-5);
/// ```
#[must_use]
pub fn yaw_only(rotation: Quat) -> Quat {
    Quat::from_rotation_y(yaw_of(rotation))
}

/// Returns the yaw rotation whose local `+Z` points along `direction`
/// projected onto the horizontal plane.
///
/// Returns `None` when the direction has no horizontal component.
#[must_use]
pub fn look_rotation_flat(direction: Vec3) -> Option<Quat> {
    let flat = Vec3::new(direction.x, 0.0, direction.z);
    let unit = flat.try_normalize()?;
    Some(Quat::from_rotation_y(unit.x.atan2(unit.z)))
}

/// Spherically interpolates `from` toward `to` by a per-frame fraction
/// clamped into `[0, 1]`.
///
/// A fraction of one or more lands exactly on `to`.
#[must_use]
pub fn smooth_toward(from: Quat, to: Quat, fraction: f32) -> Quat {
    let t = if fraction.is_finite() {
        fraction.clamp(0.0, 1.0)
    } else {
        0.0
    };
    from.slerp(to, t).normalize()
}
