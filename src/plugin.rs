//! Bevy plugin driving [`LocomotionController`]s from the ECS.
//!
//! The host writes [`LocomotionInput`] each frame (input polling stays
//! outside this crate) and tags one camera with [`LocomotionCamera`].
//! [`locomotion_system`] then advances every character spawned with
//! [`character_bundle`], writing the results back to its `Transform`,
//! [`ModelOrientation`], and [`AnimationParams`].

use bevy::prelude::*;

use crate::animation::AnimationParams;
use crate::controller::{FrameInput, LocomotionController, Pose};
use crate::mover::FloorMover;

/// Directional and jump input for the current frame.
///
/// `jump_pressed` is an edge: [`locomotion_system`] clears it after every
/// run, whether or not a jump fired.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct LocomotionInput {
    /// Strafe (`x`) and forward (`y`) axes.
    pub axes: Vec2,
    /// Jump pressed since the last update.
    pub jump_pressed: bool,
}

/// Marker for the camera whose yaw characters turn to face.
///
/// When no entity carries this marker, characters turn toward identity yaw.
#[derive(Component, Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocomotionCamera;

/// The controller driving a character entity.
#[derive(Component, Debug, Clone, Deref, DerefMut)]
pub struct Locomotor(pub LocomotionController);

/// Floor-plane mover holding the character's simulated position.
#[derive(Component, Debug, Clone, Copy, Deref, DerefMut)]
pub struct CharacterBody(pub FloorMover);

/// Orientation of the character's visual model.
///
/// Kept apart from the root `Transform` so the model can face its movement
/// while the root follows the camera.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Deref, DerefMut)]
pub struct ModelOrientation(pub Quat);

/// System set containing [`locomotion_system`], for ordering host systems.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LocomotionSet;

/// Components for a controllable character standing over a floor plane.
///
/// The body starts at `translation`, snapped onto the floor if below it.
#[must_use]
pub fn character_bundle(
    controller: LocomotionController,
    translation: Vec3,
    floor_height: f32,
) -> impl Bundle {
    let body = FloorMover::new(translation, floor_height);
    (
        Locomotor(controller),
        Transform::from_translation(body.translation()),
        CharacterBody(body),
        AnimationParams::default(),
        ModelOrientation::default(),
    )
}

/// Advances every character by the frame's delta time.
///
/// Translations edited on the `Transform` since the last run are treated as
/// teleports and copied into the body before moving. Zero-length frames (the
/// first update, or while virtual time is paused) are ignored and leave the
/// jump edge pending.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy systems require parameters by value, not by reference."
)]
pub fn locomotion_system(
    time: Res<Time>,
    mut input: ResMut<LocomotionInput>,
    cameras: Query<&Transform, (With<LocomotionCamera>, Without<Locomotor>)>,
    mut characters: Query<(
        &mut Locomotor,
        &mut CharacterBody,
        &mut AnimationParams,
        &mut ModelOrientation,
        &mut Transform,
    )>,
) {
    if time.delta().is_zero() {
        return;
    }

    let camera_rotation = cameras
        .single()
        .map_or(Quat::IDENTITY, |transform| transform.rotation);
    let frame = FrameInput {
        axes: input.axes,
        jump_pressed: input.jump_pressed,
        dt: time.delta_secs(),
        camera_rotation,
    };

    for (mut locomotor, mut body, mut animation, mut model, mut transform) in &mut characters {
        if transform.translation != body.translation() {
            body.set_translation(transform.translation);
        }
        let mut pose = Pose {
            character: transform.rotation,
            model: model.0,
        };
        if locomotor
            .update(&frame, &mut pose, &mut body.0, &mut *animation)
            .is_some()
        {
            transform.translation = body.translation();
            transform.rotation = pose.character;
            model.0 = pose.model;
        }
    }

    input.jump_pressed = false;
}

/// Installs [`LocomotionInput`] and schedules [`locomotion_system`] in
/// `Update`.
#[derive(Default)]
pub struct LocomotionPlugin;

impl Plugin for LocomotionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LocomotionInput>()
            .add_systems(Update, locomotion_system.in_set(LocomotionSet));
    }
}
