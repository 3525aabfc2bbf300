//! Headless Bevy app running `LocomotionPlugin` for behavioural tests.
//!
//! The fixture owns a shared `App` with a fixed 60 Hz clock, one camera and
//! one character on a floor at height zero. `reset` rebuilds it so each rspec
//! example starts from the same world.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use locomotion::{
    character_bundle, AnimationParams, LocomotionCamera, LocomotionInput, LocomotionPlugin,
    Locomotor, ModelOrientation,
};
use test_utils::fixtures::default_controller;

use crate::thread_safe_app::{lock_app, SharedApp, ThreadSafeApp};

/// Fixed frame length fed to `Time`.
pub const STEP: Duration = Duration::from_millis(16);

#[derive(Resource, Debug, Default)]
struct PluginsFinalized;

/// Shared fixture around a locomotion-enabled `App`.
#[derive(Debug, Clone)]
pub struct LocomotionFixture {
    app: SharedApp,
    character: Entity,
    camera: Entity,
}

fn build_app() -> (App, Entity, Entity) {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .add_plugins(LocomotionPlugin)
        .insert_resource(TimeUpdateStrategy::ManualDuration(STEP));
    let camera = app
        .world_mut()
        .spawn((LocomotionCamera, Transform::default()))
        .id();
    let character = app
        .world_mut()
        .spawn(character_bundle(default_controller(), Vec3::ZERO, 0.0))
        .id();
    (app, character, camera)
}

impl Default for LocomotionFixture {
    fn default() -> Self {
        let (app, character, camera) = build_app();
        Self {
            app: Arc::new(Mutex::new(ThreadSafeApp(app))),
            character,
            camera,
        }
    }
}

impl LocomotionFixture {
    /// Replaces the app with a freshly built one.
    pub fn reset(&mut self) {
        let (app, character, camera) = build_app();
        *self.app_guard() = ThreadSafeApp(app);
        self.character = character;
        self.camera = camera;
    }

    /// Locks the underlying `App` for direct inspection or mutation.
    pub fn app_guard(&self) -> MutexGuard<'_, ThreadSafeApp> {
        lock_app(&self.app)
    }

    /// Advances the application by `frames` ticks.
    ///
    /// The first tick finalizes plugins. Bevy reports a zero delta on the
    /// first update, so characters do not move on it.
    pub fn tick(&self, frames: u32) {
        let mut app = self.app_guard();
        if app.world().get_resource::<PluginsFinalized>().is_none() {
            app.finish();
            app.cleanup();
            app.insert_resource(PluginsFinalized);
        }
        for _ in 0..frames {
            app.update();
        }
    }

    /// Overwrites the input resource.
    pub fn set_input(&self, axes: Vec2, jump_pressed: bool) {
        let mut app = self.app_guard();
        let mut input = app.world_mut().resource_mut::<LocomotionInput>();
        input.axes = axes;
        input.jump_pressed = jump_pressed;
    }

    /// Current input resource.
    pub fn input(&self) -> LocomotionInput {
        *self.app_guard().world().resource::<LocomotionInput>()
    }

    /// Pauses virtual time so later updates report a zero delta.
    pub fn pause_time(&self) {
        self.app_guard()
            .world_mut()
            .resource_mut::<Time<Virtual>>()
            .pause();
    }

    /// Rotates the camera.
    pub fn set_camera_rotation(&self, rotation: Quat) {
        let mut app = self.app_guard();
        if let Some(mut transform) = app.world_mut().get_mut::<Transform>(self.camera) {
            transform.rotation = rotation;
        }
    }

    /// Moves the character's `Transform` directly, as a host teleport would.
    pub fn teleport(&self, translation: Vec3) {
        let mut app = self.app_guard();
        if let Some(mut transform) = app.world_mut().get_mut::<Transform>(self.character) {
            transform.translation = translation;
        }
    }

    /// The character's `Transform`.
    pub fn transform(&self) -> Transform {
        *self
            .app_guard()
            .world()
            .get::<Transform>(self.character)
            .unwrap_or_else(|| panic!("character should have a Transform"))
    }

    /// The character's animation parameters.
    pub fn animation(&self) -> AnimationParams {
        *self
            .app_guard()
            .world()
            .get::<AnimationParams>(self.character)
            .unwrap_or_else(|| panic!("character should have AnimationParams"))
    }

    /// The character's model orientation.
    pub fn model(&self) -> Quat {
        self.app_guard()
            .world()
            .get::<ModelOrientation>(self.character)
            .unwrap_or_else(|| panic!("character should have ModelOrientation"))
            .0
    }

    /// Jump charges left on the character's controller.
    pub fn jump_charges(&self) -> u32 {
        self.app_guard()
            .world()
            .get::<Locomotor>(self.character)
            .unwrap_or_else(|| panic!("character should have a Locomotor"))
            .state()
            .jump_charges
    }
}
