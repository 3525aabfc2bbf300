//! Shared, lockable handle to the locomotion test `App`.

use bevy::prelude::App;
use std::ops::{Deref, DerefMut};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// The headless locomotion `App`, made shareable between rspec examples.
#[derive(Debug)]
pub struct ThreadSafeApp(pub App);

impl Deref for ThreadSafeApp {
    type Target = App;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for ThreadSafeApp {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

// SAFETY: `LocomotionFixture` is cloned into rspec examples, which demands
// `Send + Sync`. The app is only reached through `lock_app`, and the plugin
// suite runs via `run_serial`, so no two threads drive it at once.
unsafe impl Send for ThreadSafeApp {}
unsafe impl Sync for ThreadSafeApp {}

/// Handle held by `LocomotionFixture`.
pub type SharedApp = Arc<Mutex<ThreadSafeApp>>;

/// Locks the app. A panicking assertion in an earlier example poisons the
/// mutex; the next example still gets the app because `reset` rebuilds it.
pub fn lock_app(app: &SharedApp) -> MutexGuard<'_, ThreadSafeApp> {
    app.lock().unwrap_or_else(PoisonError::into_inner)
}
