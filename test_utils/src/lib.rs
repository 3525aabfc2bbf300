//! Utility helpers for tests.
//!
//! Fixture constructors for controllers and frames, plus recording fakes for
//! the mover and animator collaborators.
pub mod fakes;
pub mod fixtures;
