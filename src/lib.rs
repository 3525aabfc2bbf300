#![cfg_attr(docsrs, feature(doc_cfg))]
//! Frame-synchronous locomotion for a single player character.
//!
//! The crate derives jump gravity from a designer-facing arc, integrates
//! vertical velocity with landing and multi-jump charges, and produces a
//! displacement for a collision-aware [`Mover`]. Facing rotation and
//! animation parameters are reported as side effects through [`Pose`] and
//! [`Animator`]. [`LocomotionPlugin`] hosts the controller inside a Bevy app.
pub mod animation;
pub mod config;
pub mod constants;
pub mod controller;
pub mod error;
pub mod kinematics;
pub mod logging;
pub mod mover;
pub mod plugin;
pub mod vector_math;
pub use constants::*;

// Re-export commonly used items
pub use animation::{AnimationParams, Animator};
pub use config::LocomotionConfig;
pub use controller::{
    FrameInput, FrameReport, LocomotionController, LocomotionState, MotionPhase, Pose,
};
pub use error::ConfigError;
pub use kinematics::JumpKinematics;
pub use logging::init as init_logging;
pub use mover::{FloorMover, Mover};
pub use plugin::{
    character_bundle, locomotion_system, CharacterBody, LocomotionCamera, LocomotionInput,
    LocomotionPlugin, LocomotionSet, Locomotor, ModelOrientation,
};

pub mod prelude {
    //! Prelude exports used in documentation examples.
    //!
    //! ```rust,no_run
    //! use locomotion::prelude::*;
    //! ```

    pub use crate::{
        AnimationParams, Animator, FloorMover, FrameInput, LocomotionConfig, LocomotionController,
        LocomotionPlugin, Mover, Pose,
    };
}
