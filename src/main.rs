//! Headless demo driving one character through a scripted walk and double jump.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use clap::Parser;
use locomotion::{
    character_bundle, init_logging, LocomotionCamera, LocomotionConfig, LocomotionController,
    LocomotionInput, LocomotionPlugin, Locomotor,
};
use log::info;

/// Frame length used by the headless simulation.
const STEP: Duration = Duration::from_nanos(16_666_667);
/// Frames on which the scripted input presses jump.
const JUMP_FRAMES: [u32; 2] = [30, 45];

/// Headless locomotion demo: walks a character forward and double jumps
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
    /// JSON file overriding the default tuning
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Number of frames to simulate
    #[arg(short, long, default_value_t = 120)]
    frames: u32,
}

fn load_config(path: Option<&Path>) -> Result<LocomotionConfig> {
    path.map_or_else(
        || Ok(LocomotionConfig::default()),
        |p| {
            LocomotionConfig::from_path(p)
                .with_context(|| format!("loading locomotion config from {}", p.display()))
        },
    )
}

fn log_characters(app: &mut App, frame: u32) {
    let world = app.world_mut();
    let mut query = world.query::<(&Transform, &Locomotor)>();
    for (transform, locomotor) in query.iter(world) {
        let state = locomotor.state();
        info!(
            "frame {frame:>4}: position {:.2?} phase {:?} vy {:.2} charges {}",
            transform.translation,
            locomotor.phase(),
            state.vertical_velocity,
            state.jump_charges
        );
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = load_config(args.config.as_deref())?;
    let controller = LocomotionController::new(config).context("invalid locomotion config")?;

    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .add_plugins(LocomotionPlugin)
        .insert_resource(TimeUpdateStrategy::ManualDuration(STEP));
    app.world_mut()
        .spawn((LocomotionCamera, Transform::from_rotation(Quat::from_rotation_y(0.3))));
    app.world_mut()
        .spawn(character_bundle(controller, Vec3::ZERO, 0.0));
    app.finish();
    app.cleanup();

    for frame in 0..args.frames {
        {
            let mut input = app.world_mut().resource_mut::<LocomotionInput>();
            input.axes = Vec2::Y;
            input.jump_pressed = JUMP_FRAMES.contains(&frame);
        }
        app.update();
        if frame % 15 == 0 {
            log_characters(&mut app, frame);
        }
    }
    log_characters(&mut app, args.frames);
    Ok(())
}
