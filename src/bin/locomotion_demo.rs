//! Locomotion Demo - Headless Scripted Run
//!
//! Run with: `cargo run --bin locomotion_demo -- [config.json] [--verbose]`
//!
//! Drives the sandbox through a fixed script at 60 frames per second and
//! logs the character state after each phase:
//! - walk forward, then run
//! - crouch-walk, then stop and let the blend decay
//! - jump and land
//! - look around, toggle the camera twice
//!
//! Set `RUST_LOG` to override the filter, e.g. `RUST_LOG=stride_engine=trace`.

use std::error::Error;
use std::time::Duration;

use glam::Vec3;
use stride_engine::input::KeyCode;
use stride_engine::physics::PhysicsBody;
use stride_engine::player::LocomotionConfig;
use stride_engine::sim::Sandbox;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const FRAME: Duration = Duration::from_micros(16_667);

/// One step of the script: keys to press/release, mouse motion, and how long
/// to hold the result.
struct Phase {
    name: &'static str,
    press: &'static [KeyCode],
    release: &'static [KeyCode],
    look: (f32, f32),
    frames: u32,
}

const SCRIPT: &[Phase] = &[
    Phase { name: "settle", press: &[], release: &[], look: (0.0, 0.0), frames: 30 },
    Phase { name: "walk", press: &[KeyCode::W], release: &[], look: (0.0, 0.0), frames: 90 },
    Phase { name: "run", press: &[KeyCode::ShiftLeft], release: &[], look: (0.0, 0.0), frames: 90 },
    Phase {
        name: "crouch walk",
        press: &[KeyCode::ControlLeft],
        release: &[KeyCode::ShiftLeft],
        look: (0.0, 0.0),
        frames: 60,
    },
    Phase {
        name: "stop",
        press: &[],
        release: &[KeyCode::W, KeyCode::ControlLeft],
        look: (0.0, 0.0),
        frames: 60,
    },
    Phase { name: "jump", press: &[KeyCode::Space], release: &[], look: (0.0, 0.0), frames: 3 },
    Phase { name: "airborne", press: &[], release: &[KeyCode::Space], look: (0.0, 0.0), frames: 90 },
    Phase { name: "look right", press: &[], release: &[], look: (40.0, 0.0), frames: 1 },
    Phase { name: "look up", press: &[], release: &[], look: (0.0, 500.0), frames: 1 },
    Phase { name: "first person", press: &[KeyCode::V], release: &[], look: (0.0, 0.0), frames: 1 },
    Phase { name: "third person", press: &[KeyCode::V], release: &[KeyCode::V], look: (0.0, 0.0), frames: 1 },
];

fn load_config(path: Option<&str>) -> Result<LocomotionConfig, Box<dyn Error>> {
    match path {
        Some(path) => Ok(LocomotionConfig::from_json_file(path)?),
        None => {
            info!("no config file given, using defaults");
            Ok(LocomotionConfig::default())
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let verbose = args.iter().any(|arg| arg == "--verbose" || arg == "-v");
    let config_path = args.iter().find(|arg| !arg.starts_with('-')).map(String::as_str);

    let default_filter = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = load_config(config_path)?;
    let mut sandbox = Sandbox::new(config)?;
    let mut lift_offs = 0u32;

    for phase in SCRIPT {
        for &key in phase.release {
            sandbox.input_mut().handle_key(key, false);
        }
        for &key in phase.press {
            sandbox.input_mut().handle_key(key, true);
        }
        sandbox.input_mut().handle_mouse_motion(phase.look.0, phase.look.1);

        let mut peak_height = f32::MIN;
        for _ in 0..phase.frames {
            let report = sandbox.advance(FRAME);
            lift_offs += u32::from(report.lifted_off);
            peak_height = peak_height.max(sandbox.body().position.y);
        }

        let body = sandbox.body();
        let controller = sandbox.controller();
        let forward = body.rotation() * Vec3::NEG_Z;
        info!(
            phase = phase.name,
            grounded = controller.is_grounded(),
            blended = ?controller.current_velocity(),
            position = ?body.position,
            peak_height,
            heading = ?forward,
            pitch = controller.pitch(),
            pov = ?controller.pov(),
            "phase complete"
        );
    }

    if lift_offs != 1 {
        warn!(lift_offs, "expected exactly one liftoff in the script");
    }
    info!(
        ticks = sandbox.ticks(),
        jump_triggers = sandbox.animator().trigger_count(stride_engine::player::AnimParam::Jump),
        "demo finished"
    );
    Ok(())
}
