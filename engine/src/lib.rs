//! Stride Engine Library
//!
//! A first/third person character locomotion controller driving a dynamic
//! rigid body. Input arrives as per-frame snapshots; the controller blends
//! planar velocity, probes for ground, gates jumps, mirrors state into an
//! animation parameter set, and drives a two-camera rig.
//!
//! # Modules
//!
//! - [`input`] - Key bindings, look deltas and per-frame input snapshots
//! - [`physics`] - Rigid body, collision layers and ground ray queries
//! - [`player`] - The locomotion controller, its config and animation boundary
//! - [`camera`] - Pitch/yaw look math, POV switching and the camera rig
//! - [`sim`] - Fixed timestep, frame smoothing and the headless sandbox
//!
//! # Example
//!
//! ```ignore
//! use std::time::Duration;
//! use stride_engine::input::KeyCode;
//! use stride_engine::player::LocomotionConfig;
//! use stride_engine::sim::Sandbox;
//!
//! let mut sandbox = Sandbox::new(LocomotionConfig::default())?;
//!
//! // Hold W and run a second of 60 Hz frames
//! sandbox.input_mut().handle_key(KeyCode::W, true);
//! for _ in 0..60 {
//!     sandbox.advance(Duration::from_micros(16_667));
//! }
//!
//! let speed = sandbox.controller().current_velocity().length();
//! assert!(speed > 1.5);
//! ```

pub mod camera;
pub mod input;
pub mod physics;
pub mod player;
pub mod sim;

// Re-export commonly used input types
pub use input::{InputManager, InputSnapshot, KeyCode};
// Re-export player types
pub use player::{LocomotionConfig, LocomotionController};
// Re-export the sandbox
pub use sim::Sandbox;
