//! Player Module
//!
//! Character locomotion: the controller, its tunables, and the animation
//! parameter boundary it writes to.
//!
//! # Components
//!
//! - [`LocomotionController`] - Ground probe, velocity blending, jump, crouch, look and POV
//! - [`LocomotionConfig`] - Validated tunables, loadable from JSON
//! - [`AnimationSink`] - Animation parameter boundary
//!   - [`AnimatorParameters`] is the in-memory implementation

pub mod animation;
pub mod config;
pub mod locomotion;

pub use animation::{AnimParam, AnimationSink, AnimatorParameters};
pub use config::{
    ConfigError, GroundConfig, JUMP_FACTOR_MAX, JUMP_FACTOR_MIN, LocomotionConfig, LookConfig,
    MovementConfig, PovConfig,
};
pub use locomotion::{
    GroundContact, LocomotionController, LocomotionState, TickReport, blend_factor,
    local_planar, target_speed, world_from_planar,
};
