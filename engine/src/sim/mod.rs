//! Simulation Module
//!
//! Frame timing and the headless sandbox that runs the controller against
//! the built-in rigid body and collider world.
//!
//! # Components
//!
//! - [`FixedTimestep`] - Accumulator carving fixed physics ticks out of frame deltas
//! - [`SmoothedFrameTime`] - Exponentially smoothed frame delta for camera look
//! - [`Sandbox`] - Input, controller, body, world, animator and rig in one loop

pub mod sandbox;
pub mod timing;

pub use sandbox::{DEFAULT_HEAD_OFFSET, DEFAULT_LIFTOFF_DELAY, FrameReport, Sandbox};
pub use timing::{DEFAULT_TICK_RATE, FixedTimestep, SmoothedFrameTime, StepPlan};
