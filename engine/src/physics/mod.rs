//! Physics module
//!
//! Minimal physics surface for the character controller, built without an
//! external physics engine.
//!
//! # Unit System
//!
//! **1 unit = 1 meter** (SI units throughout)
//!
//! - Distances in meters
//! - Velocities in m/s
//! - Accelerations in m/s²
//! - Mass in kg
//!
//! # Submodules
//!
//! - [`types`] - Math re-exports and [`LayerMask`]
//! - [`collision`] - Ray-AABB queries and the [`GroundQuery`] trait
//! - [`rigid_body`] - Dynamic body and the [`PhysicsBody`] trait

pub mod collision;
pub mod rigid_body;
pub mod types;

pub use collision::{
    Collider, ColliderWorld, GroundQuery, RayHit, aabb_surface_normal, ray_aabb_intersect,
};
pub use rigid_body::{ForceMode, PhysicsBody, RigidBody};
pub use types::{LayerMask, Quat, Vec2, Vec3};

/// Standard gravity (m/s²), pointing down.
pub const GRAVITY: Vec3 = Vec3::new(0.0, -9.81, 0.0);
