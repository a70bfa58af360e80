//! Dynamic rigid body
//!
//! A small single-body integrator standing in for a full physics engine.
//! It exposes exactly what the locomotion controller needs through the
//! [`PhysicsBody`] trait: velocity, rotation, center of mass, force
//! application in the usual four modes, and a rotation-update path.
//!
//! # Integration
//!
//! Semi-implicit Euler:
//! - velocity += (gravity + accumulated acceleration) * dt
//! - position += velocity * dt
//!
//! Instantaneous modes (`Impulse`, `VelocityChange`) change velocity as soon
//! as they are applied. Continuous modes (`Force`, `Acceleration`) accumulate
//! until the next [`RigidBody::step`].

use glam::{Quat, Vec3};

use super::collision::GroundQuery;
use super::types::LayerMask;

/// How a force vector is interpreted by [`PhysicsBody::add_force`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForceMode {
    /// Continuous force in newtons, scaled by 1/mass and dt at the next step
    Force,
    /// Continuous acceleration in m/s², scaled by dt at the next step
    Acceleration,
    /// Instant momentum change in N·s, scaled by 1/mass
    Impulse,
    /// Instant velocity change in m/s, ignores mass
    VelocityChange,
}

/// The physics-body surface the controller drives.
pub trait PhysicsBody {
    /// Current linear velocity in world space (m/s)
    fn linear_velocity(&self) -> Vec3;

    /// Current orientation. Reflects a rotation submitted via
    /// [`move_rotation`](Self::move_rotation) that has not been stepped yet.
    fn rotation(&self) -> Quat;

    /// Center of mass in world space
    fn world_center_of_mass(&self) -> Vec3;

    fn add_force(&mut self, force: Vec3, mode: ForceMode);

    /// Request a new orientation through the solver instead of writing the
    /// transform, so contacts see the rotation during the next step.
    fn move_rotation(&mut self, rotation: Quat);

    /// Compose `delta` onto the current rotation.
    fn rotate_by(&mut self, delta: Quat) {
        let target = self.rotation() * delta;
        self.move_rotation(target);
    }
}

/// Character rigid body with a ground-contact capsule approximation.
///
/// `position` is the feet pivot; the center of mass sits `com_height`
/// above it along the body's local up axis.
#[derive(Debug, Clone)]
pub struct RigidBody {
    /// Feet pivot in world space (meters)
    pub position: Vec3,
    /// Linear velocity in world space (m/s)
    pub velocity: Vec3,
    rotation: Quat,
    /// Mass in kilograms (always > 0)
    mass: f32,
    /// Height of the center of mass above the feet pivot (meters)
    pub com_height: f32,
    /// Layers the body stands on when resolving ground penetration
    pub collision_mask: LayerMask,
    pending_acceleration: Vec3,
    pending_rotation: Option<Quat>,
}

impl Default for RigidBody {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            velocity: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            mass: 60.0,
            com_height: 0.8,
            collision_mask: LayerMask::default(),
            pending_acceleration: Vec3::ZERO,
            pending_rotation: None,
        }
    }
}

impl RigidBody {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a body at `position` with the given mass (clamped away from zero).
    pub fn with_mass(position: Vec3, mass: f32) -> Self {
        Self {
            position,
            mass: mass.max(0.001),
            ..Default::default()
        }
    }

    pub fn mass(&self) -> f32 {
        self.mass
    }

    pub fn set_mass(&mut self, mass: f32) {
        self.mass = mass.max(0.001);
    }

    /// Orientation as of the last step, ignoring any pending rotation.
    pub fn stepped_rotation(&self) -> Quat {
        self.rotation
    }

    /// Whether a rotation is waiting for the next step.
    pub fn has_pending_rotation(&self) -> bool {
        self.pending_rotation.is_some()
    }

    /// Advance the body by `dt` seconds.
    ///
    /// Applies the pending rotation, integrates gravity and accumulated
    /// acceleration, then pushes the body out of any collider its feet sank
    /// into, cancelling downward velocity on contact.
    pub fn step(&mut self, dt: f32, gravity: Vec3, world: &impl GroundQuery) {
        if let Some(rotation) = self.pending_rotation.take() {
            self.rotation = rotation.normalize();
        }

        self.velocity += (gravity + self.pending_acceleration) * dt;
        self.pending_acceleration = Vec3::ZERO;
        self.position += self.velocity * dt;

        self.resolve_ground(world);
    }

    fn resolve_ground(&mut self, world: &impl GroundQuery) {
        let origin = self.world_center_of_mass();
        let reach = self.com_height * 2.0;
        let Some(hit) = world.cast_ray(origin, Vec3::NEG_Y, reach, self.collision_mask) else {
            return;
        };

        let penetration = self.com_height - hit.distance;
        if penetration > 0.0 {
            self.position.y += penetration;
            if self.velocity.y < 0.0 {
                self.velocity.y = 0.0;
            }
        }
    }
}

impl PhysicsBody for RigidBody {
    fn linear_velocity(&self) -> Vec3 {
        self.velocity
    }

    fn rotation(&self) -> Quat {
        self.pending_rotation.unwrap_or(self.rotation)
    }

    fn world_center_of_mass(&self) -> Vec3 {
        self.position + self.rotation * Vec3::new(0.0, self.com_height, 0.0)
    }

    fn add_force(&mut self, force: Vec3, mode: ForceMode) {
        match mode {
            ForceMode::Force => self.pending_acceleration += force / self.mass,
            ForceMode::Acceleration => self.pending_acceleration += force,
            ForceMode::Impulse => self.velocity += force / self.mass,
            ForceMode::VelocityChange => self.velocity += force,
        }
    }

    fn move_rotation(&mut self, rotation: Quat) {
        self.pending_rotation = Some(rotation);
    }
}
