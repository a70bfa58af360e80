//! Player Locomotion Controller
//!
//! Drives a dynamic rigid body from an [`InputSnapshot`] and keeps an
//! animation parameter set in step with the simulated state.
//!
//! # Cadences
//!
//! - [`LocomotionController::fixed_update`] runs once per physics tick:
//!   ground probe, velocity blend and force, jump gate, crouch flag.
//! - [`LocomotionController::update_pov`] and
//!   [`LocomotionController::update_camera`] run once per rendered frame with
//!   the frame-smoothed delta time.
//! - [`LocomotionController::jump_add_force`] is called by the animation side
//!   at liftoff, after a jump trigger fired.
//!
//! # Movement Model
//!
//! While grounded the blended planar velocity chases `move * target_speed`
//! with frame-rate independent exponential smoothing, and the body receives
//! whatever velocity change closes the gap to it. While airborne the blend is
//! frozen and the body is only nudged by `blended * air_resistance` as a
//! continuous acceleration.
//!
//! # Usage
//!
//! ```rust,ignore
//! let mut controller = LocomotionController::new(LocomotionConfig::default())?;
//!
//! // Each physics tick:
//! controller.fixed_update(FIXED_DT, &input, &mut body, &world, Some(&mut animator));
//! body.step(FIXED_DT, GRAVITY, &world);
//!
//! // Each frame:
//! controller.update_pov(&input, &mut rig);
//! controller.update_camera(smoothed_dt, &input, head_anchor, &mut body, &mut rig);
//! ```

use glam::{Quat, Vec2, Vec3};
use tracing::{debug, info, warn};

use super::animation::{AnimParam, AnimationSink};
use super::config::{ConfigError, LocomotionConfig, MovementConfig};
use crate::camera::look::{self, PitchLimits};
use crate::camera::pov::{CameraPerspectiveState, PovState};
use crate::camera::rig::CameraRig;
use crate::input::InputSnapshot;
use crate::physics::{ForceMode, GroundQuery, PhysicsBody, RayHit};

/// Controller-owned simulation state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LocomotionState {
    /// Blended planar velocity in body-local axes: x strafe, y forward (m/s)
    pub current_velocity: Vec2,
    pub is_grounded: bool,
    /// Camera pitch in degrees, positive looking down
    pub pitch: f32,
}

/// Result of this tick's ground probe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroundContact {
    pub hit: Option<RayHit>,
}

impl GroundContact {
    #[inline]
    pub fn is_grounded(&self) -> bool {
        self.hit.is_some()
    }

    /// Distance from the center of mass to the surface below, if in range.
    pub fn distance(&self) -> Option<f32> {
        self.hit.map(|hit| hit.distance)
    }
}

/// What one fixed tick decided.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickReport {
    pub contact: GroundContact,
    pub target_speed: f32,
    pub jump_triggered: bool,
}

/// Interpolation fraction for exponential smoothing at `rate` (1/s) over `dt`.
///
/// Always in [0, 1), so a blend step never overshoots its target.
#[inline]
pub fn blend_factor(rate: f32, dt: f32) -> f32 {
    1.0 - (-rate * dt.max(0.0)).exp()
}

/// Planar speed requested by this tick's input.
///
/// Zero without move input; otherwise crouch beats run beats walk.
pub fn target_speed(input: &InputSnapshot, movement: &MovementConfig) -> f32 {
    if !input.has_move() {
        0.0
    } else if input.crouch {
        movement.crouch_speed
    } else if input.run {
        movement.run_speed
    } else {
        movement.walk_speed
    }
}

/// Express a world-space velocity in the body's planar axes (x right, y forward).
pub fn local_planar(rotation: Quat, world: Vec3) -> Vec2 {
    let local = rotation.inverse() * world;
    Vec2::new(local.x, -local.z)
}

/// World-space vector for a planar (x right, y forward) local vector.
pub fn world_from_planar(rotation: Quat, planar: Vec2) -> Vec3 {
    rotation * Vec3::new(planar.x, 0.0, -planar.y)
}

/// Character locomotion and camera controller.
#[derive(Debug, Clone)]
pub struct LocomotionController {
    config: LocomotionConfig,
    state: LocomotionState,
    perspective: CameraPerspectiveState,
    /// A jump trigger fired and its impulse has not been applied yet
    jump_pending: bool,
    /// Initial priorities have been written to the rig
    rig_synced: bool,
}

impl LocomotionController {
    /// Validate `config` and build a controller at rest, airborne until the
    /// first ground probe says otherwise.
    pub fn new(config: LocomotionConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let perspective = CameraPerspectiveState::from_config(&config.pov);
        Ok(Self {
            config,
            state: LocomotionState::default(),
            perspective,
            jump_pending: false,
            rig_synced: false,
        })
    }

    pub fn config(&self) -> &LocomotionConfig {
        &self.config
    }

    pub fn state(&self) -> &LocomotionState {
        &self.state
    }

    pub fn is_grounded(&self) -> bool {
        self.state.is_grounded
    }

    pub fn current_velocity(&self) -> Vec2 {
        self.state.current_velocity
    }

    pub fn pitch(&self) -> f32 {
        self.state.pitch
    }

    pub fn pitch_limits(&self) -> PitchLimits {
        PitchLimits::new(self.config.look.upper_limit, self.config.look.lower_limit)
    }

    pub fn perspective(&self) -> &CameraPerspectiveState {
        &self.perspective
    }

    pub fn pov(&self) -> PovState {
        self.perspective.active()
    }

    /// Whether a jump trigger is waiting for its liftoff impulse.
    pub fn is_jump_pending(&self) -> bool {
        self.jump_pending
    }

    /// Segment the ground probe covers this tick, for debug drawing.
    pub fn ground_probe_segment(&self, body: &impl PhysicsBody) -> (Vec3, Vec3) {
        let origin = body.world_center_of_mass();
        (origin, origin + Vec3::NEG_Y * self.config.ground.probe_distance())
    }

    // ========================================================================
    // Fixed tick
    // ========================================================================

    /// Run one physics tick of `dt` seconds.
    ///
    /// Forces are applied to `body` but not integrated; step the body after
    /// this call. Without an animation sink every parameter push is skipped
    /// and movement still runs.
    pub fn fixed_update(
        &mut self,
        dt: f32,
        input: &InputSnapshot,
        body: &mut impl PhysicsBody,
        ground: &impl GroundQuery,
        mut anim: Option<&mut dyn AnimationSink>,
    ) -> TickReport {
        let contact = self.detect_ground(body, ground, anim.as_deref_mut());
        let target_speed = self.apply_movement(dt, input, body, anim.as_deref_mut());
        let jump_triggered = self.handle_jump(input, anim.as_deref_mut());
        self.handle_crouch(input, anim.as_deref_mut());

        TickReport {
            contact,
            target_speed,
            jump_triggered,
        }
    }

    fn detect_ground(
        &mut self,
        body: &impl PhysicsBody,
        ground: &impl GroundQuery,
        anim: Option<&mut (dyn AnimationSink + '_)>,
    ) -> GroundContact {
        let origin = body.world_center_of_mass();
        let hit = ground.cast_ray(
            origin,
            Vec3::NEG_Y,
            self.config.ground.probe_distance(),
            self.config.ground.mask,
        );
        let contact = GroundContact { hit };
        let grounded = contact.is_grounded();

        if grounded != self.state.is_grounded {
            if grounded {
                debug!(distance = ?contact.distance(), "landed");
            } else {
                debug!(vertical_velocity = body.linear_velocity().y, "left ground");
            }
        }
        self.state.is_grounded = grounded;

        if let Some(anim) = anim {
            if !grounded {
                anim.set_float(AnimParam::ZVelocity, body.linear_velocity().y);
            }
            anim.set_bool(AnimParam::Falling, !grounded);
            anim.set_bool(AnimParam::Grounded, grounded);
        }

        contact
    }

    fn apply_movement(
        &mut self,
        dt: f32,
        input: &InputSnapshot,
        body: &mut impl PhysicsBody,
        anim: Option<&mut (dyn AnimationSink + '_)>,
    ) -> f32 {
        let movement = &self.config.movement;
        let target = target_speed(input, movement);
        let rotation = body.rotation();

        if self.state.is_grounded {
            let k = blend_factor(movement.blend_rate, dt);
            let desired = input.move_axis * target;
            self.state.current_velocity += (desired - self.state.current_velocity) * k;

            let actual = local_planar(rotation, body.linear_velocity());
            let delta = self.state.current_velocity - actual;
            body.add_force(world_from_planar(rotation, delta), ForceMode::VelocityChange);
        } else {
            let push = self.state.current_velocity * movement.air_resistance;
            body.add_force(world_from_planar(rotation, push), ForceMode::Acceleration);
        }

        if let Some(anim) = anim {
            anim.set_float(AnimParam::XVelocity, self.state.current_velocity.x);
            anim.set_float(AnimParam::YVelocity, self.state.current_velocity.y);
        }

        target
    }

    fn handle_jump(
        &mut self,
        input: &InputSnapshot,
        anim: Option<&mut (dyn AnimationSink + '_)>,
    ) -> bool {
        if !input.jump || !self.state.is_grounded {
            return false;
        }

        if !self.jump_pending {
            debug!("jump triggered");
        }
        self.jump_pending = true;
        if let Some(anim) = anim {
            anim.set_trigger(AnimParam::Jump);
        }
        true
    }

    fn handle_crouch(&self, input: &InputSnapshot, anim: Option<&mut (dyn AnimationSink + '_)>) {
        if let Some(anim) = anim {
            anim.set_bool(AnimParam::Crouch, input.crouch);
        }
    }

    /// Liftoff: cancel vertical velocity, apply the jump impulse, and lower
    /// the jump trigger.
    ///
    /// Meant to be invoked by the animation side after a trigger fired.
    /// Calling it without one is a caller error; it is logged and the impulse
    /// is still applied.
    pub fn jump_add_force(
        &mut self,
        body: &mut impl PhysicsBody,
        anim: Option<&mut dyn AnimationSink>,
    ) {
        if !self.jump_pending {
            warn!("jump impulse requested without a pending jump trigger");
        }

        let vertical = body.linear_velocity().y;
        body.add_force(Vec3::Y * -vertical, ForceMode::VelocityChange);
        body.add_force(Vec3::Y * self.config.jump_factor, ForceMode::Impulse);

        if let Some(anim) = anim {
            anim.reset_trigger(AnimParam::Jump);
        }
        self.jump_pending = false;
    }

    /// Lower the jump trigger and drop the pending mark without an impulse.
    ///
    /// For the animation side to discard a trigger it will not turn into a
    /// liftoff, e.g. one raised while a jump is already in flight.
    pub fn cancel_jump(&mut self, anim: Option<&mut dyn AnimationSink>) {
        if let Some(anim) = anim {
            anim.reset_trigger(AnimParam::Jump);
        }
        if self.jump_pending {
            debug!("jump trigger cancelled");
        }
        self.jump_pending = false;
    }

    // ========================================================================
    // Render frame
    // ========================================================================

    /// Flip the live camera when this frame carries a POV toggle edge.
    ///
    /// The first call also writes the configured priorities to the rig.
    pub fn update_pov(&mut self, input: &InputSnapshot, rig: &mut dyn CameraRig) -> PovState {
        if !self.rig_synced {
            self.perspective.apply_to(rig);
            self.rig_synced = true;
        }

        if input.pov_toggle {
            let state = self.perspective.toggle();
            self.perspective.apply_to(rig);
            info!(?state, "camera perspective changed");
        }

        self.perspective.active()
    }

    /// Per-frame camera pass with the frame-smoothed `dt`.
    ///
    /// Moves the pivot onto `head_anchor`, accumulates and clamps pitch onto
    /// the pivot, and yaws the body through its rotation-update path.
    pub fn update_camera(
        &mut self,
        dt: f32,
        input: &InputSnapshot,
        head_anchor: Vec3,
        body: &mut impl PhysicsBody,
        rig: &mut dyn CameraRig,
    ) {
        let sensitivity = self.config.look.sensitivity;

        self.state.pitch =
            look::accumulate_pitch(self.state.pitch, input.look.y, sensitivity, dt, self.pitch_limits());
        rig.set_pivot(head_anchor, look::pitch_rotation(self.state.pitch));
        rig.set_main_camera_position(head_anchor);

        let yaw = look::yaw_degrees(input.look.x, sensitivity, dt);
        if yaw != 0.0 {
            body.rotate_by(look::yaw_rotation(yaw));
        }
    }
}
