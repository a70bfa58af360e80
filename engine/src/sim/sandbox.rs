//! Headless character sandbox
//!
//! Wires the input manager, locomotion controller, rigid body, collider
//! world, animator parameters and camera rig into one loop driven by frame
//! deltas. Stands in for the engine a real game would host the controller in.
//!
//! Per frame:
//! 1. take one input snapshot
//! 2. run the planned fixed ticks: controller tick, liftoff cue, body step
//! 3. render pass: POV toggle, then camera look with the smoothed delta
//!
//! The liftoff cue plays the part of the animation event: a fired jump
//! trigger starts a wind-up, and when it elapses the controller's
//! `jump_add_force` is called. Losing ground during the wind-up cancels the
//! jump. Triggers raised after liftoff while the body is still inside the
//! probe range are cancelled; the cue re-arms once the body is airborne or
//! has settled back with no upward velocity.

use std::time::Duration;

use glam::Vec3;
use tracing::{debug, trace};

use super::timing::{FixedTimestep, SmoothedFrameTime};
use crate::camera::{PovState, RigState};
use crate::input::InputManager;
use crate::physics::{Collider, ColliderWorld, GRAVITY, PhysicsBody, RigidBody};
use crate::player::{AnimationSink, AnimatorParameters, ConfigError, LocomotionConfig, LocomotionController};

/// Default wind-up between the jump trigger and liftoff (seconds).
pub const DEFAULT_LIFTOFF_DELAY: f32 = 0.1;

/// Head anchor relative to the feet pivot, in body space.
pub const DEFAULT_HEAD_OFFSET: Vec3 = Vec3::new(0.0, 1.6, 0.0);

#[derive(Debug, Clone, Copy, PartialEq)]
enum JumpPhase {
    Ready,
    /// Trigger fired; seconds left until liftoff
    Windup(f32),
    /// Impulse applied; waiting to come back down
    Launched,
}

/// Summary of one [`Sandbox::advance`] call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameReport {
    pub ticks_run: u32,
    pub grounded: bool,
    pub pov: PovState,
    /// A liftoff impulse was applied during this frame
    pub lifted_off: bool,
}

/// Self-contained character simulation.
#[derive(Debug)]
pub struct Sandbox {
    input: InputManager,
    controller: LocomotionController,
    body: RigidBody,
    world: ColliderWorld,
    animator: AnimatorParameters,
    animation_enabled: bool,
    rig: RigState,
    timestep: FixedTimestep,
    frame_time: SmoothedFrameTime,
    gravity: Vec3,
    head_offset: Vec3,
    liftoff_delay: f32,
    jump_phase: JumpPhase,
    ticks: u64,
}

impl Sandbox {
    /// Build a sandbox with a flat 200 m floor at y = 0 on the first ground
    /// layer, and the body standing on it at the origin.
    pub fn new(config: LocomotionConfig) -> Result<Self, ConfigError> {
        let controller = LocomotionController::new(config)?;
        let mask = controller.config().ground.mask;
        let floor_layer = mask.0.trailing_zeros();

        let mut world = ColliderWorld::new();
        world.insert(Collider::ground_slab(Vec3::ZERO, 100.0, 0.0, floor_layer));

        let mut body = RigidBody::new();
        body.com_height = controller.config().ground.clearance;
        body.collision_mask = mask;

        Ok(Self {
            input: InputManager::new(),
            controller,
            body,
            world,
            animator: AnimatorParameters::new(),
            animation_enabled: true,
            rig: RigState::new(),
            timestep: FixedTimestep::default(),
            frame_time: SmoothedFrameTime::new(),
            gravity: GRAVITY,
            head_offset: DEFAULT_HEAD_OFFSET,
            liftoff_delay: DEFAULT_LIFTOFF_DELAY,
            jump_phase: JumpPhase::Ready,
            ticks: 0,
        })
    }

    pub fn with_timestep(mut self, timestep: FixedTimestep) -> Self {
        self.timestep = timestep;
        self
    }

    pub fn with_liftoff_delay(mut self, seconds: f32) -> Self {
        self.liftoff_delay = seconds.max(0.0);
        self
    }

    /// Detach or reattach the animator. Movement keeps running either way.
    pub fn set_animation_enabled(&mut self, enabled: bool) {
        self.animation_enabled = enabled;
    }

    pub fn input_mut(&mut self) -> &mut InputManager {
        &mut self.input
    }

    pub fn controller(&self) -> &LocomotionController {
        &self.controller
    }

    pub fn body(&self) -> &RigidBody {
        &self.body
    }

    pub fn body_mut(&mut self) -> &mut RigidBody {
        &mut self.body
    }

    pub fn world_mut(&mut self) -> &mut ColliderWorld {
        &mut self.world
    }

    pub fn animator(&self) -> &AnimatorParameters {
        &self.animator
    }

    pub fn rig(&self) -> &RigState {
        &self.rig
    }

    /// Fixed ticks simulated so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Head anchor in world space.
    pub fn head_anchor(&self) -> Vec3 {
        self.body.position + self.body.rotation() * self.head_offset
    }

    /// Advance by one rendered frame of `frame_dt`.
    pub fn advance(&mut self, frame_dt: Duration) -> FrameReport {
        let snapshot = self.input.snapshot();
        let plan = self.timestep.advance(frame_dt);
        let dt = self.timestep.step_secs();
        let mut lifted_off = false;

        for _ in 0..plan.ticks_to_run {
            let anim = animation_sink(&mut self.animator, self.animation_enabled);
            let report = self
                .controller
                .fixed_update(dt, &snapshot, &mut self.body, &self.world, anim);

            lifted_off |= self.run_liftoff_cue(dt, report.jump_triggered);

            self.body.step(dt, self.gravity, &self.world);
            self.ticks += 1;
            trace!(
                tick = self.ticks,
                grounded = report.contact.is_grounded(),
                target_speed = report.target_speed,
                "fixed tick"
            );
        }

        let smoothed_dt = self.frame_time.sample(frame_dt.as_secs_f32());
        let pov = self.controller.update_pov(&snapshot, &mut self.rig);
        let head = self.head_anchor();
        self.controller
            .update_camera(smoothed_dt, &snapshot, head, &mut self.body, &mut self.rig);

        FrameReport {
            ticks_run: plan.ticks_to_run,
            grounded: self.controller.is_grounded(),
            pov,
            lifted_off,
        }
    }

    /// Advance `frames` frames of equal length.
    pub fn run_frames(&mut self, frames: u32, frame_dt: Duration) -> FrameReport {
        let mut last = None;
        for _ in 0..frames {
            last = Some(self.advance(frame_dt));
        }
        last.unwrap_or(FrameReport {
            ticks_run: 0,
            grounded: self.controller.is_grounded(),
            pov: self.controller.pov(),
            lifted_off: false,
        })
    }

    fn run_liftoff_cue(&mut self, dt: f32, jump_triggered: bool) -> bool {
        let grounded = self.controller.is_grounded();

        if self.jump_phase == JumpPhase::Launched {
            // Re-arm once airborne, or once a hop too small to leave the
            // probe range has settled
            if !grounded || self.body.velocity.y <= 0.0 {
                self.jump_phase = JumpPhase::Ready;
            } else {
                if jump_triggered {
                    // Still inside the probe right after liftoff
                    let anim = animation_sink(&mut self.animator, self.animation_enabled);
                    self.controller.cancel_jump(anim);
                }
                return false;
            }
        }

        match self.jump_phase {
            JumpPhase::Ready if jump_triggered => {
                debug!(delay = self.liftoff_delay, "jump wind-up started");
                self.jump_phase = JumpPhase::Windup(self.liftoff_delay);
                false
            }
            JumpPhase::Windup(_) if !grounded => {
                debug!("left ground during jump wind-up");
                let anim = animation_sink(&mut self.animator, self.animation_enabled);
                self.controller.cancel_jump(anim);
                self.jump_phase = JumpPhase::Ready;
                false
            }
            JumpPhase::Windup(remaining) => {
                let remaining = remaining - dt;
                if remaining <= 0.0 {
                    let anim = animation_sink(&mut self.animator, self.animation_enabled);
                    self.controller.jump_add_force(&mut self.body, anim);
                    self.jump_phase = JumpPhase::Launched;
                    debug!(vertical_velocity = self.body.velocity.y, "liftoff");
                    true
                } else {
                    self.jump_phase = JumpPhase::Windup(remaining);
                    false
                }
            }
            JumpPhase::Ready | JumpPhase::Launched => false,
        }
    }
}

fn animation_sink(animator: &mut AnimatorParameters, enabled: bool) -> Option<&mut dyn AnimationSink> {
    if enabled { Some(animator) } else { None }
}
