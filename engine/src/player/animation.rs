//! Animation parameters
//!
//! The controller pushes named parameters to an animation system it does not
//! own. [`AnimationSink`] is that boundary; [`AnimatorParameters`] is a plain
//! parameter store implementing it, used when no real animation graph is
//! attached.
//!
//! Triggers are one-shot: setting one leaves it raised until the animation
//! side consumes it or the controller resets it explicitly.

use std::collections::{HashMap, HashSet};

/// Parameters the controller writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimParam {
    /// Blended strafe speed (float)
    XVelocity,
    /// Blended forward speed (float)
    YVelocity,
    /// Vertical speed while airborne (float)
    ZVelocity,
    /// On the ground (bool)
    Grounded,
    /// Off the ground (bool)
    Falling,
    /// Crouch held (bool)
    Crouch,
    /// Jump requested (trigger)
    Jump,
}

impl AnimParam {
    /// Parameter name as authored in the animation graph.
    pub const fn name(self) -> &'static str {
        match self {
            AnimParam::XVelocity => "x_velocity",
            AnimParam::YVelocity => "y_velocity",
            AnimParam::ZVelocity => "z_Velocity",
            AnimParam::Grounded => "Grounded",
            AnimParam::Falling => "Falling",
            AnimParam::Crouch => "Crouch",
            AnimParam::Jump => "Jump",
        }
    }
}

impl std::fmt::Display for AnimParam {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Write-only view of an animation system.
pub trait AnimationSink {
    fn set_float(&mut self, param: AnimParam, value: f32);
    fn set_bool(&mut self, param: AnimParam, value: bool);
    /// Raise a one-shot trigger.
    fn set_trigger(&mut self, param: AnimParam);
    /// Lower a trigger without it having been consumed.
    fn reset_trigger(&mut self, param: AnimParam);
}

/// In-memory parameter store.
#[derive(Debug, Clone, Default)]
pub struct AnimatorParameters {
    floats: HashMap<AnimParam, f32>,
    bools: HashMap<AnimParam, bool>,
    triggers: HashSet<AnimParam>,
    trigger_counts: HashMap<AnimParam, u32>,
}

impl AnimatorParameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last float written, or 0.0.
    pub fn float(&self, param: AnimParam) -> f32 {
        self.floats.get(&param).copied().unwrap_or(0.0)
    }

    /// Last bool written, or false.
    pub fn bool(&self, param: AnimParam) -> bool {
        self.bools.get(&param).copied().unwrap_or(false)
    }

    /// Whether the trigger is currently raised.
    pub fn is_triggered(&self, param: AnimParam) -> bool {
        self.triggers.contains(&param)
    }

    /// Animation-side read: returns whether the trigger was raised and
    /// lowers it.
    pub fn consume_trigger(&mut self, param: AnimParam) -> bool {
        self.triggers.remove(&param)
    }

    /// How many times the trigger has been raised since creation.
    pub fn trigger_count(&self, param: AnimParam) -> u32 {
        self.trigger_counts.get(&param).copied().unwrap_or(0)
    }
}

impl AnimationSink for AnimatorParameters {
    fn set_float(&mut self, param: AnimParam, value: f32) {
        self.floats.insert(param, value);
    }

    fn set_bool(&mut self, param: AnimParam, value: bool) {
        self.bools.insert(param, value);
    }

    fn set_trigger(&mut self, param: AnimParam) {
        self.triggers.insert(param);
        *self.trigger_counts.entry(param).or_insert(0) += 1;
    }

    fn reset_trigger(&mut self, param: AnimParam) {
        self.triggers.remove(&param);
    }
}
