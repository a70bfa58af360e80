//! Point-of-view switching
//!
//! Two virtual cameras compete by priority; the higher one is live. A toggle
//! shifts the third-person priority by a fixed step relative to its current
//! value: up past the first-person camera when it is the lower one, back
//! down when it is the higher one. The first-person baseline never moves.

use super::rig::{CameraRig, VirtualCamera};
use crate::player::config::PovConfig;

/// Which camera currently holds the higher priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PovState {
    FirstActive,
    ThirdActive,
}

impl PovState {
    pub fn camera(self) -> VirtualCamera {
        match self {
            PovState::FirstActive => VirtualCamera::FirstPerson,
            PovState::ThirdActive => VirtualCamera::ThirdPerson,
        }
    }
}

/// Priority pair for the first/third person cameras.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CameraPerspectiveState {
    first_person_priority: i32,
    third_person_priority: i32,
    step: i32,
}

impl CameraPerspectiveState {
    /// Build from an already validated config (distinct priorities, step
    /// larger than their gap).
    pub fn from_config(config: &PovConfig) -> Self {
        Self {
            first_person_priority: config.first_person_priority,
            third_person_priority: config.third_person_priority,
            step: config.priority_step,
        }
    }

    pub fn priority(&self, camera: VirtualCamera) -> i32 {
        match camera {
            VirtualCamera::FirstPerson => self.first_person_priority,
            VirtualCamera::ThirdPerson => self.third_person_priority,
        }
    }

    pub fn active(&self) -> PovState {
        if self.first_person_priority > self.third_person_priority {
            PovState::FirstActive
        } else {
            PovState::ThirdActive
        }
    }

    /// Flip the live camera and return the new state.
    pub fn toggle(&mut self) -> PovState {
        if self.first_person_priority > self.third_person_priority {
            self.third_person_priority = self.third_person_priority.saturating_add(self.step);
        } else {
            self.third_person_priority = self.third_person_priority.saturating_sub(self.step);
        }
        self.active()
    }

    /// Write both priorities to the rig.
    pub fn apply_to(&self, rig: &mut dyn CameraRig) {
        rig.set_priority(VirtualCamera::FirstPerson, self.first_person_priority);
        rig.set_priority(VirtualCamera::ThirdPerson, self.third_person_priority);
    }
}
