//! Camera rig boundary
//!
//! The controller only writes to the camera side: priorities on two virtual
//! camera handles and the pivot transform they follow. [`RigState`] keeps the
//! last written values for hosts that read them back each frame.

use glam::{Quat, Vec3};

/// The two virtual cameras the POV switch chooses between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VirtualCamera {
    FirstPerson,
    ThirdPerson,
}

/// Write-only camera rig.
pub trait CameraRig {
    fn set_priority(&mut self, camera: VirtualCamera, priority: i32);

    /// Place the pivot both virtual cameras follow. `local_rotation` is
    /// relative to the character body.
    fn set_pivot(&mut self, position: Vec3, local_rotation: Quat);

    /// Move the rendering camera onto the pivot.
    fn set_main_camera_position(&mut self, position: Vec3);
}

/// Camera rig state as last written by the controller.
#[derive(Debug, Clone, PartialEq)]
pub struct RigState {
    pub first_person_priority: i32,
    pub third_person_priority: i32,
    pub pivot_position: Vec3,
    pub pivot_rotation: Quat,
    pub main_camera_position: Vec3,
}

impl Default for RigState {
    fn default() -> Self {
        Self {
            first_person_priority: 0,
            third_person_priority: 0,
            pivot_position: Vec3::ZERO,
            pivot_rotation: Quat::IDENTITY,
            main_camera_position: Vec3::ZERO,
        }
    }
}

impl RigState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn priority(&self, camera: VirtualCamera) -> i32 {
        match camera {
            VirtualCamera::FirstPerson => self.first_person_priority,
            VirtualCamera::ThirdPerson => self.third_person_priority,
        }
    }

    /// The camera with the higher priority; ties go to third person.
    pub fn live_camera(&self) -> VirtualCamera {
        if self.first_person_priority > self.third_person_priority {
            VirtualCamera::FirstPerson
        } else {
            VirtualCamera::ThirdPerson
        }
    }

    /// Pivot orientation in world space given the body's rotation.
    pub fn pivot_world_rotation(&self, body_rotation: Quat) -> Quat {
        body_rotation * self.pivot_rotation
    }
}

impl CameraRig for RigState {
    fn set_priority(&mut self, camera: VirtualCamera, priority: i32) {
        match camera {
            VirtualCamera::FirstPerson => self.first_person_priority = priority,
            VirtualCamera::ThirdPerson => self.third_person_priority = priority,
        }
    }

    fn set_pivot(&mut self, position: Vec3, local_rotation: Quat) {
        self.pivot_position = position;
        self.pivot_rotation = local_rotation;
    }

    fn set_main_camera_position(&mut self, position: Vec3) {
        self.main_camera_position = position;
    }
}
