//! Camera Module
//!
//! Look math, first/third person switching, and the camera rig boundary.
//! Window-system agnostic: only camera state and math live here.

pub mod look;
pub mod pov;
pub mod rig;

pub use look::{PitchLimits, accumulate_pitch, pitch_rotation, yaw_degrees, yaw_rotation};
pub use pov::{CameraPerspectiveState, PovState};
pub use rig::{CameraRig, RigState, VirtualCamera};
