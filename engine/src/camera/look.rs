//! Mouse look math
//!
//! Pitch is an accumulated angle in degrees, positive looking down, clamped
//! to a configurable range. Yaw is never accumulated here: each frame's yaw
//! is returned as a delta rotation for the physics body to compose.
//!
//! Angles follow the engine's right-handed, Y-up convention with yaw 0
//! looking toward -Z, so a positive look input turns right and a positive
//! pitch tilts the view down.

use glam::Quat;

/// Inclusive pitch range in degrees. `upper` is the look-up extreme and
/// `lower` the look-down extreme; either may take either sign.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PitchLimits {
    pub upper: f32,
    pub lower: f32,
}

impl PitchLimits {
    pub fn new(upper: f32, lower: f32) -> Self {
        Self { upper, lower }
    }

    #[inline]
    pub fn clamp(&self, pitch: f32) -> f32 {
        pitch.clamp(self.upper, self.lower)
    }

    #[inline]
    pub fn contains(&self, pitch: f32) -> bool {
        (self.upper..=self.lower).contains(&pitch)
    }
}

/// Accumulate one frame of vertical look into `pitch`.
///
/// Moving the mouse up (positive `look_y`) lowers pitch, i.e. looks up.
#[inline]
pub fn accumulate_pitch(pitch: f32, look_y: f32, sensitivity: f32, dt: f32, limits: PitchLimits) -> f32 {
    limits.clamp(pitch - look_y * sensitivity * dt)
}

/// Yaw to add this frame, in degrees.
#[inline]
pub fn yaw_degrees(look_x: f32, sensitivity: f32, dt: f32) -> f32 {
    look_x * sensitivity * dt
}

/// Local rotation of the camera pivot for a pitch in degrees.
pub fn pitch_rotation(pitch_degrees: f32) -> Quat {
    Quat::from_rotation_x(-pitch_degrees.to_radians())
}

/// Rotation about world up for a yaw delta in degrees (positive turns right).
pub fn yaw_rotation(yaw_degrees: f32) -> Quat {
    Quat::from_rotation_y(-yaw_degrees.to_radians())
}
