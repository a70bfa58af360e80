//! Locomotion Configuration
//!
//! Every tunable the controller reads, grouped the way the controller uses
//! them. `Default` carries the tuned values for a human-sized character;
//! configs can also be loaded from JSON, with missing fields falling back to
//! those defaults.
//!
//! Configuration is validated once, when a controller is built. Nothing is
//! re-checked per tick.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::physics::LayerMask;

/// Smallest jump impulse accepted (N·s)
pub const JUMP_FACTOR_MIN: f32 = 10.0;

/// Largest jump impulse accepted (N·s)
pub const JUMP_FACTOR_MAX: f32 = 500.0;

/// Configuration rejected at construction time.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{field} must be a finite number, got {value}")]
    NotFinite { field: &'static str, value: f32 },
    #[error("{field} must be greater than zero, got {value}")]
    NotPositive { field: &'static str, value: f32 },
    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f32 },
    #[error("air resistance must lie in [0, 1), got {0}")]
    AirResistanceOutOfRange(f32),
    #[error("jump factor must lie in [{min}, {max}], got {value}")]
    JumpFactorOutOfRange { value: f32, min: f32, max: f32 },
    #[error("pitch upper limit {upper} must not exceed lower limit {lower}")]
    InvertedPitchLimits { upper: f32, lower: f32 },
    #[error("camera priorities must differ, both are {0}")]
    PriorityTie(i32),
    #[error("priority step {step} must exceed the priority gap {gap} to flip the active camera")]
    PriorityStepTooSmall { step: i32, gap: i64 },
    #[error("ground mask selects no collision layers")]
    EmptyGroundMask,
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Planar speed selection and blending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementConfig {
    /// Exponential blend rate toward the target velocity (1/s)
    pub blend_rate: f32,
    /// Walking speed (m/s)
    pub walk_speed: f32,
    /// Running speed (m/s)
    pub run_speed: f32,
    /// Crouched speed (m/s); wins over run/walk whenever there is move input
    pub crouch_speed: f32,
    /// Fraction of the last blended velocity pushed while airborne, in [0, 1)
    pub air_resistance: f32,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            blend_rate: 8.9,
            walk_speed: 2.0,
            run_speed: 6.0,
            crouch_speed: 1.5,
            air_resistance: 0.8,
        }
    }
}

/// Downward ground probe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroundConfig {
    /// Distance from the center of mass to the feet (m)
    pub clearance: f32,
    /// Extra reach past the feet that still counts as grounded (m)
    pub epsilon: f32,
    /// Layers that count as ground
    pub mask: LayerMask,
}

impl GroundConfig {
    /// Total ray length used for the probe.
    #[inline]
    pub fn probe_distance(&self) -> f32 {
        self.clearance + self.epsilon
    }
}

impl Default for GroundConfig {
    fn default() -> Self {
        Self {
            clearance: 0.8,
            epsilon: 0.1,
            mask: LayerMask::layer(0),
        }
    }
}

/// Mouse look. Pitch limits are in degrees; negative looks up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LookConfig {
    /// Degrees per unit of look input per second
    pub sensitivity: f32,
    /// Most upward pitch (degrees)
    pub upper_limit: f32,
    /// Most downward pitch (degrees)
    pub lower_limit: f32,
}

impl Default for LookConfig {
    fn default() -> Self {
        Self {
            sensitivity: 21.9,
            upper_limit: -40.0,
            lower_limit: 70.0,
        }
    }
}

/// Virtual camera priorities for the first/third person switch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PovConfig {
    pub first_person_priority: i32,
    pub third_person_priority: i32,
    /// Amount the third-person priority shifts on each toggle
    pub priority_step: i32,
}

impl Default for PovConfig {
    fn default() -> Self {
        Self {
            first_person_priority: 10,
            third_person_priority: 20,
            priority_step: 30,
        }
    }
}

/// Complete controller configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocomotionConfig {
    pub movement: MovementConfig,
    pub ground: GroundConfig,
    /// Upward impulse applied at liftoff (N·s)
    pub jump_factor: f32,
    pub look: LookConfig,
    pub pov: PovConfig,
}

impl Default for LocomotionConfig {
    fn default() -> Self {
        Self {
            movement: MovementConfig::default(),
            ground: GroundConfig::default(),
            jump_factor: 260.0,
            look: LookConfig::default(),
            pov: PovConfig::default(),
        }
    }
}

fn finite(field: &'static str, value: f32) -> Result<f32, ConfigError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ConfigError::NotFinite { field, value })
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if finite(field, value)? > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if finite(field, value)? >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Negative { field, value })
    }
}

impl LocomotionConfig {
    /// Parse a JSON document and validate it.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: LocomotionConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        info!(path = %path.display(), "loaded locomotion config");
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check every field against its allowed range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let m = &self.movement;
        positive("movement.blend_rate", m.blend_rate)?;
        positive("movement.walk_speed", m.walk_speed)?;
        positive("movement.run_speed", m.run_speed)?;
        positive("movement.crouch_speed", m.crouch_speed)?;
        let air = finite("movement.air_resistance", m.air_resistance)?;
        if !(0.0..1.0).contains(&air) {
            return Err(ConfigError::AirResistanceOutOfRange(air));
        }

        positive("ground.clearance", self.ground.clearance)?;
        non_negative("ground.epsilon", self.ground.epsilon)?;
        if self.ground.mask.is_empty() {
            return Err(ConfigError::EmptyGroundMask);
        }

        let jump = finite("jump_factor", self.jump_factor)?;
        if !(JUMP_FACTOR_MIN..=JUMP_FACTOR_MAX).contains(&jump) {
            return Err(ConfigError::JumpFactorOutOfRange {
                value: jump,
                min: JUMP_FACTOR_MIN,
                max: JUMP_FACTOR_MAX,
            });
        }

        positive("look.sensitivity", self.look.sensitivity)?;
        let upper = finite("look.upper_limit", self.look.upper_limit)?;
        let lower = finite("look.lower_limit", self.look.lower_limit)?;
        if upper > lower {
            return Err(ConfigError::InvertedPitchLimits { upper, lower });
        }

        let pov = &self.pov;
        if pov.first_person_priority == pov.third_person_priority {
            return Err(ConfigError::PriorityTie(pov.first_person_priority));
        }
        let gap = (i64::from(pov.first_person_priority) - i64::from(pov.third_person_priority)).abs();
        if i64::from(pov.priority_step) <= gap {
            return Err(ConfigError::PriorityStepTooSmall {
                step: pov.priority_step,
                gap,
            });
        }

        Ok(())
    }
}
