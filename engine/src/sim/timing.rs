//! Frame timing
//!
//! The two time sources the controller runs on: a fixed physics step carved
//! out of variable frame deltas, and an exponentially smoothed frame delta
//! for camera look.

use std::time::Duration;

use tracing::warn;

/// Default physics rate (ticks per second).
pub const DEFAULT_TICK_RATE: u32 = 50;

/// Ticks to run this frame plus any backlog that had to be discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepPlan {
    pub ticks_to_run: u32,
    pub dropped_backlog: Duration,
}

/// Fixed-timestep accumulator.
///
/// Each frame adds its (clamped) delta; whole steps are drained from the
/// accumulator up to `max_ticks_per_frame`. A backlog still a full step or
/// more after the cap is dropped so a long stall cannot snowball.
#[derive(Debug, Clone)]
pub struct FixedTimestep {
    step: Duration,
    accumulator: Duration,
    max_ticks_per_frame: u32,
    max_frame_delta: Duration,
}

impl Default for FixedTimestep {
    fn default() -> Self {
        Self::from_rate(DEFAULT_TICK_RATE)
    }
}

impl FixedTimestep {
    /// Timestep of `1 / ticks_per_second` (a zero rate is treated as 1 Hz).
    pub fn from_rate(ticks_per_second: u32) -> Self {
        let step = Duration::from_secs_f64(1.0 / f64::from(ticks_per_second.max(1)));
        Self {
            step,
            accumulator: Duration::ZERO,
            max_ticks_per_frame: 8,
            max_frame_delta: Duration::from_millis(250),
        }
    }

    pub fn with_max_ticks_per_frame(mut self, max_ticks: u32) -> Self {
        self.max_ticks_per_frame = max_ticks.max(1);
        self
    }

    pub fn step(&self) -> Duration {
        self.step
    }

    /// Step length in seconds.
    pub fn step_secs(&self) -> f32 {
        self.step.as_secs_f32()
    }

    pub fn accumulator(&self) -> Duration {
        self.accumulator
    }

    /// Fraction of a step left in the accumulator, for render interpolation.
    pub fn alpha(&self) -> f32 {
        self.accumulator.as_secs_f32() / self.step_secs()
    }

    /// Feed one frame's delta and get the number of ticks to run.
    pub fn advance(&mut self, frame_dt: Duration) -> StepPlan {
        let mut accumulator = self
            .accumulator
            .saturating_add(frame_dt.min(self.max_frame_delta));
        let mut ticks_to_run = 0u32;

        while accumulator >= self.step && ticks_to_run < self.max_ticks_per_frame {
            accumulator = accumulator.saturating_sub(self.step);
            ticks_to_run += 1;
        }

        let dropped_backlog = if accumulator >= self.step {
            let dropped = accumulator;
            accumulator = Duration::ZERO;
            warn!(
                dropped_ms = dropped.as_secs_f64() * 1000.0,
                max_ticks = self.max_ticks_per_frame,
                "fixed step backlog dropped"
            );
            dropped
        } else {
            Duration::ZERO
        };

        self.accumulator = accumulator;
        StepPlan {
            ticks_to_run,
            dropped_backlog,
        }
    }
}

/// Exponentially smoothed frame delta.
///
/// The first sample seeds the average; later samples move it by `weight`.
/// Spikes are capped at `max_delta` before smoothing.
#[derive(Debug, Clone)]
pub struct SmoothedFrameTime {
    smoothed: Option<f32>,
    weight: f32,
    max_delta: f32,
}

impl Default for SmoothedFrameTime {
    fn default() -> Self {
        Self {
            smoothed: None,
            weight: 0.2,
            max_delta: 0.1,
        }
    }
}

impl SmoothedFrameTime {
    pub fn new() -> Self {
        Self::default()
    }

    /// Smoothing weight in (0, 1]; 1 disables smoothing.
    pub fn with_weight(mut self, weight: f32) -> Self {
        self.weight = weight.clamp(f32::EPSILON, 1.0);
        self
    }

    /// Record a raw frame delta (seconds) and return the smoothed value.
    pub fn sample(&mut self, raw_dt: f32) -> f32 {
        let raw = raw_dt.clamp(0.0, self.max_delta);
        let next = match self.smoothed {
            Some(prev) => prev + (raw - prev) * self.weight,
            None => raw,
        };
        self.smoothed = Some(next);
        next
    }

    /// Last smoothed value, or zero before the first sample.
    pub fn get(&self) -> f32 {
        self.smoothed.unwrap_or(0.0)
    }
}
