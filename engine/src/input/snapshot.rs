//! Input snapshot
//!
//! The poll-based view of input the controller reads once per tick.

use glam::Vec2;
use static_assertions::assert_impl_all;

/// Input state for one tick or frame.
///
/// `move_axis.x` is strafe (right positive), `move_axis.y` is forward
/// (forward positive); each component lies in [-1, 1]. `look` is the raw
/// motion since the previous frame and is unbounded. `pov_toggle` is true
/// only on the snapshot following the toggle key's rising edge.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InputSnapshot {
    pub move_axis: Vec2,
    pub look: Vec2,
    pub run: bool,
    pub jump: bool,
    pub crouch: bool,
    pub pov_toggle: bool,
}

// Snapshots are handed out by value; no tick ever sees a half-written one.
assert_impl_all!(InputSnapshot: Copy, Send, Sync);

impl InputSnapshot {
    /// Snapshot with only a move vector set; components are clamped to [-1, 1].
    pub fn moving(x: f32, z: f32) -> Self {
        Self {
            move_axis: Vec2::new(x.clamp(-1.0, 1.0), z.clamp(-1.0, 1.0)),
            ..Default::default()
        }
    }

    pub fn with_run(mut self, run: bool) -> Self {
        self.run = run;
        self
    }

    pub fn with_jump(mut self, jump: bool) -> Self {
        self.jump = jump;
        self
    }

    pub fn with_crouch(mut self, crouch: bool) -> Self {
        self.crouch = crouch;
        self
    }

    pub fn with_look(mut self, dx: f32, dy: f32) -> Self {
        self.look = Vec2::new(dx, dy);
        self
    }

    pub fn with_pov_toggle(mut self, pov_toggle: bool) -> Self {
        self.pov_toggle = pov_toggle;
        self
    }

    /// Whether there is any directional intent this tick.
    #[inline]
    pub fn has_move(&self) -> bool {
        self.move_axis != Vec2::ZERO
    }
}
