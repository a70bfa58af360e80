//! Look input tracker
//!
//! Accumulates raw mouse motion between frames so the look vector handed to
//! the controller is the total motion since the previous frame. Also tracks
//! the cursor lock the host applies while the character is being driven.

use glam::Vec2;

/// Cursor presentation requested from the platform layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorLock {
    pub visible: bool,
    pub locked: bool,
}

impl CursorLock {
    /// Hidden and confined, the state used while playing.
    pub const CAPTURED: CursorLock = CursorLock {
        visible: false,
        locked: true,
    };
    /// Visible and free, for menus or when focus is lost.
    pub const RELEASED: CursorLock = CursorLock {
        visible: true,
        locked: false,
    };
}

/// Look delta accumulator with cursor capture tracking.
///
/// Deltas only accumulate while the cursor is captured; releasing capture
/// drops whatever was pending so the view does not jump on re-capture.
#[derive(Debug, Clone)]
pub struct LookState {
    delta: Vec2,
    cursor: CursorLock,
}

impl Default for LookState {
    fn default() -> Self {
        Self {
            delta: Vec2::ZERO,
            cursor: CursorLock::CAPTURED,
        }
    }
}

impl LookState {
    /// Start captured, matching how the character takes control on spawn.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add raw mouse motion (device units, +y is mouse moving up).
    #[inline]
    pub fn accumulate_delta(&mut self, dx: f32, dy: f32) {
        if self.cursor.locked {
            self.delta += Vec2::new(dx, dy);
        }
    }

    /// Take the accumulated delta, leaving zero behind.
    #[inline]
    pub fn consume_delta(&mut self) -> Vec2 {
        std::mem::take(&mut self.delta)
    }

    #[inline]
    pub fn peek_delta(&self) -> Vec2 {
        self.delta
    }

    pub fn set_captured(&mut self, captured: bool) {
        self.cursor = if captured {
            CursorLock::CAPTURED
        } else {
            self.delta = Vec2::ZERO;
            CursorLock::RELEASED
        };
    }

    #[inline]
    pub fn is_captured(&self) -> bool {
        self.cursor.locked
    }

    /// Cursor state the host should apply to its window.
    pub fn cursor(&self) -> CursorLock {
        self.cursor
    }
}
