//! Input manager
//!
//! Turns key and mouse events into [`InputSnapshot`]s. The host forwards
//! events as they arrive and calls [`InputManager::snapshot`] once per
//! frame; everything the controller sees comes from that snapshot.

use std::collections::HashSet;

use glam::Vec2;

use super::bindings::{InputAction, KeyBindings};
use super::keyboard::KeyCode;
use super::mouse_state::{CursorLock, LookState};
use super::snapshot::InputSnapshot;

/// Event-to-snapshot adapter for the locomotion actions.
#[derive(Debug, Clone)]
pub struct InputManager {
    bindings: KeyBindings,
    pressed: HashSet<KeyCode>,
    look: LookState,
    /// Set on the ChangePov rising edge, cleared by the next snapshot
    pov_edge: bool,
    enabled: bool,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::with_bindings(KeyBindings::new())
    }
}

impl InputManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bindings(bindings: KeyBindings) -> Self {
        Self {
            bindings,
            pressed: HashSet::new(),
            look: LookState::new(),
            pov_edge: false,
            enabled: true,
        }
    }

    pub fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }

    pub fn bindings_mut(&mut self) -> &mut KeyBindings {
        &mut self.bindings
    }

    /// Record a key press or release.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) {
        if !self.enabled {
            return;
        }

        if pressed {
            let newly_pressed = self.pressed.insert(key);
            if newly_pressed && self.bindings.get_action(key) == Some(InputAction::ChangePov) {
                self.pov_edge = true;
            }
        } else {
            self.pressed.remove(&key);
        }
    }

    /// Record a key event coming straight from winit.
    pub fn handle_winit_key(&mut self, key: winit::keyboard::KeyCode, pressed: bool) {
        let key = KeyCode::from_winit(key);
        if key != KeyCode::Unknown {
            self.handle_key(key, pressed);
        }
    }

    /// Record raw mouse motion (+dy is the mouse moving up).
    pub fn handle_mouse_motion(&mut self, dx: f32, dy: f32) {
        if self.enabled {
            self.look.accumulate_delta(dx, dy);
        }
    }

    /// Record a winit `DeviceEvent::MouseMotion` delta, whose y grows downward.
    pub fn handle_winit_mouse_motion(&mut self, delta: (f64, f64)) {
        self.handle_mouse_motion(delta.0 as f32, -(delta.1 as f32));
    }

    /// Enable or disable the action map. Disabling releases every key and
    /// drops pending look motion and toggle edges.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.pressed.clear();
            self.pov_edge = false;
            self.look.consume_delta();
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_cursor_captured(&mut self, captured: bool) {
        self.look.set_captured(captured);
    }

    /// Cursor state the host should apply to its window.
    pub fn cursor(&self) -> CursorLock {
        self.look.cursor()
    }

    fn action(&self, action: InputAction) -> bool {
        self.bindings.is_action_pressed(action, &self.pressed)
    }

    /// Current move intent. Diagonals are normalized so the vector never
    /// exceeds unit length.
    pub fn move_axis(&self) -> Vec2 {
        let axis = |pos: InputAction, neg: InputAction| {
            (self.action(pos) as i32 - self.action(neg) as i32) as f32
        };
        let raw = Vec2::new(
            axis(InputAction::MoveRight, InputAction::MoveLeft),
            axis(InputAction::MoveForward, InputAction::MoveBack),
        );
        if raw.length_squared() > 1.0 {
            raw.normalize()
        } else {
            raw
        }
    }

    /// Build the snapshot for this frame, consuming look motion and the POV
    /// toggle edge.
    pub fn snapshot(&mut self) -> InputSnapshot {
        InputSnapshot {
            move_axis: self.move_axis(),
            look: self.look.consume_delta(),
            run: self.action(InputAction::Run),
            jump: self.action(InputAction::Jump),
            crouch: self.action(InputAction::Crouch),
            pov_toggle: std::mem::take(&mut self.pov_edge),
        }
    }
}
