//! Input Bindings Module
//!
//! Maps physical keys to the logical locomotion actions so keys can be
//! remapped without touching controller code.

use std::collections::{HashMap, HashSet};

use super::KeyCode;

/// Logical locomotion actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputAction {
    /// Move forward (default: W)
    MoveForward,
    /// Move backward (default: S)
    MoveBack,
    /// Strafe left (default: A)
    MoveLeft,
    /// Strafe right (default: D)
    MoveRight,
    /// Run modifier (default: Shift)
    Run,
    /// Jump (default: Space)
    Jump,
    /// Crouch (default: Ctrl)
    Crouch,
    /// Switch first/third person (default: V)
    ChangePov,
}

/// Bidirectional key ↔ action table.
///
/// Each key maps to at most one action and each action to at most one key;
/// binding either side replaces the previous pairing.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    key_to_action: HashMap<KeyCode, InputAction>,
    action_to_key: HashMap<InputAction, KeyCode>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyBindings {
    /// Create bindings with the default layout:
    /// - W/S/A/D = movement
    /// - Shift (Left) = Run
    /// - Space = Jump
    /// - Ctrl (Left) = Crouch
    /// - V = ChangePov
    pub fn new() -> Self {
        let mut bindings = Self::empty();

        bindings.bind(KeyCode::W, InputAction::MoveForward);
        bindings.bind(KeyCode::S, InputAction::MoveBack);
        bindings.bind(KeyCode::A, InputAction::MoveLeft);
        bindings.bind(KeyCode::D, InputAction::MoveRight);
        bindings.bind(KeyCode::ShiftLeft, InputAction::Run);
        bindings.bind(KeyCode::Space, InputAction::Jump);
        bindings.bind(KeyCode::ControlLeft, InputAction::Crouch);
        bindings.bind(KeyCode::V, InputAction::ChangePov);

        bindings
    }

    /// Bindings with nothing bound.
    pub fn empty() -> Self {
        Self {
            key_to_action: HashMap::new(),
            action_to_key: HashMap::new(),
        }
    }

    /// Bind a physical key to a logical action, dropping any previous
    /// binding of either.
    pub fn bind(&mut self, key: KeyCode, action: InputAction) {
        if let Some(old_action) = self.key_to_action.remove(&key) {
            self.action_to_key.remove(&old_action);
        }
        if let Some(old_key) = self.action_to_key.remove(&action) {
            self.key_to_action.remove(&old_key);
        }

        self.key_to_action.insert(key, action);
        self.action_to_key.insert(action, key);
    }

    pub fn unbind_key(&mut self, key: KeyCode) {
        if let Some(action) = self.key_to_action.remove(&key) {
            self.action_to_key.remove(&action);
        }
    }

    pub fn unbind_action(&mut self, action: InputAction) {
        if let Some(key) = self.action_to_key.remove(&action) {
            self.key_to_action.remove(&key);
        }
    }

    pub fn get_action(&self, key: KeyCode) -> Option<InputAction> {
        self.key_to_action.get(&key).copied()
    }

    pub fn get_key(&self, action: InputAction) -> Option<KeyCode> {
        self.action_to_key.get(&action).copied()
    }

    /// Whether `action`'s bound key is in `pressed_keys`. Unbound actions are
    /// never pressed.
    pub fn is_action_pressed(&self, action: InputAction, pressed_keys: &HashSet<KeyCode>) -> bool {
        self.action_to_key
            .get(&action)
            .is_some_and(|key| pressed_keys.contains(key))
    }

    pub fn all_bindings(&self) -> impl Iterator<Item = (KeyCode, InputAction)> + '_ {
        self.key_to_action.iter().map(|(&k, &a)| (k, a))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bindings() {
        let bindings = KeyBindings::new();

        assert_eq!(bindings.get_action(KeyCode::W), Some(InputAction::MoveForward));
        assert_eq!(bindings.get_action(KeyCode::S), Some(InputAction::MoveBack));
        assert_eq!(bindings.get_action(KeyCode::A), Some(InputAction::MoveLeft));
        assert_eq!(bindings.get_action(KeyCode::D), Some(InputAction::MoveRight));
        assert_eq!(bindings.get_action(KeyCode::ShiftLeft), Some(InputAction::Run));
        assert_eq!(bindings.get_action(KeyCode::Space), Some(InputAction::Jump));
        assert_eq!(bindings.get_action(KeyCode::ControlLeft), Some(InputAction::Crouch));
        assert_eq!(bindings.get_action(KeyCode::V), Some(InputAction::ChangePov));
    }

    #[test]
    fn test_rebind_pov_key() {
        let mut bindings = KeyBindings::new();
        bindings.bind(KeyCode::ControlRight, InputAction::ChangePov);

        assert_eq!(bindings.get_action(KeyCode::V), None);
        assert_eq!(bindings.get_key(InputAction::ChangePov), Some(KeyCode::ControlRight));
    }

    #[test]
    fn test_rebinding_key_steals_it_from_old_action() {
        let mut bindings = KeyBindings::new();
        bindings.bind(KeyCode::Space, InputAction::Crouch);

        assert_eq!(bindings.get_key(InputAction::Jump), None);
        assert_eq!(bindings.get_key(InputAction::Crouch), Some(KeyCode::Space));
        assert_eq!(bindings.get_action(KeyCode::ControlLeft), None);
    }

    #[test]
    fn test_is_action_pressed() {
        let bindings = KeyBindings::new();
        let pressed: HashSet<KeyCode> = [KeyCode::W, KeyCode::ShiftLeft].into_iter().collect();

        assert!(bindings.is_action_pressed(InputAction::MoveForward, &pressed));
        assert!(bindings.is_action_pressed(InputAction::Run, &pressed));
        assert!(!bindings.is_action_pressed(InputAction::Jump, &pressed));
    }

    #[test]
    fn test_unbound_action_not_pressed() {
        let mut bindings = KeyBindings::new();
        bindings.unbind_action(InputAction::MoveForward);

        let pressed: HashSet<KeyCode> = [KeyCode::W].into_iter().collect();
        assert!(!bindings.is_action_pressed(InputAction::MoveForward, &pressed));
        assert_eq!(bindings.get_action(KeyCode::W), None);
    }
}
