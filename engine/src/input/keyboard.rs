//! Keyboard key codes
//!
//! Generic key codes used by the bindings table, independent of the
//! windowing system. [`KeyCode::from_winit`] bridges winit's physical keys.

/// Keys the locomotion bindings can refer to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    // Movement keys
    W,
    A,
    S,
    D,
    Space,
    ShiftLeft,
    ShiftRight,
    ControlLeft,
    ControlRight,

    // Camera keys
    V,

    /// Catch-all for unhandled keys
    Unknown,
}

impl KeyCode {
    /// Map a winit physical key code onto the engine key set.
    ///
    /// Keys the engine has no use for map to [`KeyCode::Unknown`].
    pub fn from_winit(key: winit::keyboard::KeyCode) -> Self {
        use winit::keyboard::KeyCode as W;

        match key {
            W::KeyW => KeyCode::W,
            W::KeyA => KeyCode::A,
            W::KeyS => KeyCode::S,
            W::KeyD => KeyCode::D,
            W::Space => KeyCode::Space,
            W::ShiftLeft => KeyCode::ShiftLeft,
            W::ShiftRight => KeyCode::ShiftRight,
            W::ControlLeft => KeyCode::ControlLeft,
            W::ControlRight => KeyCode::ControlRight,
            W::KeyV => KeyCode::V,
            _ => KeyCode::Unknown,
        }
    }
}
