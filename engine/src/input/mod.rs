//! Input Module
//!
//! Platform-agnostic input handling that produces the per-tick
//! [`InputSnapshot`] the locomotion controller polls. Nothing here is read by
//! the controller except the snapshot itself.
//!
//! # Example
//!
//! ```rust,ignore
//! use stride_engine::input::{InputManager, KeyCode};
//!
//! let mut input = InputManager::new();
//!
//! // From the event loop
//! input.handle_key(KeyCode::W, true);
//! input.handle_mouse_motion(12.0, -3.0);
//!
//! // Once per frame
//! let snapshot = input.snapshot();
//! assert_eq!(snapshot.move_axis.y, 1.0);
//! ```

pub mod bindings;
pub mod keyboard;
pub mod manager;
pub mod mouse_state;
pub mod snapshot;

pub use bindings::{InputAction, KeyBindings};
pub use keyboard::KeyCode;
pub use manager::InputManager;
pub use mouse_state::{CursorLock, LookState};
pub use snapshot::InputSnapshot;
