//! Terminal input module.
//!
//! Maps `crossterm` key and mouse events into [`crate::types::GameAction`]s and
//! keeps the keyboard cursor used to pick tiles without a mouse. Nothing here
//! knows about the game rules; the host turns a `Select` into a tile click.

pub mod cursor;
pub mod map;

pub use tui_memory_types as types;

pub use cursor::BoardCursor;
pub use map::{handle_key_event, handle_mouse_event, should_quit};
