//! TUI Memory (workspace facade crate).
//!
//! Re-exports the game crates under one name and adds the application layer
//! shared by the binary and the integration tests: [`settings`] and [`logging`].

pub mod logging;
pub mod settings;

pub use tui_memory_core as core;
pub use tui_memory_input as input;
pub use tui_memory_term as term;
pub use tui_memory_types as types;
