//! Terminal host for the memory game.
//!
//! A small, game-oriented rendering layer: the controller's display commands
//! land in a retained [`TableModel`], [`GameView`] paints that model into a
//! framebuffer, and [`TerminalRenderer`] flushes the framebuffer to the
//! terminal. It avoids widget/layout libraries on purpose.
//!
//! Goals:
//! - Keep `core` deterministic and free of terminal concerns
//! - Make the view pure so rendering and hit-testing are unit-testable
//! - Degrade gracefully when a face has no glyph (the tile is drawn blank)

pub mod assets;
pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod table;

pub use tui_memory_core as core;
pub use tui_memory_types as types;

pub use assets::{Glyph, GlyphResolver};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, BoardLayout, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use table::{TableModel, TileView};
