//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the rules of the memory game: building and shuffling the
//! deck, the click state machine, the two delay timers and the controller that
//! ties them together. It has **no dependencies** on a terminal or any other UI:
//! the controller emits [`DisplayCommand`]s and asks an injected
//! [`AssetResolver`] for images, and the host decides what to do with both.
//!
//! - **Deterministic**: a fixed seed deals and reshuffles identical boards
//! - **Testable**: transitions are pure values; timers advance only on `tick`
//! - **Portable**: any host that can apply a [`BoardView`] can run a game
//!
//! # Module Structure
//!
//! - [`config`]: board dimensions, face vocabulary and timing options
//! - [`deck`]: board construction and shuffle strategies
//! - [`rng`]: seeded ChaCha20 generator behind the deck
//! - [`game_state`]: selection, matching, score and readiness
//! - [`timer`]: cancellable one-shot countdowns (preview and hide)
//! - [`controller`]: lifecycle (preview, start, restart) and effect dispatch
//! - [`display`]: host-facing commands and image resolution
//! - [`snapshot`]: read-only view of a running game
//!
//! # Game Rules
//!
//! - Every face appears on exactly two tiles.
//! - Two tiles are a match when their faces are equal; position does not matter.
//! - A match scores one point and both tiles stay face-up for the rest of the game.
//! - A mismatch counts one error and both tiles turn back after the hide delay.
//! - The board is locked while a mismatched pair is on display.
//!
//! # Example
//!
//! ```
//! use tui_memory_core::{AssetResolver, BoardConfig, GameConfig, GameController};
//! use tui_memory_core::types::{FaceId, TICK_MS};
//!
//! struct Names;
//!
//! impl AssetResolver for Names {
//!     type Image = String;
//!
//!     fn resolve_face(&self, face: &FaceId) -> Option<String> {
//!         Some(face.to_string())
//!     }
//!
//!     fn back_image(&self) -> Option<String> {
//!         Some("?".to_string())
//!     }
//! }
//!
//! let config = GameConfig::new(BoardConfig::default()).with_seed(12345);
//! let mut game = GameController::new(config, Names);
//! game.launch();
//!
//! // Run the preview and the start delay.
//! while !game.state().ready() {
//!     game.tick(TICK_MS);
//! }
//!
//! game.handle_tile_click(0).unwrap();
//! assert_eq!(game.state().selection().first(), Some(0));
//! ```
//!
//! # Timing
//!
//! - **Tick Rate**: 16ms
//! - **Preview**: 2000ms face-up peek before the first game
//! - **Hide Delay**: 1500ms before a mismatched pair turns back, also used as the
//!   start delay after the preview and after every restart
//!
//! Call [`GameController::tick`] every frame with elapsed time.

pub mod config;
pub mod controller;
pub mod deck;
pub mod display;
pub mod error;
pub mod game_state;
pub mod rng;
pub mod snapshot;
pub mod timer;

pub use tui_memory_types as types;

// Re-export commonly used types for convenience
pub use config::{BoardConfig, GameConfig};
pub use controller::GameController;
pub use deck::{Board, DeckBuilder, ShuffleStrategy};
pub use display::{AssetResolver, BoardView, DisplayCommand, Status, TileImage};
pub use error::{ConfigError, GameError};
pub use game_state::{Effect, GameEvent, GameState, Phase, Selection, Transition};
pub use rng::DeckRng;
pub use snapshot::{GameSnapshot, TimersSnapshot};
pub use timer::{DelayTimer, TimerKind, Timers};
