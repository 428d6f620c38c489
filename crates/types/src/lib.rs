//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Board Layout
//!
//! The default table is the classic 4x5 layout:
//!
//! - **Rows**: 4
//! - **Columns**: 5
//! - **Pairs**: 10 (one per entry of [`DEFAULT_VOCABULARY`])
//!
//! # Game Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//! | `PREVIEW_MS` | 2000 | Face-up peek before the first game |
//! | `HIDE_DELAY_MS` | 1500 | Wait before a mismatched pair flips back |
//!
//! # Examples
//!
//! ```
//! use tui_memory_types::{Card, FaceId, TileFace};
//!
//! let fire = FaceId::new("Fire");
//! let card = Card::new(fire.clone());
//! assert_eq!(card.face(), &fire);
//!
//! let face = TileFace::FaceUp(card);
//! assert!(face.is_face_up());
//! ```

use std::fmt;
use std::sync::Arc;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Face-up peek shown once before the first game (2 seconds)
pub const PREVIEW_MS: u32 = 2000;

/// Delay before a mismatched pair is turned back over (1.5 seconds)
pub const HIDE_DELAY_MS: u32 = 1500;

/// Default number of board rows
pub const DEFAULT_ROWS: u16 = 4;

/// Default number of board columns
pub const DEFAULT_COLUMNS: u16 = 5;

/// Default symbol vocabulary (one pair per entry on the 4x5 board)
pub const DEFAULT_VOCABULARY: [&str; 10] = [
    "Darkness",
    "Double",
    "Fairy",
    "Fighting",
    "Fire",
    "Grass",
    "Lightning",
    "Metal",
    "Psychic",
    "Water",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout_holds_one_pair_per_face() {
        let tiles = DEFAULT_ROWS as usize * DEFAULT_COLUMNS as usize;
        assert_eq!(tiles % 2, 0);
        assert_eq!(tiles, DEFAULT_VOCABULARY.len() * 2);
    }

    #[test]
    fn timing_defaults() {
        assert_eq!(TICK_MS, 16);
        assert_eq!(PREVIEW_MS, 2000);
        assert_eq!(HIDE_DELAY_MS, 1500);
    }

    #[test]
    fn face_id_compares_by_name() {
        assert_eq!(FaceId::new("Fire"), FaceId::from("Fire"));
        assert_ne!(FaceId::new("Fire"), FaceId::new("Water"));
        assert_eq!(FaceId::new("Grass").to_string(), "Grass");
    }
}

/// Opaque identity of a printed symbol.
///
/// Two cards form a pair exactly when their `FaceId`s are equal. Cloning is cheap
/// (the name is reference counted), so boards can be rebuilt freely.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FaceId(Arc<str>);

impl FaceId {
    pub fn new(name: &str) -> Self {
        Self(Arc::from(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FaceId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for FaceId {
    fn from(value: String) -> Self {
        Self(Arc::from(value))
    }
}

impl fmt::Display for FaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The hidden data behind a tile
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Card {
    face: FaceId,
}

impl Card {
    pub fn new(face: FaceId) -> Self {
        Self { face }
    }

    pub fn face(&self) -> &FaceId {
        &self.face
    }
}

/// Display state of a tile slot
///
/// - **FaceDown**: the shared back is shown
/// - **FaceUp**: the card behind the tile is shown
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TileFace {
    FaceDown,
    FaceUp(Card),
}

impl TileFace {
    pub fn is_face_up(&self) -> bool {
        matches!(self, TileFace::FaceUp(_))
    }

    /// Face identity when shown, `None` when face-down
    pub fn face(&self) -> Option<&FaceId> {
        match self {
            TileFace::FaceDown => None,
            TileFace::FaceUp(card) => Some(card.face()),
        }
    }
}

/// Player actions produced by the input layer
///
/// Cursor actions only move the host's highlight. `Select` clicks the tile under
/// the cursor and `Restart` activates the restart control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move the cursor one column left
    CursorLeft,
    /// Move the cursor one column right
    CursorRight,
    /// Move the cursor one row up
    CursorUp,
    /// Move the cursor one row down
    CursorDown,
    /// Click the tile under the cursor
    Select,
    /// Activate the restart control
    Restart,
}
