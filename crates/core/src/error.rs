use thiserror::Error;

use crate::types::FaceId;

/// Board configuration rejected at setup.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("board of {rows}x{columns} has no tiles")]
    EmptyBoard { rows: u16, columns: u16 },
    #[error("board of {rows}x{columns} has an odd number of tiles")]
    OddTileCount { rows: u16, columns: u16 },
    #[error("board needs {pairs} faces but the vocabulary has {faces}")]
    VocabularyMismatch { pairs: usize, faces: usize },
    #[error("face {0} appears more than once in the vocabulary")]
    DuplicateFace(FaceId),
}

/// Integration error raised by the game core.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("tile {index} is out of range (board has {len} tiles)")]
    TileOutOfRange { index: usize, len: usize },
}
