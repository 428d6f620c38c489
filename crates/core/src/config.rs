//! Board and game configuration.
//!
//! A [`BoardConfig`] can only be built through validation, so the rest of the core
//! may assume `rows * columns == 2 * vocabulary.len()` with distinct faces.

use std::collections::HashSet;

use crate::deck::ShuffleStrategy;
use crate::error::ConfigError;
use crate::types::{
    FaceId, DEFAULT_COLUMNS, DEFAULT_ROWS, DEFAULT_VOCABULARY, HIDE_DELAY_MS, PREVIEW_MS,
};

/// Validated board layout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    rows: u16,
    columns: u16,
    vocabulary: Vec<FaceId>,
}

impl BoardConfig {
    /// Validate a layout.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_memory_core::{BoardConfig, ConfigError};
    /// use tui_memory_core::types::FaceId;
    ///
    /// let ok = BoardConfig::new(2, 2, vec![FaceId::new("A"), FaceId::new("B")]);
    /// assert!(ok.is_ok());
    ///
    /// let odd = BoardConfig::new(3, 3, vec![FaceId::new("A")]);
    /// assert_eq!(odd, Err(ConfigError::OddTileCount { rows: 3, columns: 3 }));
    /// ```
    pub fn new(rows: u16, columns: u16, vocabulary: Vec<FaceId>) -> Result<Self, ConfigError> {
        let tiles = rows as usize * columns as usize;
        if tiles == 0 {
            return Err(ConfigError::EmptyBoard { rows, columns });
        }
        if tiles % 2 != 0 {
            return Err(ConfigError::OddTileCount { rows, columns });
        }
        if tiles != vocabulary.len() * 2 {
            return Err(ConfigError::VocabularyMismatch {
                pairs: tiles / 2,
                faces: vocabulary.len(),
            });
        }

        let mut seen = HashSet::with_capacity(vocabulary.len());
        for face in &vocabulary {
            if !seen.insert(face) {
                return Err(ConfigError::DuplicateFace(face.clone()));
            }
        }

        Ok(Self {
            rows,
            columns,
            vocabulary,
        })
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn columns(&self) -> u16 {
        self.columns
    }

    pub fn vocabulary(&self) -> &[FaceId] {
        &self.vocabulary
    }

    pub fn tile_count(&self) -> usize {
        self.rows as usize * self.columns as usize
    }

    pub fn pairs(&self) -> usize {
        self.vocabulary.len()
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            columns: DEFAULT_COLUMNS,
            vocabulary: DEFAULT_VOCABULARY.iter().copied().map(FaceId::new).collect(),
        }
    }
}

/// Everything the controller needs to run a game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub board: BoardConfig,
    /// Fixed seed for the deck; drawn from the thread RNG when `None`.
    pub seed: Option<u64>,
    pub shuffle: ShuffleStrategy,
    pub preview_ms: u32,
    pub hide_delay_ms: u32,
    /// Show the face-up peek again after a restart.
    pub preview_on_restart: bool,
}

impl GameConfig {
    pub fn new(board: BoardConfig) -> Self {
        Self {
            board,
            ..Self::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board: BoardConfig::default(),
            seed: None,
            shuffle: ShuffleStrategy::default(),
            preview_ms: PREVIEW_MS,
            hide_delay_ms: HIDE_DELAY_MS,
            preview_on_restart: false,
        }
    }
}
