//! Deck module - paired card multiset and board ordering
//!
//! A [`Board`] is an ordered run of cards in which every face of the vocabulary
//! appears exactly twice. Boards are never mutated in place: shuffling returns a
//! new board, and a restart replaces the old one.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::rng::DeckRng;
use crate::types::{Card, FaceId};

/// Ordered cards for one game
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cards: Vec<Card>,
}

impl Board {
    /// Wrap a fixed card order (scripted layouts and tests).
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Shorthand for a board built from face names in the given order.
    pub fn from_faces<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        Self::from_cards(
            names
                .into_iter()
                .map(|name| Card::new(FaceId::new(name)))
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn card(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    pub fn face(&self, index: usize) -> Option<&FaceId> {
        self.card(index).map(Card::face)
    }

    /// Number of cards per face
    pub fn face_counts(&self) -> HashMap<FaceId, usize> {
        let mut counts = HashMap::new();
        for card in &self.cards {
            *counts.entry(card.face().clone()).or_insert(0) += 1;
        }
        counts
    }

    /// True when every face appears exactly twice
    pub fn is_paired(&self) -> bool {
        self.face_counts().values().all(|&n| n == 2)
    }
}

/// Two back-to-back copies of the vocabulary, in caller order.
///
/// # Examples
///
/// ```
/// use tui_memory_core::deck::build;
/// use tui_memory_core::types::FaceId;
///
/// let board = build(&[FaceId::new("A"), FaceId::new("B")]);
/// let names: Vec<&str> = board.cards().iter().map(|c| c.face().as_str()).collect();
/// assert_eq!(names, ["A", "B", "A", "B"]);
/// ```
pub fn build(vocabulary: &[FaceId]) -> Board {
    Board::from_cards(
        vocabulary
            .iter()
            .chain(vocabulary.iter())
            .cloned()
            .map(Card::new)
            .collect(),
    )
}

/// How a board is reordered
///
/// Settings files and the command line name these in kebab-case
/// (`fisher-yates`, `single-pass-swap`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum ShuffleStrategy {
    /// Uniform permutation
    #[default]
    #[serde(alias = "uniform")]
    #[cfg_attr(feature = "clap", value(alias = "uniform"))]
    FisherYates,
    /// One pass swapping each slot with a random slot (biased)
    #[serde(alias = "legacy")]
    #[cfg_attr(feature = "clap", value(alias = "legacy"))]
    SinglePassSwap,
}

impl ShuffleStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShuffleStrategy::FisherYates => "fisher-yates",
            ShuffleStrategy::SinglePassSwap => "single-pass-swap",
        }
    }
}

/// Builds and reorders boards from a seeded RNG
#[derive(Debug, Clone)]
pub struct DeckBuilder {
    rng: DeckRng,
    strategy: ShuffleStrategy,
}

impl DeckBuilder {
    pub fn new(seed: u64, strategy: ShuffleStrategy) -> Self {
        Self {
            rng: DeckRng::new(seed),
            strategy,
        }
    }

    pub fn from_entropy(strategy: ShuffleStrategy) -> Self {
        Self {
            rng: DeckRng::from_entropy(),
            strategy,
        }
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn strategy(&self) -> ShuffleStrategy {
        self.strategy
    }

    pub fn build(&self, vocabulary: &[FaceId]) -> Board {
        build(vocabulary)
    }

    /// New ordering of the same cards
    pub fn shuffle(&mut self, board: &Board) -> Board {
        let mut cards = board.cards.clone();
        match self.strategy {
            ShuffleStrategy::FisherYates => self.rng.shuffle(&mut cards),
            ShuffleStrategy::SinglePassSwap => self.rng.single_pass_swap(&mut cards),
        }
        Board::from_cards(cards)
    }

    /// Build and shuffle in one step
    pub fn deal(&mut self, vocabulary: &[FaceId]) -> Board {
        let board = self.build(vocabulary);
        self.shuffle(&board)
    }
}
