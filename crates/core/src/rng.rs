//! RNG module - seeded randomness for deck shuffling
//!
//! Wraps a ChaCha20 stream seeded from a `u64`. The same seed reproduces the
//! same sequence of boards across runs and platforms.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Seeded RNG used by the deck builder
#[derive(Debug, Clone)]
pub struct DeckRng {
    seed: u64,
    rng: ChaCha20Rng,
}

impl DeckRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    /// Create an RNG seeded from the thread RNG.
    ///
    /// The chosen seed is kept so it can be logged and replayed.
    pub fn from_entropy() -> Self {
        Self::new(rand::rng().random())
    }

    /// Seed this RNG was created with
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate random value in range [0, max)
    ///
    /// `max` must be non-zero.
    pub fn next_range(&mut self, max: usize) -> usize {
        self.rng.random_range(0..max)
    }

    /// Uniform shuffle (Fisher-Yates)
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.rng);
    }

    /// Single left-to-right pass swapping each slot with any slot (itself included).
    ///
    /// Still a permutation, but not a uniform one: for n >= 3 some orderings are
    /// more likely than others.
    pub fn single_pass_swap<T>(&mut self, slice: &mut [T]) {
        let len = slice.len();
        for i in 0..len {
            let j = self.next_range(len);
            slice.swap(i, j);
        }
    }
}
