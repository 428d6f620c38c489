//! Game state module - selection and match evaluation
//!
//! [`GameState`] owns the board, the tile faces, the current selection, the
//! counters and the ready flag for one game. Transitions are pure: they take the
//! current state and an event and return the next state together with the
//! [`Effect`]s the controller has to carry out (display updates, timer arms).
//!
//! ```text
//!            click            click (same face)
//!   Idle ───────────▶ OneSelected ───────────▶ Idle      score += 1
//!    ▲                    │
//!    │ hide timer         │ click (other face)
//!    └──── Locked ◀───────┘                              errors += 1
//! ```

use arrayvec::ArrayVec;

use crate::deck::Board;
use crate::error::GameError;
use crate::types::{FaceId, TileFace};

/// Observable turn state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Clicks are ignored (preview, start delay, or mismatch on display)
    Locked,
    /// Ready, nothing selected
    Idle,
    /// Ready, first tile of the turn revealed
    OneSelected,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Locked => "locked",
            Phase::Idle => "idle",
            Phase::OneSelected => "oneSelected",
        }
    }
}

/// Tiles chosen in the current turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Selection {
    first: Option<usize>,
    second: Option<usize>,
}

impl Selection {
    pub fn first(&self) -> Option<usize> {
        self.first
    }

    pub fn second(&self) -> Option<usize> {
        self.second
    }

    pub fn contains(&self, index: usize) -> bool {
        self.first == Some(index) || self.second == Some(index)
    }

    pub fn len(&self) -> usize {
        self.first.is_some() as usize + self.second.is_some() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.first.is_none() && self.second.is_none()
    }

    /// Selected indices in pick order
    pub fn indices(&self) -> impl Iterator<Item = usize> {
        self.first.into_iter().chain(self.second)
    }

    fn clear(&mut self) {
        self.first = None;
        self.second = None;
    }
}

/// Inputs to the state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    TileClicked(usize),
    HideTimerFired,
}

/// Side effects requested by a transition, in the order they must be applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Show the tile's face
    Reveal(usize),
    /// Turn the tile back over
    Hide(usize),
    /// Tile belongs to a matched pair
    Won(usize),
    ScoreChanged(u32),
    ErrorsChanged(u32),
    /// Start the mismatch hide delay
    ArmHideTimer,
    /// Clicks are accepted again
    Ready,
    /// Every pair has been found
    Finished,
}

/// Most effects a single transition can produce
pub const MAX_EFFECTS: usize = 6;

/// Result of a transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: GameState,
    pub effects: ArrayVec<Effect, MAX_EFFECTS>,
}

impl Transition {
    /// True when the event was ignored
    pub fn is_noop(&self) -> bool {
        self.effects.is_empty()
    }
}

/// Complete state of one game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    faces: Vec<TileFace>,
    won: Vec<bool>,
    selection: Selection,
    score: u32,
    errors: u32,
    ready: bool,
}

impl GameState {
    /// Fresh game on the given board: all tiles face-down, counters at zero, locked.
    pub fn new(board: Board) -> Self {
        let len = board.len();
        Self {
            board,
            faces: vec![TileFace::FaceDown; len],
            won: vec![false; len],
            selection: Selection::default(),
            score: 0,
            errors: 0,
            ready: false,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn len(&self) -> usize {
        self.board.len()
    }

    pub fn is_empty(&self) -> bool {
        self.board.is_empty()
    }

    pub fn faces(&self) -> &[TileFace] {
        &self.faces
    }

    pub fn face(&self, index: usize) -> Option<&TileFace> {
        self.faces.get(index)
    }

    pub fn is_won(&self, index: usize) -> bool {
        self.won.get(index).copied().unwrap_or(false)
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn errors(&self) -> u32 {
        self.errors
    }

    pub fn ready(&self) -> bool {
        self.ready
    }

    /// Number of pairs on the board
    pub fn pairs(&self) -> u32 {
        (self.board.len() / 2) as u32
    }

    pub fn finished(&self) -> bool {
        !self.board.is_empty() && self.score == self.pairs()
    }

    pub fn phase(&self) -> Phase {
        if !self.ready {
            Phase::Locked
        } else if self.selection.first.is_some() {
            Phase::OneSelected
        } else {
            Phase::Idle
        }
    }

    /// Stop accepting clicks (start delay)
    pub fn lock(&mut self) {
        self.ready = false;
    }

    /// Whether a click on `index` would be accepted
    pub fn is_selectable(&self, index: usize) -> bool {
        index < self.len()
            && self.ready
            && !self.selection.contains(index)
            && !self.won[index]
            && self.selection.second.is_none()
    }

    /// Apply any event
    pub fn step(&self, event: GameEvent) -> Result<Transition, GameError> {
        match event {
            GameEvent::TileClicked(index) => self.click(index),
            GameEvent::HideTimerFired => Ok(self.hide_timer_fired()),
        }
    }

    /// A tile was clicked.
    ///
    /// Out-of-range indices are an integration error. Clicks while locked, on a
    /// tile already selected, or on a won tile are ignored.
    pub fn click(&self, index: usize) -> Result<Transition, GameError> {
        if index >= self.len() {
            return Err(GameError::TileOutOfRange {
                index,
                len: self.len(),
            });
        }

        let mut next = self.clone();
        let mut effects = ArrayVec::new();

        if !self.is_selectable(index) {
            return Ok(Transition {
                state: next,
                effects,
            });
        }

        next.reveal(index);
        effects.push(Effect::Reveal(index));

        match self.selection.first {
            None => {
                next.selection.first = Some(index);
            }
            Some(first) => {
                next.selection.second = Some(index);

                if next.face_id(first) == next.face_id(index) {
                    next.won[first] = true;
                    next.won[index] = true;
                    next.score += 1;
                    next.selection.clear();
                    effects.push(Effect::Won(first));
                    effects.push(Effect::Won(index));
                    effects.push(Effect::ScoreChanged(next.score));
                    if next.finished() {
                        effects.push(Effect::Finished);
                    }
                } else {
                    next.errors += 1;
                    next.ready = false;
                    effects.push(Effect::ErrorsChanged(next.errors));
                    effects.push(Effect::ArmHideTimer);
                }
            }
        }

        Ok(Transition {
            state: next,
            effects,
        })
    }

    /// The hide delay elapsed.
    ///
    /// Turns every selected tile back over: the mismatched pair, or a lone first
    /// pick left open when the game was started again mid-turn. With nothing
    /// selected (the start delay) it only makes the board ready.
    pub fn hide_timer_fired(&self) -> Transition {
        let mut next = self.clone();
        let mut effects = ArrayVec::new();

        for index in self.selection.indices() {
            next.faces[index] = TileFace::FaceDown;
            effects.push(Effect::Hide(index));
        }
        next.selection.clear();

        if !next.ready {
            next.ready = true;
            effects.push(Effect::Ready);
        }

        Transition {
            state: next,
            effects,
        }
    }

    fn reveal(&mut self, index: usize) {
        if let Some(card) = self.board.card(index) {
            self.faces[index] = TileFace::FaceUp(card.clone());
        }
    }

    fn face_id(&self, index: usize) -> Option<&FaceId> {
        self.board.face(index)
    }
}
