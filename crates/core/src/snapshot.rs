use crate::game_state::{Phase, Selection};
use crate::types::TileFace;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimersSnapshot {
    pub preview_ms: Option<u32>,
    pub hide_ms: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub episode_id: u32,
    pub seed: u64,
    pub rows: u16,
    pub columns: u16,
    pub faces: Vec<TileFace>,
    pub won: Vec<bool>,
    pub selection: Selection,
    pub phase: Phase,
    pub score: u32,
    pub errors: u32,
    pub ready: bool,
    pub previewing: bool,
    pub finished: bool,
    pub restart_enabled: bool,
    pub timers: TimersSnapshot,
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        self.ready && !self.finished
    }

    pub fn pairs(&self) -> usize {
        self.faces.len() / 2
    }

    /// Tiles currently showing their face
    pub fn face_up_count(&self) -> usize {
        self.faces.iter().filter(|f| f.is_face_up()).count()
    }
}
