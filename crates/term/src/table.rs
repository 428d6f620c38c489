//! Retained display model the controller's commands are applied to.

use crate::assets::Glyph;
use crate::core::{BoardView, Status, TileImage};

/// One tile as the player sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileView {
    pub image: TileImage<Glyph>,
    pub enabled: bool,
}

impl Default for TileView {
    fn default() -> Self {
        Self {
            image: TileImage::Blank,
            enabled: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableModel {
    rows: u16,
    columns: u16,
    tiles: Vec<TileView>,
    score: u32,
    errors: u32,
    restart_enabled: bool,
    status: Option<Status>,
}

impl TableModel {
    pub fn new(rows: u16, columns: u16) -> Self {
        Self {
            rows,
            columns,
            tiles: vec![TileView::default(); rows as usize * columns as usize],
            score: 0,
            errors: 0,
            restart_enabled: false,
            status: None,
        }
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn columns(&self) -> u16 {
        self.columns
    }

    pub fn tiles(&self) -> &[TileView] {
        &self.tiles
    }

    pub fn tile(&self, index: usize) -> Option<&TileView> {
        self.tiles.get(index)
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn errors(&self) -> u32 {
        self.errors
    }

    pub fn restart_enabled(&self) -> bool {
        self.restart_enabled
    }

    pub fn status(&self) -> Option<Status> {
        self.status
    }
}

impl BoardView for TableModel {
    type Image = Glyph;

    fn set_face(&mut self, tile: usize, image: TileImage<Glyph>) {
        if let Some(view) = self.tiles.get_mut(tile) {
            view.image = image;
        }
    }

    fn set_tile_enabled(&mut self, tile: usize, enabled: bool) {
        if let Some(view) = self.tiles.get_mut(tile) {
            view.enabled = enabled;
        }
    }

    fn set_score_text(&mut self, score: u32) {
        self.score = score;
    }

    fn set_error_text(&mut self, errors: u32) {
        self.errors = errors;
    }

    fn set_restart_enabled(&mut self, enabled: bool) {
        self.restart_enabled = enabled;
    }

    fn set_status(&mut self, status: Status) {
        self.status = Some(status);
    }
}
