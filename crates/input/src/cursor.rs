//! Keyboard cursor over the tile grid.

use crate::types::GameAction;

/// Row-major position on a `rows x columns` board.
///
/// Movement clamps at the edges instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardCursor {
    rows: u16,
    columns: u16,
    row: u16,
    column: u16,
}

impl BoardCursor {
    pub fn new(rows: u16, columns: u16) -> Self {
        Self {
            rows,
            columns,
            row: 0,
            column: 0,
        }
    }

    pub fn row(&self) -> u16 {
        self.row
    }

    pub fn column(&self) -> u16 {
        self.column
    }

    /// Tile index under the cursor
    pub fn index(&self) -> usize {
        self.row as usize * self.columns as usize + self.column as usize
    }

    /// Jump to a tile (e.g. after a mouse click). Out-of-range indices are ignored.
    pub fn set_index(&mut self, index: usize) {
        if self.columns == 0 || index >= self.rows as usize * self.columns as usize {
            return;
        }
        self.row = (index / self.columns as usize) as u16;
        self.column = (index % self.columns as usize) as u16;
    }

    pub fn move_left(&mut self) {
        self.column = self.column.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.column + 1 < self.columns {
            self.column += 1;
        }
    }

    pub fn move_up(&mut self) {
        self.row = self.row.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.row + 1 < self.rows {
            self.row += 1;
        }
    }

    /// Apply a cursor action; returns false for actions that are not movement.
    pub fn apply(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::CursorLeft => self.move_left(),
            GameAction::CursorRight => self.move_right(),
            GameAction::CursorUp => self.move_up(),
            GameAction::CursorDown => self.move_down(),
            GameAction::Select | GameAction::Restart => return false,
        }
        true
    }
}
