//! GameView: maps a [`TableModel`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). Rendering and mouse hit-testing share one
//! layout computation, so a click always lands on the tile that was drawn there.

use crate::core::{Status, TileImage};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::table::{TableModel, TileView};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Width reserved right of the board for counters and key hints.
const PANEL_W: u16 = 22;
const PANEL_GAP: u16 = 2;

const TABLE_BG: Rgb = Rgb::new(20, 40, 30);
const TILE_BG: Rgb = Rgb::new(30, 30, 40);

/// Where the board frame and its tiles sit in the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    pub frame_x: u16,
    pub frame_y: u16,
    pub frame_w: u16,
    pub frame_h: u16,
    /// Top-left of tile 0
    pub tiles_x: u16,
    pub tiles_y: u16,
    pub panel_x: Option<u16>,
}

/// A lightweight terminal renderer for the memory table.
pub struct GameView {
    tile_w: u16,
    tile_h: u16,
    gap_x: u16,
    gap_y: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        Self::new(7, 3)
    }
}

impl GameView {
    /// Tiles smaller than 3x3 cannot hold a border and a glyph; sizes are clamped.
    pub fn new(tile_w: u16, tile_h: u16) -> Self {
        Self {
            tile_w: tile_w.max(3),
            tile_h: tile_h.max(3),
            gap_x: 1,
            gap_y: 0,
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    pub fn with_gaps(mut self, gap_x: u16, gap_y: u16) -> Self {
        self.gap_x = gap_x;
        self.gap_y = gap_y;
        self
    }

    pub fn layout(&self, rows: u16, columns: u16, viewport: Viewport) -> BoardLayout {
        // Boards wider than u16 cells saturate; they are clipped when drawn.
        let board_w = columns
            .saturating_mul(self.tile_w)
            .saturating_add(columns.saturating_sub(1).saturating_mul(self.gap_x));
        let board_h = rows
            .saturating_mul(self.tile_h)
            .saturating_add(rows.saturating_sub(1).saturating_mul(self.gap_y));
        let frame_w = board_w.saturating_add(4);
        let frame_h = board_h.saturating_add(2);

        let with_panel = frame_w.saturating_add(PANEL_GAP + PANEL_W);
        let (frame_x, panel_x) = if viewport.width >= with_panel {
            let x = (viewport.width - with_panel) / 2;
            (x, Some(x + frame_w + PANEL_GAP))
        } else {
            (viewport.width.saturating_sub(frame_w) / 2, None)
        };
        let frame_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };

        BoardLayout {
            frame_x,
            frame_y,
            frame_w,
            frame_h,
            tiles_x: frame_x.saturating_add(2),
            tiles_y: frame_y.saturating_add(1),
            panel_x,
        }
    }

    /// Tile index under terminal cell `(x, y)`, if any. Gaps and borders miss.
    pub fn tile_at(&self, rows: u16, columns: u16, viewport: Viewport, x: u16, y: u16) -> Option<usize> {
        let layout = self.layout(rows, columns, viewport);
        let rx = x.checked_sub(layout.tiles_x)?;
        let ry = y.checked_sub(layout.tiles_y)?;

        let pitch_x = self.tile_w.saturating_add(self.gap_x);
        let pitch_y = self.tile_h.saturating_add(self.gap_y);
        if rx % pitch_x >= self.tile_w || ry % pitch_y >= self.tile_h {
            return None;
        }

        let column = rx / pitch_x;
        let row = ry / pitch_y;
        if column >= columns || row >= rows {
            return None;
        }
        Some(row as usize * columns as usize + column as usize)
    }

    /// Render the table into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(
        &self,
        model: &TableModel,
        cursor: Option<usize>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let layout = self.layout(model.rows(), model.columns(), viewport);
        let table = CellStyle::fg(Rgb::new(80, 80, 90)).on(TABLE_BG);
        let border = CellStyle::fg(Rgb::new(200, 200, 200));

        fb.fill_rect(
            layout.frame_x.saturating_add(1),
            layout.frame_y.saturating_add(1),
            layout.frame_w.saturating_sub(2),
            layout.frame_h.saturating_sub(2),
            ' ',
            table,
        );
        fb.draw_box(layout.frame_x, layout.frame_y, layout.frame_w, layout.frame_h, border);

        let pitch_x = self.tile_w.saturating_add(self.gap_x);
        let pitch_y = self.tile_h.saturating_add(self.gap_y);
        for (index, tile) in model.tiles().iter().enumerate() {
            let row = (index / model.columns().max(1) as usize) as u16;
            let column = (index % model.columns().max(1) as usize) as u16;
            let x = layout.tiles_x.saturating_add(column.saturating_mul(pitch_x));
            let y = layout.tiles_y.saturating_add(row.saturating_mul(pitch_y));
            if x >= viewport.width || y >= viewport.height {
                continue;
            }
            self.draw_tile(fb, x, y, tile, cursor == Some(index));
        }

        if let Some(panel_x) = layout.panel_x {
            self.draw_side_panel(fb, model, viewport, panel_x, layout.frame_y);
        }

        if let Some(Status::Finished { .. }) = model.status() {
            self.draw_overlay_text(fb, &layout, "ALL PAIRS FOUND");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, model: &TableModel, cursor: Option<usize>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(model, cursor, viewport, &mut fb);
        fb
    }

    fn draw_tile(&self, fb: &mut FrameBuffer, x: u16, y: u16, tile: &TileView, focused: bool) {
        let border = if focused {
            CellStyle::fg(Rgb::new(250, 210, 60)).on(TABLE_BG).bold()
        } else if !tile.enabled {
            // Matched tiles stay face-up but can no longer be picked.
            CellStyle::fg(Rgb::new(90, 170, 100)).on(TABLE_BG).dim()
        } else {
            CellStyle::fg(Rgb::new(160, 160, 170)).on(TABLE_BG)
        };

        let inner_w = self.tile_w - 2;
        let inner_h = self.tile_h - 2;
        let bg = CellStyle::fg(Rgb::new(220, 220, 220)).on(TILE_BG);
        fb.fill_rect(x.saturating_add(1), y.saturating_add(1), inner_w, inner_h, ' ', bg);
        fb.draw_box(x, y, self.tile_w, self.tile_h, border);

        let mid_y = y.saturating_add(self.tile_h / 2);
        match &tile.image {
            TileImage::Front(glyph) => {
                let style = CellStyle::fg(glyph.color).on(TILE_BG).bold();
                fb.put_str_centered(x.saturating_add(1), mid_y, inner_w, &glyph.text, style);
            }
            TileImage::Back(glyph) => {
                let ch = glyph.text.chars().next().unwrap_or(' ');
                fb.fill_rect(
                    x.saturating_add(1),
                    y.saturating_add(1),
                    inner_w,
                    inner_h,
                    ch,
                    CellStyle::fg(glyph.color).on(TILE_BG),
                );
            }
            TileImage::Blank => {}
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        model: &TableModel,
        viewport: Viewport,
        panel_x: u16,
        start_y: u16,
    ) {
        let label = CellStyle::fg(Rgb::new(220, 220, 220)).bold();
        let value = CellStyle::fg(Rgb::new(200, 200, 200));
        let hint = value.dim();

        let mut y = start_y;
        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        let end = fb.put_u32(panel_x, y, model.score(), value);
        let end = fb.put_str(end, y, "/", hint);
        fb.put_u32(end, y, (model.tiles().len() / 2) as u32, hint);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "ERRORS", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, model.errors(), value);
        y = y.saturating_add(2);

        if let Some(status) = model.status() {
            let style = match status {
                Status::Mismatch => CellStyle::fg(Rgb::new(230, 100, 90)).bold(),
                Status::Finished { .. } => CellStyle::fg(Rgb::new(120, 220, 120)).bold(),
                _ => value,
            };
            fb.put_str(panel_x, y, status_text(status), style);
        }
        y = y.saturating_add(2);

        if y >= viewport.height {
            return;
        }
        let restart = if model.restart_enabled() { value } else { hint };
        fb.put_str(panel_x, y, "[R] restart", restart);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, "[Q] quit", value);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, "arrows + space", hint);
    }

    fn draw_overlay_text(&self, fb: &mut FrameBuffer, layout: &BoardLayout, text: &str) {
        let mid_y = layout.frame_y.saturating_add(layout.frame_h / 2);
        let style = CellStyle::fg(Rgb::new(255, 255, 255)).bold();
        fb.put_str_centered(layout.frame_x, mid_y, layout.frame_w, text, style);
    }
}

fn status_text(status: Status) -> &'static str {
    match status {
        Status::Memorize => "MEMORIZE!",
        Status::GetReady => "GET READY",
        Status::FindPairs => "FIND THE PAIRS",
        Status::Mismatch => "NO MATCH",
        Status::Finished { .. } => "SOLVED",
    }
}
