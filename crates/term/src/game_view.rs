//! GameView: maps a `core::GameState` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameState;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::Coord;

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

/// Renders the board, cursor, side panel, and win overlay.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 4x2 keeps cells roughly square with typical terminal glyphs.
        Self {
            cell_w: 4,
            cell_h: 2,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render the session into an existing framebuffer.
    ///
    /// The framebuffer is resized to the viewport and fully overwritten, so
    /// callers can reuse one buffer across frames.
    pub fn render_into(&self, state: &GameState, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let grid = state.grid();
        let board_px_w = grid.cols() as u16 * self.cell_w;
        let board_px_h = grid.rows() as u16 * self.cell_h;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let border = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        if state.won() {
            // The solved board is replaced by the win banner; there are no
            // toggleable cells left to show.
            self.draw_win_overlay(fb, start_x, start_y, frame_w, frame_h);
        } else {
            for row in 0..grid.rows() {
                for col in 0..grid.cols() {
                    let coord = Coord::new(row, col);
                    let lit = grid.is_lit(coord);
                    let is_cursor = state.cursor() == coord;
                    self.draw_grid_cell(fb, start_x, start_y, coord, lit, is_cursor);
                }
            }
        }

        self.draw_side_panel(fb, state, viewport, start_x, start_y, frame_w);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, state: &GameState, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(state, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_grid_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        coord: Coord,
        lit: bool,
        is_cursor: bool,
    ) {
        let (ch, style) = if lit {
            (
                '█',
                CellStyle {
                    fg: Rgb::new(240, 220, 80),
                    bg: Rgb::new(60, 50, 10),
                    bold: true,
                    dim: false,
                },
            )
        } else {
            (
                '·',
                CellStyle {
                    fg: Rgb::new(90, 90, 100),
                    bg: Rgb::new(30, 30, 40),
                    bold: false,
                    dim: true,
                },
            )
        };

        let px = start_x + 1 + coord.col as u16 * self.cell_w;
        let py = start_y + 1 + coord.row as u16 * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);

        if is_cursor {
            let marker = CellStyle {
                fg: Rgb::new(255, 255, 255),
                bg: style.bg,
                bold: true,
                dim: false,
            };
            fb.put_char(px, py, '[', marker);
            fb.put_char(px + self.cell_w - 1, py, ']', marker);
        }
    }

    fn draw_win_overlay(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
    ) {
        let bg = CellStyle {
            fg: Rgb::new(30, 60, 30),
            bg: Rgb::new(20, 40, 20),
            bold: false,
            dim: false,
        };
        fb.fill_rect(
            start_x + 1,
            start_y + 1,
            frame_w.saturating_sub(2),
            frame_h.saturating_sub(2),
            ' ',
            bg,
        );

        let text = "YOU WIN";
        let style = CellStyle {
            fg: Rgb::new(120, 240, 120),
            bg: Rgb::new(20, 40, 20),
            bold: true,
            dim: false,
        };
        let text_w = text.chars().count() as u16;
        let x = start_x + frame_w.saturating_sub(text_w) / 2;
        let mid_y = start_y + frame_h / 2;
        fb.put_str(x, mid_y, text, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        state: &GameState,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < 12 {
            return;
        }

        let label = CellStyle {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        let value = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };

        let mut y = start_y;
        fb.put_str(panel_x, y, "MOVES", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, state.moves(), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "LIT", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, state.grid().lit_count() as u32, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "SIZE", label);
        y = y.saturating_add(1);
        let after_rows = fb.put_u32(panel_x, y, state.grid().rows() as u32, value);
        fb.put_char(after_rows, y, 'x', value);
        fb.put_u32(after_rows + 1, y, state.grid().cols() as u32, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "SEED", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, state.seed(), value);
        y = y.saturating_add(2);

        let dim = CellStyle { dim: true, ..value };
        fb.put_str(panel_x, y, "KEYS", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, "move: hjkl", dim);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, "flip: space", dim);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, "new: r", dim);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, "quit: q", dim);
    }
}
