//! GameView: projects engine state into a terminal framebuffer.
//!
//! This module is pure (no I/O) and unit-testable. It draws the bordered
//! playfield, the locked and falling cells, the next-piece preview, the
//! score line, and the game-over banner.

use blockfall_core::{Game, Piece};
use blockfall_types::EMPTY;

use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};

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

/// Render palette indexed by cell color (index 0 is the empty field).
const PALETTE: [Rgb; 7] = [
    Rgb::new(0, 0, 0),
    Rgb::new(150, 50, 200),
    Rgb::new(90, 180, 180),
    Rgb::new(100, 50, 20),
    Rgb::new(90, 140, 20),
    Rgb::new(200, 50, 20),
    Rgb::new(200, 50, 130),
];

fn color_style(color: u8) -> CellStyle {
    CellStyle {
        fg: PALETTE[color as usize % PALETTE.len()],
        bg: PALETTE[0],
        bold: false,
    }
}

/// A lightweight terminal view of the game.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for the typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    ///
    /// Callers can reuse one framebuffer across frames.
    pub fn render_into(&self, game: &Game, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let rows = game.board().rows() as u16;
        let cols = game.board().cols() as u16;
        let field_w = cols * self.cell_w;
        let field_h = rows * self.cell_h;
        let frame_w = field_w + 2;
        let frame_h = field_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        self.draw_border(fb, start_x, start_y, frame_w, frame_h);

        // Locked cells.
        for y in 0..rows {
            for x in 0..cols {
                let cell = game.board().get(x as i8, y as i8).unwrap_or(EMPTY);
                if cell != EMPTY {
                    self.fill_board_cell(fb, start_x, start_y, x, y, color_style(cell));
                }
            }
        }

        // The falling piece, clipped to the field.
        self.draw_piece_cells(fb, start_x, start_y, rows, cols, game.current());

        // Side panel: preview box and score.
        let panel_x = start_x + frame_w + 2;
        let label = CellStyle::default();
        fb.put_str(panel_x, start_y + 1, "Next", label);
        self.draw_preview(fb, panel_x, start_y + 2, game.next());
        fb.put_str(
            panel_x,
            start_y + 8,
            &format!("Score: {}", game.score()),
            label,
        );

        if !game.is_active() {
            let banner = " GAME OVER ";
            let bx = start_x + frame_w.saturating_sub(banner.len() as u16) / 2;
            let by = start_y + frame_h / 2;
            let style = CellStyle {
                fg: Rgb::new(255, 60, 60),
                bg: Rgb::new(0, 0, 0),
                bold: true,
            };
            fb.put_str(bx, by, banner, style);
        }
    }

    /// Convenience wrapper that allocates a fresh framebuffer.
    pub fn render(&self, game: &Game, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(game, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        let style = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
        };
        for dx in 1..w.saturating_sub(1) {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h.saturating_sub(1) {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);
    }

    fn fill_board_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        x: u16,
        y: u16,
        style: CellStyle,
    ) {
        fb.fill_rect(
            start_x + 1 + x * self.cell_w,
            start_y + 1 + y * self.cell_h,
            self.cell_w,
            self.cell_h,
            '█',
            style,
        );
    }

    fn draw_piece_cells(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        rows: u16,
        cols: u16,
        piece: &Piece,
    ) {
        let style = color_style(piece.color);
        for &(dx, dy) in piece.cells() {
            let x = piece.x as i16 + dx as i16;
            let y = piece.y as i16 + dy as i16;
            if x >= 0 && x < cols as i16 && y >= 0 && y < rows as i16 {
                self.fill_board_cell(fb, start_x, start_y, x as u16, y as u16, style);
            }
        }
    }

    fn draw_preview(&self, fb: &mut FrameBuffer, x: u16, y: u16, piece: &Piece) {
        let style = color_style(piece.color);
        for &(dx, dy) in piece.cells() {
            fb.fill_rect(
                x + dx as u16 * self.cell_w,
                y + dy as u16 * self.cell_h,
                self.cell_w,
                self.cell_h,
                '█',
                style,
            );
        }
    }
}
