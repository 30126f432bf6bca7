//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! Pure (no I/O), so it can be unit-tested against known snapshots.

use crate::core::GameSnapshot;
use crate::term::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{GemColor, SessionPhase, BOARD_COLS, BOARD_ROWS};

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

/// Renders the columns board centered in the viewport.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for typical terminal glyph aspect ratio.
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

    /// Render a snapshot into a fresh framebuffer.
    pub fn render(&self, snapshot: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);

        let board_px_w = (BOARD_COLS as u16) * self.cell_w;
        let board_px_h = (BOARD_ROWS as u16) * self.cell_h;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let well_bg = CellStyle {
            fg: Rgb::new(80, 80, 90),
            bg: Rgb::new(25, 25, 35),
            bold: false,
        };
        let border = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
        };

        fb.fill_rect(start_x + 1, start_y + 1, board_px_w, board_px_h, ' ', well_bg);
        self.draw_border(&mut fb, start_x, start_y, frame_w, frame_h, border);

        // Settled gems.
        for row in 0..BOARD_ROWS as usize {
            for col in 0..BOARD_COLS as usize {
                match snapshot.cell(row, col) {
                    Some(color) => {
                        self.draw_gem(&mut fb, start_x, start_y, row as u16, col as u16, color)
                    }
                    None => self.draw_empty(&mut fb, start_x, start_y, row as u16, col as u16),
                }
            }
        }

        // Falling piece. Rows above the top of the well are not drawn.
        if let Some(active) = snapshot.active {
            for (row, color) in active.cells() {
                if row >= 0 && row < BOARD_ROWS as i8 {
                    self.draw_gem(
                        &mut fb,
                        start_x,
                        start_y,
                        row as u16,
                        active.col as u16,
                        color,
                    );
                }
            }
        }

        self.draw_header(&mut fb, snapshot, start_x, start_y, frame_w);

        match snapshot.phase {
            SessionPhase::Paused => {
                self.draw_overlay_text(&mut fb, start_x, start_y, frame_w, frame_h, "PAUSED")
            }
            SessionPhase::GameOver => {
                self.draw_overlay_text(&mut fb, start_x, start_y, frame_w, frame_h, "GAME OVER")
            }
            SessionPhase::Running => {}
        }

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

    fn draw_empty(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, row: u16, col: u16) {
        let style = CellStyle {
            fg: Rgb::new(70, 70, 85),
            bg: Rgb::new(25, 25, 35),
            bold: false,
        };
        self.fill_cell_rect(fb, start_x, start_y, row, col, '·', style);
    }

    fn draw_gem(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        row: u16,
        col: u16,
        color: GemColor,
    ) {
        let style = CellStyle {
            fg: gem_rgb(color),
            bg: Rgb::new(25, 25, 35),
            bold: true,
        };
        self.fill_cell_rect(fb, start_x, start_y, row, col, '█', style);
    }

    fn fill_cell_rect(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        row: u16,
        col: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = start_x + 1 + col * self.cell_w;
        let py = start_y + 1 + row * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_header(
        &self,
        fb: &mut FrameBuffer,
        snapshot: &GameSnapshot,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let style = CellStyle {
            fg: Rgb::new(230, 230, 230),
            bg: Rgb::new(0, 0, 0),
            bold: true,
        };
        let line = format!("Score {}  Best {}", snapshot.score, snapshot.high_score);
        let text_w = line.chars().count() as u16;
        let x = start_x + frame_w.saturating_sub(text_w) / 2;
        fb.put_str(x, start_y.saturating_sub(1), &line, style);
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(0, 0, 0),
            bold: true,
        };
        fb.put_str(x, mid_y, text, style);
    }
}

/// Display color for a gem.
pub fn gem_rgb(color: GemColor) -> Rgb {
    match color {
        GemColor::Red => Rgb::new(220, 80, 80),
        GemColor::Green => Rgb::new(100, 220, 120),
        GemColor::Blue => Rgb::new(80, 140, 230),
        GemColor::Yellow => Rgb::new(240, 220, 80),
        GemColor::Purple => Rgb::new(190, 110, 220),
    }
}
