//! DuelView: maps a `DuelSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::snapshot::{BoardSnapshot, DuelSnapshot, OutcomeSnapshot};
use crate::term::fb::{FrameBuffer, Rgb, TermCell};

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

/// Columns of padding between the two board frames
const BOARD_GAP: u16 = 6;

/// Rows reserved above the frames for the player labels
const HEADER_ROWS: u16 = 2;

/// Side-by-side renderer for the two boards.
pub struct DuelView {
    /// Board cell width in terminal columns (2 compensates glyph aspect)
    cell_w: u16,
}

impl Default for DuelView {
    fn default() -> Self {
        Self { cell_w: 2 }
    }
}

impl DuelView {
    /// Render the duel into a fresh framebuffer.
    pub fn render(&self, snapshot: &DuelSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);

        let frame_w = self.frame_width(&snapshot.boards[0]);
        let total_w = frame_w + BOARD_GAP + self.frame_width(&snapshot.boards[1]);
        let left_x = viewport.width.saturating_sub(total_w) / 2;
        let right_x = left_x + frame_w + BOARD_GAP;

        self.render_board(&mut fb, &snapshot.boards[0], "PLAYER ONE", left_x, HEADER_ROWS);
        self.render_board(&mut fb, &snapshot.boards[1], "PLAYER TWO", right_x, HEADER_ROWS);

        let banner_y = HEADER_ROWS + snapshot.boards[0].rows as u16 + 3;
        match snapshot.outcome {
            Some(outcome) => {
                let text = match outcome {
                    OutcomeSnapshot::WinnerOne => "PLAYER ONE WINS - PRESS R TO RESTART",
                    OutcomeSnapshot::WinnerTwo => "PLAYER TWO WINS - PRESS R TO RESTART",
                    OutcomeSnapshot::Draw => "DRAW - PRESS R TO RESTART",
                };
                self.put_centered(&mut fb, banner_y, text, Rgb::new(250, 220, 90), true);
            }
            None => {
                let help = "P1 arrows/space/enter   P2 a d s q e   esc quits";
                self.put_centered(&mut fb, banner_y, help, Rgb::new(120, 120, 130), false);
            }
        }

        fb
    }

    fn frame_width(&self, board: &BoardSnapshot) -> u16 {
        board.cols as u16 * self.cell_w + 2
    }

    fn render_board(
        &self,
        fb: &mut FrameBuffer,
        board: &BoardSnapshot,
        label: &str,
        ox: u16,
        oy: u16,
    ) {
        let frame_w = self.frame_width(board);
        let frame_h = board.rows as u16 + 2;
        let border_fg = Rgb::new(90, 90, 100);
        let bg = Rgb::new(16, 16, 22);

        let label_fg = if board.game_over {
            Rgb::new(220, 70, 70)
        } else {
            Rgb::new(200, 200, 210)
        };
        fb.put_str(ox + 1, oy.saturating_sub(1), label, label_fg, Rgb::default());
        if board.game_over {
            fb.put_str(
                ox + 1 + label.len() as u16 + 1,
                oy.saturating_sub(1),
                "(game over)",
                label_fg,
                Rgb::default(),
            );
        }

        self.draw_frame(fb, ox, oy, frame_w, frame_h, border_fg);

        // Landed cells.
        for row in 0..board.rows {
            for col in 0..board.cols {
                let code = board.cell(row, col);
                let cell_bg = if code == 0 { bg } else { material_color(code) };
                self.draw_cell(fb, ox, oy, row as u16, col as u16, cell_bg);
            }
        }

        // Falling cells overlay the grid.
        for cell in &board.falling {
            if cell.row < 0 || cell.col < 0 {
                continue;
            }
            self.draw_cell(
                fb,
                ox,
                oy,
                cell.row as u16,
                cell.col as u16,
                material_color(cell.material),
            );
        }
    }

    fn draw_cell(&self, fb: &mut FrameBuffer, ox: u16, oy: u16, row: u16, col: u16, bg: Rgb) {
        let x = ox + 1 + col * self.cell_w;
        let y = oy + 1 + row;
        fb.fill_rect(x, y, self.cell_w, 1, TermCell::new(' ', Rgb::default(), bg));
    }

    fn draw_frame(&self, fb: &mut FrameBuffer, ox: u16, oy: u16, w: u16, h: u16, fg: Rgb) {
        let bg = Rgb::default();
        for x in 1..w.saturating_sub(1) {
            fb.put(ox + x, oy, TermCell::new('─', fg, bg));
            fb.put(ox + x, oy + h - 1, TermCell::new('─', fg, bg));
        }
        for y in 1..h.saturating_sub(1) {
            fb.put(ox, oy + y, TermCell::new('│', fg, bg));
            fb.put(ox + w - 1, oy + y, TermCell::new('│', fg, bg));
        }
        fb.put(ox, oy, TermCell::new('┌', fg, bg));
        fb.put(ox + w - 1, oy, TermCell::new('┐', fg, bg));
        fb.put(ox, oy + h - 1, TermCell::new('└', fg, bg));
        fb.put(ox + w - 1, oy + h - 1, TermCell::new('┘', fg, bg));
    }

    fn put_centered(&self, fb: &mut FrameBuffer, y: u16, text: &str, fg: Rgb, bold: bool) {
        let x = fb.width().saturating_sub(text.len() as u16) / 2;
        for (i, ch) in text.chars().enumerate() {
            let mut cell = TermCell::new(ch, fg, Rgb::default());
            if bold {
                cell = cell.bold();
            }
            fb.put(x + i as u16, y, cell);
        }
    }
}

/// Display color for a material code.
fn material_color(code: u8) -> Rgb {
    match code {
        1 => Rgb::new(150, 100, 55),  // wood
        2 => Rgb::new(130, 130, 140), // rock
        3 => Rgb::new(90, 220, 230),  // diamond
        4 => Rgb::new(220, 70, 60),   // bomb
        5 => Rgb::new(235, 200, 70),  // missile
        _ => Rgb::new(16, 16, 22),
    }
}
