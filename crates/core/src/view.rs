//! BoardView: projects the board and score onto a render backend.
//!
//! The board is centred in whatever viewport the backend reports this frame.
//! When the terminal is smaller than the board the drawing is clipped: cells
//! that would land at a negative coordinate are skipped and the backend drops
//! anything past its right or bottom edge.

use crate::backend::RenderBackend;
use crate::board::Board;
use crate::types::{glyphs, Color};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub rows: u16,
    pub cols: u16,
}

impl Viewport {
    pub fn new(rows: u16, cols: u16) -> Self {
        Self { rows, cols }
    }
}

/// Top-left corner of the board inside the viewport, possibly negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Origin {
    pub row: i32,
    pub col: i32,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BoardView;

impl BoardView {
    /// Where the board's `(0, 0)` lands for a viewport.
    pub fn origin(board: &Board, viewport: Viewport) -> Origin {
        let (rows, cols) = board.dimensions();
        Origin {
            row: (viewport.rows as i32 - rows as i32).div_euclid(2),
            col: (viewport.cols as i32 - cols as i32).div_euclid(2),
        }
    }

    /// `Score: NNN` padded on the left to the board width.
    pub fn score_line(score: u32, width: u16) -> String {
        format!("{:>width$}", format!("Score: {score:03}"), width = width as usize)
    }

    /// Draw the score line and every board row for this frame.
    pub fn draw<B: RenderBackend + ?Sized>(board: &Board, score: u32, backend: &mut B) {
        let (rows, cols) = backend.size();
        let origin = Self::origin(board, Viewport::new(rows, cols));

        Self::draw_score(board, score, origin, backend);
        Self::draw_board(board, origin, backend);
    }

    fn draw_score<B: RenderBackend + ?Sized>(
        board: &Board,
        score: u32,
        origin: Origin,
        backend: &mut B,
    ) {
        let row = origin.row - 1;
        if row < 0 {
            return;
        }
        let line = Self::score_line(score, board.cols());
        for (i, ch) in line.chars().enumerate() {
            put(backend, row, origin.col + i as i32, ch, Color::Yellow);
        }
    }

    fn draw_board<B: RenderBackend + ?Sized>(board: &Board, origin: Origin, backend: &mut B) {
        for (r, line) in board.lines().enumerate() {
            for (c, &ch) in line.iter().enumerate() {
                put(
                    backend,
                    origin.row + r as i32,
                    origin.col + c as i32,
                    ch,
                    glyphs::color_of(ch),
                );
            }
        }
    }
}

fn put<B: RenderBackend + ?Sized>(backend: &mut B, row: i32, col: i32, ch: char, color: Color) {
    if row < 0 || col < 0 || row > u16::MAX as i32 || col > u16::MAX as i32 {
        return;
    }
    backend.add_char(row as u16, col as u16, ch, color);
}
