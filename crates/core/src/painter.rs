//! Border and text decoration for a [`Board`].

use crate::board::Board;
use crate::error::BoardError;
use crate::types::{glyphs, Position};

/// Stateless board decorator.
pub struct Painter;

impl Painter {
    /// Paint the wall ring.
    ///
    /// Straight edges are written first and the corners last, so the corner
    /// glyphs always win. Painting twice yields the same board.
    pub fn paint_border(board: &mut Board) {
        let (rows, cols) = board.dimensions();
        let (last_row, last_col) = (rows as i32 - 1, cols as i32 - 1);

        let mut put = |row: i32, col: i32, ch: char| {
            // Every coordinate below is derived from the board's own size.
            let _ = board.write_cell(Position::new(row, col), ch);
        };

        for row in 0..=last_row {
            put(row, 0, glyphs::VERTICAL_BAR);
            put(row, last_col, glyphs::VERTICAL_BAR);
        }
        for col in 0..=last_col {
            put(0, col, glyphs::HORIZONTAL_BAR);
            put(last_row, col, glyphs::HORIZONTAL_BAR);
        }

        put(0, 0, glyphs::TOP_LEFT);
        put(0, last_col, glyphs::TOP_RIGHT);
        put(last_row, 0, glyphs::BOTTOM_LEFT);
        put(last_row, last_col, glyphs::BOTTOM_RIGHT);
    }

    /// Centre a block of text on the board, both vertically and per line.
    ///
    /// Nothing is written unless every line fits inside the board.
    pub fn paint_centre_text(board: &mut Board, lines: &[&str]) -> Result<(), BoardError> {
        let (rows, cols) = board.dimensions();
        let too_big = |line: usize, width: usize| BoardError::TextDoesNotFit {
            line,
            width,
            rows,
            cols,
        };

        if lines.len() > rows as usize {
            return Err(too_big(lines.len() - 1, 0));
        }
        let row_offset = (rows as usize - lines.len()) / 2;

        let mut placed = Vec::with_capacity(lines.len());
        for (line_num, line) in lines.iter().enumerate() {
            let width = line.chars().count();
            if width > cols as usize {
                return Err(too_big(line_num, width));
            }
            let col_offset = (cols as usize - width) / 2;
            placed.push((row_offset + line_num, col_offset, *line));
        }

        for (row, col_offset, line) in placed {
            for (i, ch) in line.chars().enumerate() {
                board.write_cell(Position::new(row as i32, (col_offset + i) as i32), ch)?;
            }
        }
        Ok(())
    }
}
