//! Board module - manages the game grid
//!
//! The board is a `rows x cols` grid of glyphs stored as a flat row-major
//! vector. Coordinates are `(row, col)` with `(0, 0)` at the top-left corner.
//! The outer ring holds wall glyphs for the whole lifetime of the board; the
//! interior holds empty cells, snake glyphs or the fruit glyph.

use std::slice::Chunks;

use crate::error::BoardError;
use crate::painter::Painter;
use crate::types::{glyphs, Position, MIN_BOARD_SIDE};

/// The game board with its border already painted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: u16,
    cols: u16,
    /// Flat array of glyphs, row-major order (row * cols + col)
    cells: Vec<char>,
}

impl Board {
    /// Create a bordered board with an empty interior
    ///
    /// Fails if either side is smaller than 3, since the board could not
    /// hold both walls and an interior cell.
    pub fn new(rows: u16, cols: u16) -> Result<Self, BoardError> {
        if rows < MIN_BOARD_SIDE || cols < MIN_BOARD_SIDE {
            return Err(BoardError::TooSmall { rows, cols });
        }

        let mut board = Self {
            rows,
            cols,
            cells: vec![glyphs::EMPTY; rows as usize * cols as usize],
        };
        Painter::paint_border(&mut board);
        Ok(board)
    }

    #[inline(always)]
    fn index(&self, pos: Position) -> Option<usize> {
        if !self.contains(pos) {
            return None;
        }
        Some(pos.row as usize * self.cols as usize + pos.col as usize)
    }

    fn out_of_bounds(&self, pos: Position) -> BoardError {
        BoardError::OutOfBounds {
            pos,
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// `(rows, cols)`
    pub fn dimensions(&self) -> (u16, u16) {
        (self.rows, self.cols)
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    /// Check if position lies within `[0, rows) x [0, cols)`
    pub fn contains(&self, pos: Position) -> bool {
        pos.row >= 0
            && pos.col >= 0
            && pos.row < self.rows as i32
            && pos.col < self.cols as i32
    }

    /// Get the glyph at `pos`
    pub fn get_cell(&self, pos: Position) -> Result<char, BoardError> {
        self.index(pos)
            .map(|idx| self.cells[idx])
            .ok_or_else(|| self.out_of_bounds(pos))
    }

    /// Overwrite the glyph at `pos`
    pub fn write_cell(&mut self, pos: Position, ch: char) -> Result<(), BoardError> {
        let idx = self.index(pos).ok_or_else(|| self.out_of_bounds(pos))?;
        self.cells[idx] = ch;
        Ok(())
    }

    /// Check if position is within bounds and empty
    pub fn is_empty_at(&self, pos: Position) -> bool {
        matches!(self.get_cell(pos), Ok(glyphs::EMPTY))
    }

    /// Centre cell, rounded down on both axes
    pub fn center(&self) -> Position {
        Position::new(self.rows as i32 / 2, self.cols as i32 / 2)
    }

    /// Rows of the grid, top to bottom.
    ///
    /// The iterator is `Clone`, so a frame can walk it as often as needed.
    pub fn lines(&self) -> Chunks<'_, char> {
        self.cells.chunks(self.cols as usize)
    }

    /// One row rendered as a `String`, `None` past the last row.
    pub fn line(&self, row: u16) -> Option<String> {
        self.lines().nth(row as usize).map(|r| r.iter().collect())
    }

    /// Number of empty cells anywhere on the board
    pub fn empty_cell_count(&self) -> usize {
        self.cells.iter().filter(|&&ch| ch == glyphs::EMPTY).count()
    }

    /// Number of cells holding a snake glyph
    pub fn snake_cell_count(&self) -> usize {
        self.cells.iter().filter(|&&ch| glyphs::is_snake(ch)).count()
    }

    /// Positions of every cell holding `ch`, row-major
    pub fn find_all(&self, ch: char) -> Vec<Position> {
        let cols = self.cols as usize;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &c)| c == ch)
            .map(|(i, _)| Position::new((i / cols) as i32, (i % cols) as i32))
            .collect()
    }
}
