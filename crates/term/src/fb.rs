//! Framebuffer and style types for terminal rendering.

use crate::types::Color;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Minimal per-cell styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
}

impl Default for CellStyle {
    fn default() -> Self {
        Self {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
            bold: false,
        }
    }
}

impl From<Color> for CellStyle {
    fn from(color: Color) -> Self {
        let (fg, bold) = match color {
            Color::White => (Rgb::new(220, 220, 220), false),
            Color::Red => (Rgb::new(220, 80, 80), true),
            Color::Green => (Rgb::new(100, 220, 120), true),
            Color::Magenta => (Rgb::new(200, 120, 220), false),
            Color::Yellow => (Rgb::new(240, 220, 80), true),
        };
        Self {
            fg,
            bold,
            ..Self::default()
        }
    }
}

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            style: CellStyle::default(),
        }
    }
}

/// 2D framebuffer of styled character cells, addressed `(row, col)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    rows: u16,
    cols: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(rows: u16, cols: u16) -> Self {
        let len = (rows as usize) * (cols as usize);
        Self {
            rows,
            cols,
            cells: vec![Cell::default(); len],
        }
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    /// Resize the framebuffer.
    ///
    /// This preserves the underlying allocation when possible.
    pub fn resize(&mut self, rows: u16, cols: u16) {
        if self.rows == rows && self.cols == cols {
            return;
        }
        self.rows = rows;
        self.cols = cols;
        let len = (rows as usize) * (cols as usize);
        self.cells.resize(len, Cell::default());
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline(always)]
    fn idx(&self, row: u16, col: u16) -> Option<usize> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some((row as usize) * (self.cols as usize) + (col as usize))
    }

    pub fn get(&self, row: u16, col: u16) -> Option<Cell> {
        self.idx(row, col).map(|i| self.cells[i])
    }

    pub fn set(&mut self, row: u16, col: u16, cell: Cell) {
        if let Some(i) = self.idx(row, col) {
            self.cells[i] = cell;
        }
    }

    pub fn clear(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    pub fn put_char(&mut self, row: u16, col: u16, ch: char, style: CellStyle) {
        self.set(row, col, Cell { ch, style });
    }

    pub fn put_str(&mut self, row: u16, col: u16, s: &str, style: CellStyle) {
        let mut c = col;
        for ch in s.chars() {
            if c >= self.cols {
                break;
            }
            self.put_char(row, c, ch, style);
            c += 1;
        }
    }
}
