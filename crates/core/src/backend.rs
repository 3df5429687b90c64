//! Render backend seam.
//!
//! The game loop only ever talks to a [`RenderBackend`]: it clears an
//! off-screen surface, writes coloured characters at absolute coordinates,
//! flushes, and polls for a key without blocking. The terminal implementation
//! lives in `sneck-term`; [`MemoryBackend`] keeps everything in memory so the
//! loop can be driven frame by frame from tests and benches.

use std::collections::VecDeque;

use crate::error::BackendError;
use crate::types::{Color, Key};

pub trait RenderBackend {
    /// Clear the off-screen surface.
    fn erase(&mut self);

    /// Write one character at `(row, col)`. Writes outside the surface are
    /// dropped.
    fn add_char(&mut self, row: u16, col: u16, ch: char, color: Color);

    /// Write a string starting at `(row, col)`, clipped at the right edge.
    fn add_string(&mut self, row: u16, col: u16, text: &str, color: Color) {
        let (_, cols) = self.size();
        for (i, ch) in text.chars().enumerate() {
            let c = col as usize + i;
            if c >= cols as usize {
                break;
            }
            self.add_char(row, c as u16, ch, color);
        }
    }

    /// Flush the off-screen surface to the screen.
    fn refresh(&mut self) -> Result<(), BackendError>;

    /// Non-blocking single key read. `Ok(None)` means no key was pressed.
    fn get_key(&mut self) -> Result<Option<Key>, BackendError>;

    /// Release backend resources. Called once, by whoever owns the session.
    fn stop(&mut self) -> Result<(), BackendError>;

    /// Current viewport as `(rows, cols)`. May change between frames.
    fn size(&self) -> (u16, u16);
}

/// In-memory backend with a scripted key queue.
#[derive(Debug, Clone)]
pub struct MemoryBackend {
    rows: u16,
    cols: u16,
    surface: Vec<(char, Color)>,
    screen: Vec<(char, Color)>,
    keys: VecDeque<Key>,
    refreshes: usize,
    stopped: bool,
}

impl MemoryBackend {
    pub fn new(rows: u16, cols: u16) -> Self {
        let len = rows as usize * cols as usize;
        Self {
            rows,
            cols,
            surface: vec![(' ', Color::White); len],
            screen: vec![(' ', Color::White); len],
            keys: VecDeque::new(),
            refreshes: 0,
            stopped: false,
        }
    }

    /// Queue a key to be returned by a later `get_key`.
    pub fn push_key(&mut self, key: Key) {
        self.keys.push_back(key);
    }

    /// Simulate a terminal resize. Both surfaces are cleared.
    pub fn resize(&mut self, rows: u16, cols: u16) {
        *self = Self {
            keys: std::mem::take(&mut self.keys),
            refreshes: self.refreshes,
            stopped: self.stopped,
            ..Self::new(rows, cols)
        };
    }

    /// What the last `refresh` put on screen at `(row, col)`.
    pub fn cell(&self, row: u16, col: u16) -> Option<(char, Color)> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(self.screen[row as usize * self.cols as usize + col as usize])
    }

    /// One flushed screen row as text.
    pub fn row_text(&self, row: u16) -> String {
        (0..self.cols)
            .filter_map(|col| self.cell(row, col).map(|(ch, _)| ch))
            .collect()
    }

    /// All flushed rows joined with newlines.
    pub fn screen_text(&self) -> String {
        (0..self.rows)
            .map(|row| self.row_text(row))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn refresh_count(&self) -> usize {
        self.refreshes
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }
}

impl RenderBackend for MemoryBackend {
    fn erase(&mut self) {
        self.surface.fill((' ', Color::White));
    }

    fn add_char(&mut self, row: u16, col: u16, ch: char, color: Color) {
        if row < self.rows && col < self.cols {
            self.surface[row as usize * self.cols as usize + col as usize] = (ch, color);
        }
    }

    fn refresh(&mut self) -> Result<(), BackendError> {
        self.screen.clone_from(&self.surface);
        self.refreshes += 1;
        Ok(())
    }

    fn get_key(&mut self) -> Result<Option<Key>, BackendError> {
        Ok(self.keys.pop_front())
    }

    fn stop(&mut self) -> Result<(), BackendError> {
        self.stopped = true;
        Ok(())
    }

    fn size(&self) -> (u16, u16) {
        (self.rows, self.cols)
    }
}
