//! TerminalBackend: the crossterm implementation of [`RenderBackend`].
//!
//! Drawing goes into an off-screen [`FrameBuffer`] sized to the terminal;
//! `refresh` hands it to the diffing [`TerminalRenderer`]. Input is polled
//! with a zero timeout so `get_key` never blocks.

use std::time::Duration;

use crossterm::event::{self, Event};
use crossterm::terminal;
use tracing::debug;

use crate::core::{BackendError, RenderBackend};
use crate::fb::{Cell, CellStyle, FrameBuffer};
use crate::renderer::TerminalRenderer;
use crate::types::{Color, Key};

pub struct TerminalBackend {
    renderer: TerminalRenderer,
    back: FrameBuffer,
    active: bool,
}

impl TerminalBackend {
    /// Take over the terminal: raw mode, alternate screen, hidden cursor.
    pub fn start() -> Result<Self, BackendError> {
        let (cols, rows) = terminal::size()?;
        let mut renderer = TerminalRenderer::new();
        renderer.enter()?;
        debug!(rows, cols, "terminal backend started");
        Ok(Self {
            renderer,
            back: FrameBuffer::new(rows, cols),
            active: true,
        })
    }

    /// Block until any key is pressed. Used for the end-of-game screen.
    pub fn wait_for_key(&mut self) -> Result<Key, BackendError> {
        loop {
            if let Event::Key(ev) = event::read()? {
                if let Some(key) = sneck_input::map_key(ev) {
                    return Ok(key);
                }
            }
        }
    }
}

impl RenderBackend for TerminalBackend {
    fn erase(&mut self) {
        let (rows, cols) = self.size();
        self.back.resize(rows, cols);
        self.back.clear(Cell::default());
    }

    fn add_char(&mut self, row: u16, col: u16, ch: char, color: Color) {
        self.back.put_char(row, col, ch, CellStyle::from(color));
    }

    fn refresh(&mut self) -> Result<(), BackendError> {
        self.renderer.draw_swap(&mut self.back)?;
        Ok(())
    }

    fn get_key(&mut self) -> Result<Option<Key>, BackendError> {
        while event::poll(Duration::ZERO)? {
            match event::read()? {
                Event::Key(ev) => {
                    if let Some(key) = sneck_input::map_key(ev) {
                        return Ok(Some(key));
                    }
                }
                Event::Resize(..) => self.renderer.invalidate(),
                _ => {}
            }
        }
        Ok(None)
    }

    fn stop(&mut self) -> Result<(), BackendError> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        self.renderer.exit()?;
        debug!("terminal backend stopped");
        Ok(())
    }

    fn size(&self) -> (u16, u16) {
        terminal::size()
            .map(|(cols, rows)| (rows, cols))
            .unwrap_or((self.back.rows(), self.back.cols()))
    }
}

impl Drop for TerminalBackend {
    fn drop(&mut self) {
        // Last-chance restore if the session ended through an error path.
        let _ = self.stop();
    }
}
