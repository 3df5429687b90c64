//! Error types for board access, render backends and the game loop.

use derive_more::{Display, Error};

use crate::types::Position;

/// Board construction and cell access failures.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    #[display("board of {rows}x{cols} cannot fit a border and an interior")]
    TooSmall { rows: u16, cols: u16 },
    #[display("cell {pos} is outside the {rows}x{cols} board")]
    OutOfBounds { pos: Position, rows: u16, cols: u16 },
    #[display("text line {line} ({width} chars) does not fit on the {rows}x{cols} board")]
    TextDoesNotFit {
        line: usize,
        width: usize,
        rows: u16,
        cols: u16,
    },
}

/// The render backend could not talk to its terminal.
#[derive(Debug, Display, Error)]
#[display("render backend unavailable: {source}")]
pub struct BackendError {
    pub source: std::io::Error,
}

impl From<std::io::Error> for BackendError {
    fn from(source: std::io::Error) -> Self {
        Self { source }
    }
}

/// Anything that can abort a game session.
#[derive(Debug, Display, Error)]
pub enum GameError {
    #[display("{_0}")]
    Board(BoardError),
    #[display("{_0}")]
    Backend(BackendError),
    #[display("invalid configuration: {reason}")]
    InvalidConfig {
        #[error(not(source))]
        reason: &'static str,
    },
    #[display("cell {pos} is not empty")]
    CellOccupied { pos: Position },
}

impl From<BoardError> for GameError {
    fn from(err: BoardError) -> Self {
        Self::Board(err)
    }
}

impl From<BackendError> for GameError {
    fn from(err: BackendError) -> Self {
        Self::Backend(err)
    }
}
