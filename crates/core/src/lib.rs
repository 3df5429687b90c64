//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the board, the snake and the frame loop that ties them
//! together. It never touches a terminal: all drawing and input go through the
//! [`RenderBackend`] trait, which keeps the loop:
//!
//! - **Deterministic**: the same seed places the same fruit in the same order
//! - **Testable**: a [`MemoryBackend`] can drive the loop one frame at a time
//! - **Portable**: any surface that can write a coloured char can host it
//!
//! # Module Structure
//!
//! - [`board`]: bordered glyph grid with bounds-checked cell access
//! - [`painter`]: border painting and centred text
//! - [`snake`]: body, heading and growth state machine
//! - [`game_loop`]: per-frame update, collisions, fruit, score
//! - [`view`]: projection of the board and score onto a backend
//! - [`backend`]: the render backend trait and an in-memory implementation
//! - [`pacer`]: frame budget arithmetic
//! - [`error`]: error types
//!
//! # Game Rules
//!
//! - The snake starts as a single segment at the board centre, heading right
//! - Each frame the head advances one cell in the current heading
//! - Eating a fruit adds one to the score and one segment to the snake
//! - Running into a wall or the snake's own body ends the game
//!
//! # Example
//!
//! ```
//! use sneck_core::{GameConfig, GameLoop, GameStatus, MemoryBackend};
//!
//! let config = GameConfig { seed: Some(7), ..GameConfig::default() };
//! let mut game = GameLoop::new(config, MemoryBackend::new(30, 60)).unwrap();
//!
//! assert_eq!(game.step().unwrap(), GameStatus::Running);
//! assert_eq!(game.frame_counter(), 1);
//! assert!(game.backend().screen_text().contains("Score: 00"));
//! ```
//!
//! # Timing
//!
//! The loop runs at a fixed `fps` (8 by default). [`GameLoop::run`] subtracts
//! the time spent updating and rendering from each frame's sleep.

pub mod backend;
pub mod board;
pub mod error;
pub mod game_loop;
pub mod pacer;
pub mod painter;
pub mod snake;
pub mod view;

pub use sneck_types as types;

// Re-export commonly used types for convenience
pub use backend::{MemoryBackend, RenderBackend};
pub use board::Board;
pub use error::{BackendError, BoardError, GameError};
pub use game_loop::{GameConfig, GameLoop, GameStatus, LoopOutcome};
pub use pacer::FramePacer;
pub use painter::Painter;
pub use snake::Snake;
pub use view::{BoardView, Viewport};
