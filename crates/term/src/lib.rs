//! Terminal rendering module.
//!
//! A small, game-oriented rendering layer for terminal gameplay. The game
//! loop draws through the [`RenderBackend`](crate::core::RenderBackend) trait;
//! [`TerminalBackend`] implements it by painting into a [`FrameBuffer`] and
//! flushing only the cells that changed since the previous frame.

pub mod backend;
pub mod fb;
pub mod renderer;

pub use sneck_core as core;
pub use sneck_types as types;

pub use backend::TerminalBackend;
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
