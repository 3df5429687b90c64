//! Terminal input module.
//!
//! Maps `crossterm` key events into [`Key`](crate::types::Key) values and
//! [`GameAction`](crate::types::GameAction)s. Nothing here blocks or reads
//! from the terminal; the backend does the polling and hands events over.

pub mod map;

pub use sneck_types as types;

pub use map::{handle_key_event, map_key, should_quit};
