//! Terminal snake (workspace facade crate).
//!
//! This package exposes `sneck::{core,input,term,types}` while the
//! implementation lives in dedicated crates under `crates/`.

pub use sneck_core as core;
pub use sneck_input as input;
pub use sneck_term as term;
pub use sneck_types as types;
