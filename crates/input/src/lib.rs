//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`] values for
//! the sandbox driver. Repeat timing (DAS/ARR) is left to the terminal's own
//! key repeat.

pub mod map;

pub use srs_tetris_types as types;

pub use map::{handle_key_event, should_quit};
