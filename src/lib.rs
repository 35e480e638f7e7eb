//! SRS Tetris (workspace facade crate).
//!
//! Re-exports the member crates as `srs_tetris::{core,input,types}` and hosts
//! the [`sandbox`] driver used by the `srs-sandbox` binary.

pub use srs_tetris_core as core;
pub use srs_tetris_input as input;
pub use srs_tetris_types as types;

pub mod sandbox;
