//! SRS rotation core - pure, deterministic, and testable
//!
//! This crate resolves movement and rotation of the active piece against an
//! occupancy grid, following the Super Rotation System. It has **zero
//! dependencies** on rendering, input frameworks, timing or I/O.
//!
//! # Module Structure
//!
//! - [`matrix`]: occupancy grid, ghost layer and the collision predicate
//! - [`shapes`]: spawn shape grids and the CW / CCW / 180° grid transforms
//! - [`kicks`]: rotation systems and their 90° / 180° kick tables
//! - [`tetromino`]: the active piece: movement, kick search, ghost, hard drop
//! - [`spin`]: spin, T-spin and T-spin mini classification
//! - [`config`]: board dimensions and rotation-system selection
//! - [`snapshot`]: serializable view of the active piece
//!
//! # Rules
//!
//! - **Collision**: x outside `[0, width)`, y `<= 0` or `>= height`, or a
//!   filled cell. Row 0 is a spawn buffer no piece may settle into.
//! - **Kicks**: offsets are tried in table order; the first that fits wins.
//!   Table y is inverted before use because board y grows downward.
//! - **O piece**: only the zero offset, so it never translates on rotation.
//!
//! # Example
//!
//! ```
//! use srs_tetris_core::{Matrix, RotationSystem, Tetromino};
//! use srs_tetris_core::types::{GameAction, PieceKind, Rotation, Vec2};
//!
//! let srs = RotationSystem::shared("SRS").unwrap();
//! let mut matrix = Matrix::default();
//! let mut piece = Tetromino::new(PieceKind::T, Rotation::North, 4, 2);
//!
//! piece.try_move(GameAction::MoveLeft, &matrix).unwrap();
//! let outcome = piece.try_rotate(GameAction::RotateCw, &matrix, srs).unwrap();
//! assert_eq!(outcome.kick(), Some(Vec2::ZERO));
//! assert_eq!(piece.rotation(), Rotation::East);
//!
//! let landing = piece.ghost(&mut matrix);
//! assert_eq!(landing.y, 18);
//! ```

pub mod config;
pub mod error;
pub mod kicks;
pub mod matrix;
pub mod shapes;
pub mod snapshot;
pub mod spin;
pub mod tetromino;

pub use srs_tetris_types as types;

// Re-export commonly used types for convenience
pub use config::CoreConfig;
pub use error::{CoreError, Result};
pub use kicks::{KickClass, KickTable, Magnitude, RotationSystem, Transition};
pub use matrix::{Layer, Matrix};
pub use shapes::ShapeGrid;
pub use snapshot::PieceSnapshot;
pub use tetromino::{RotationOutcome, Tetromino};
