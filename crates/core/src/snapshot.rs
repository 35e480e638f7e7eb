use serde::{Deserialize, Serialize};

use crate::tetromino::Tetromino;
use crate::types::{PieceKind, Rotation, Vec2};

/// Read-only view of the active piece for renderers and external observers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PieceSnapshot {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub position: Vec2,
    pub ghost_position: Vec2,
    /// Shape grid rows for the current orientation, top to bottom
    pub blocks: Vec<Vec<u8>>,
    /// Absolute board cells the piece occupies
    pub cells: Vec<Vec2>,
}

impl From<&Tetromino> for PieceSnapshot {
    fn from(value: &Tetromino) -> Self {
        Self {
            kind: value.kind(),
            rotation: value.rotation(),
            position: value.position(),
            ghost_position: value.ghost_position(),
            blocks: value.blocks().rows().map(|row| row.to_vec()).collect(),
            cells: value.cells().into_iter().collect(),
        }
    }
}
