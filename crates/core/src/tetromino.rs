//! Tetromino module - the active piece and the SRS rotation resolver
//!
//! A [`Tetromino`] caches its shape grid next to its orientation; the two are
//! only ever replaced together. Every mutating operation probes the matrix
//! first and commits afterwards, so a committed piece never overlaps a wall,
//! the floor, the spawn buffer row or a settled block.

use tracing::{debug, trace};

use crate::error::{CoreError, Result};
use crate::kicks::{KickTable, Magnitude, RotationSystem, Transition};
use crate::matrix::{Layer, Matrix};
use crate::shapes::{Minos, ShapeGrid};
use crate::snapshot::PieceSnapshot;
use crate::spin;
use crate::types::{GameAction, PieceKind, Rotation, SpinKind, Vec2};

/// What a rotate call did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationOutcome {
    /// The piece rotated using the kick at `offset_index`.
    Rotated {
        transition: Transition,
        offset_index: usize,
        /// Board-space translation that was applied
        kick: Vec2,
        spin: Option<SpinKind>,
    },
    /// Every kick collided; the piece is unchanged.
    Rejected,
}

impl RotationOutcome {
    pub fn is_rotated(&self) -> bool {
        matches!(self, RotationOutcome::Rotated { .. })
    }

    pub fn kick(&self) -> Option<Vec2> {
        match self {
            RotationOutcome::Rotated { kick, .. } => Some(*kick),
            RotationOutcome::Rejected => None,
        }
    }

    pub fn offset_index(&self) -> Option<usize> {
        match self {
            RotationOutcome::Rotated { offset_index, .. } => Some(*offset_index),
            RotationOutcome::Rejected => None,
        }
    }

    /// Spin classification of the rotation, if any
    pub fn spin(&self) -> Option<SpinKind> {
        match self {
            RotationOutcome::Rotated { spin, .. } => *spin,
            RotationOutcome::Rejected => None,
        }
    }
}

/// Orientation and grid produced together by one rotate action
#[derive(Debug, Clone, Copy)]
struct Turn {
    rotation: Rotation,
    blocks: ShapeGrid,
}

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tetromino {
    kind: PieceKind,
    rotation: Rotation,
    position: Vec2,
    blocks: ShapeGrid,
    ghost_position: Vec2,
}

impl Tetromino {
    /// Create a piece whose grid origin sits at (x, y) minus the spawn origin
    /// offset, pre-rotated into `rotation`.
    pub fn new(kind: PieceKind, rotation: Rotation, x: i32, y: i32) -> Self {
        let position = Vec2::new(x, y) - Self::spawn_origin(kind);
        Self {
            kind,
            rotation,
            position,
            blocks: ShapeGrid::oriented(kind, rotation),
            ghost_position: position,
        }
    }

    /// Offset from the requested spawn coordinate to the grid's top-left corner
    pub fn spawn_origin(kind: PieceKind) -> Vec2 {
        match kind {
            PieceKind::O => Vec2::ZERO,
            _ => Vec2::new(1, 1),
        }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Grid origin in board space
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Shape grid for the current orientation
    pub fn blocks(&self) -> &ShapeGrid {
        &self.blocks
    }

    /// Landing position computed by the last [`Tetromino::ghost`] call
    pub fn ghost_position(&self) -> Vec2 {
        self.ghost_position
    }

    /// Absolute board cells the piece occupies
    pub fn cells(&self) -> Minos {
        self.blocks
            .minos()
            .into_iter()
            .map(|m| self.position + m)
            .collect()
    }

    /// Does the piece overlap anything where it currently stands?
    ///
    /// Only a freshly constructed piece can be in this state; drivers use it
    /// as the top-out check.
    pub fn is_blocked(&self, matrix: &Matrix) -> bool {
        matrix.collides(&self.blocks, self.position)
    }

    /// Move one cell left, right or down.
    ///
    /// Returns `Ok(false)` when the move is blocked. Any action other than
    /// `MoveLeft`, `MoveRight` or `SoftDrop` is an error.
    pub fn try_move(&mut self, action: GameAction, matrix: &Matrix) -> Result<bool> {
        let direction = match action {
            GameAction::MoveLeft => Vec2::LEFT,
            GameAction::MoveRight => Vec2::RIGHT,
            GameAction::SoftDrop => Vec2::DOWN,
            other => {
                return Err(CoreError::InvalidAction {
                    action: other,
                    expected: "movement",
                })
            }
        };

        let candidate = self.position + direction;
        if matrix.collides(&self.blocks, candidate) {
            trace!(piece = %self.kind, %action, position = %self.position, "move blocked");
            return Ok(false);
        }

        self.position = candidate;
        trace!(piece = %self.kind, %action, position = %self.position, "moved");
        Ok(true)
    }

    /// Rotate with wall kicks.
    ///
    /// Offsets for the transition are tried strictly in table order and the
    /// first one that does not collide is committed. `Rejected` means all of
    /// them collided. Non-rotation actions and transitions missing from the
    /// table are errors.
    pub fn try_rotate(
        &mut self,
        action: GameAction,
        matrix: &Matrix,
        system: &RotationSystem,
    ) -> Result<RotationOutcome> {
        let (turn, magnitude) = self.turn(action)?;
        let transition = Transition::new(self.rotation, turn.rotation);
        let table = system.table_for(self.kind, magnitude);
        let offsets = table
            .offsets(transition)
            .ok_or_else(|| CoreError::MissingTransition {
                key: transition.key(),
            })?;

        for (offset_index, &offset) in offsets.iter().enumerate() {
            let kick = Self::board_kick(offset);
            let candidate = self.position + kick;

            if matrix.collides(&turn.blocks, candidate) {
                debug!(
                    piece = %self.kind,
                    %transition,
                    offset_index,
                    %kick,
                    "kick collides"
                );
                continue;
            }

            let spin = spin::classify(matrix, &turn.blocks, candidate, transition, offset_index);
            self.rotation = turn.rotation;
            self.blocks = turn.blocks;
            self.position = candidate;

            debug!(piece = %self.kind, %transition, offset_index, %kick, "rotated");
            return Ok(RotationOutcome::Rotated {
                transition,
                offset_index,
                kick,
                spin,
            });
        }

        debug!(piece = %self.kind, %transition, "rotation rejected, every kick collides");
        Ok(RotationOutcome::Rejected)
    }

    /// Board-space kick for a table offset.
    ///
    /// Tables are written with y up; the board has y down.
    pub fn board_kick(offset: Vec2) -> Vec2 {
        Vec2::new(offset.x, -offset.y)
    }

    /// Board-space kick at `offset_index` of a transition, if defined
    pub fn kick_for(table: &KickTable, transition: Transition, offset_index: usize) -> Option<Vec2> {
        table
            .offset(transition, offset_index)
            .map(Self::board_kick)
    }

    /// Target orientation, rotated grid and table magnitude for an action
    fn turn(&self, action: GameAction) -> Result<(Turn, Magnitude)> {
        let turn = self
            .rotation
            .rotated_by(action)
            .zip(self.blocks.rotated_by(action))
            .zip(Magnitude::of(action));

        match turn {
            Some(((rotation, blocks), magnitude)) => Ok((Turn { rotation, blocks }, magnitude)),
            None => Err(CoreError::InvalidAction {
                action,
                expected: "rotation",
            }),
        }
    }

    /// Lowest position the piece can fall to from where it stands
    fn landing_position(&self, matrix: &Matrix) -> Vec2 {
        let mut landing = self.position;
        while !matrix.collides(&self.blocks, landing) {
            landing += Vec2::DOWN;
        }
        landing + Vec2::UP
    }

    /// Project the landing preview into the matrix's ghost layer.
    ///
    /// The ghost layer is emptied first; the committed piece is untouched.
    /// Returns the new ghost position.
    pub fn ghost(&mut self, matrix: &mut Matrix) -> Vec2 {
        let landing = self.landing_position(matrix);
        self.ghost_position = landing;

        matrix.clear_ghost();
        if !matrix.collides(&self.blocks, landing) {
            matrix.insert_blocks(&self.blocks, landing, Layer::Ghost);
        }
        landing
    }

    /// Drop straight to the landing row. Returns the number of rows fallen.
    pub fn hard_drop(&mut self, matrix: &Matrix) -> u32 {
        let landing = self.landing_position(matrix);
        if matrix.collides(&self.blocks, landing) {
            return 0;
        }
        let rows = (landing.y - self.position.y).max(0) as u32;
        self.position = landing;
        trace!(piece = %self.kind, rows, "hard drop");
        rows
    }

    /// Write the piece into the matrix's settled layer.
    ///
    /// Returns false (writing nothing) if the piece does not fit where it is.
    pub fn lock(&self, matrix: &mut Matrix) -> bool {
        if matrix.collides(&self.blocks, self.position) {
            return false;
        }
        matrix.insert_blocks(&self.blocks, self.position, Layer::Main)
    }

    pub fn snapshot(&self) -> PieceSnapshot {
        PieceSnapshot::from(self)
    }
}
