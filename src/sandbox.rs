//! Sandbox driver - a minimal game loop around the rotation core
//!
//! Holds the matrix and one active piece, applies actions, locks pieces on
//! hard drop, clears full rows and spawns the next piece in a fixed cycle.
//! There is no gravity, hold or scoring: the sandbox exists to poke at
//! rotations and kicks by hand.

use tracing::{debug, info, warn};

use crate::core::{CoreConfig, Matrix, Result, RotationSystem, Tetromino};
use crate::types::{GameAction, PieceKind, Rotation, SpinKind};

/// Spawn cycle
const SPAWN_ORDER: [PieceKind; 7] = [
    PieceKind::T,
    PieceKind::S,
    PieceKind::Z,
    PieceKind::L,
    PieceKind::J,
    PieceKind::O,
    PieceKind::I,
];

/// Requested spawn row; the piece's grid origin ends up one row lower than
/// the spawn buffer row for every kind.
const SPAWN_Y: i32 = 2;

#[derive(Debug, Clone)]
pub struct Sandbox {
    system: &'static RotationSystem,
    matrix: Matrix,
    active: Tetromino,
    next_index: usize,
    last_spin: Option<SpinKind>,
    lines: u32,
    pieces: u32,
    game_over: bool,
}

impl Sandbox {
    /// Build a sandbox from configuration.
    ///
    /// Fails when the rotation system is unsupported or the board is too small.
    pub fn new(config: &CoreConfig) -> Result<Self> {
        let system = config.rotation_system()?;
        let matrix = config.matrix()?;
        let active = Self::spawn_piece(&matrix, SPAWN_ORDER[0]);

        let mut sandbox = Self {
            system,
            matrix,
            active,
            next_index: 1,
            last_spin: None,
            lines: 0,
            pieces: 1,
            game_over: false,
        };
        sandbox.active.ghost(&mut sandbox.matrix);
        Ok(sandbox)
    }

    fn spawn_piece(matrix: &Matrix, kind: PieceKind) -> Tetromino {
        let x = (matrix.width() as i32 - 1) / 2;
        Tetromino::new(kind, Rotation::North, x, SPAWN_Y)
    }

    pub fn matrix(&self) -> &Matrix {
        &self.matrix
    }

    pub fn active(&self) -> &Tetromino {
        &self.active
    }

    pub fn next_kind(&self) -> PieceKind {
        SPAWN_ORDER[self.next_index]
    }

    /// Spin classification of the latest rotation, cleared by movement
    pub fn last_spin(&self) -> Option<SpinKind> {
        self.last_spin
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn pieces(&self) -> u32 {
        self.pieces
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Apply one action. Returns whether anything changed.
    pub fn apply(&mut self, action: GameAction) -> Result<bool> {
        if action == GameAction::Restart {
            self.restart();
            return Ok(true);
        }
        if self.game_over {
            return Ok(false);
        }

        let changed = match action {
            GameAction::MoveLeft | GameAction::MoveRight | GameAction::SoftDrop => {
                let moved = self.active.try_move(action, &self.matrix)?;
                if moved {
                    self.last_spin = None;
                }
                moved
            }
            GameAction::RotateCw | GameAction::RotateCcw | GameAction::Rotate180 => {
                let outcome = self.active.try_rotate(action, &self.matrix, self.system)?;
                if outcome.is_rotated() {
                    self.last_spin = outcome.spin();
                }
                outcome.is_rotated()
            }
            GameAction::HardDrop => {
                self.lock_active();
                true
            }
            GameAction::Restart => false,
        };

        self.active.ghost(&mut self.matrix);
        Ok(changed)
    }

    fn lock_active(&mut self) {
        let rows = self.active.hard_drop(&self.matrix);
        if self.active.lock(&mut self.matrix) {
            debug!(piece = %self.active.kind(), rows, position = %self.active.position(), "locked");
        } else {
            warn!(
                piece = %self.active.kind(),
                position = %self.active.position(),
                "piece overlaps the stack, nothing locked"
            );
        }

        let cleared = self.matrix.clear_full_rows();
        self.lines += cleared.len() as u32;
        if !cleared.is_empty() {
            info!(rows = cleared.len(), spin = ?self.last_spin, "rows cleared");
        }

        let kind = SPAWN_ORDER[self.next_index];
        self.next_index = (self.next_index + 1) % SPAWN_ORDER.len();
        self.active = Self::spawn_piece(&self.matrix, kind);
        self.pieces += 1;

        if self.active.is_blocked(&self.matrix) {
            info!(pieces = self.pieces, lines = self.lines, "spawn blocked, game over");
            self.game_over = true;
        }
    }

    fn restart(&mut self) {
        debug!("restart");
        self.matrix.clear();
        self.active = Self::spawn_piece(&self.matrix, SPAWN_ORDER[0]);
        self.next_index = 1;
        self.last_spin = None;
        self.lines = 0;
        self.pieces = 1;
        self.game_over = false;
        self.active.ghost(&mut self.matrix);
    }
}
