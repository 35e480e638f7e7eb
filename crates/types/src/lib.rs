//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used by the rotation core, the
//! input mapping and the sandbox driver. Everything here is plain data: no
//! board access, no kick tables, no I/O.
//!
//! # Coordinates
//!
//! Board space has its origin in the top-left corner:
//!
//! - **x** grows to the right (columns `0..width`)
//! - **y** grows downward (rows `0..height`)
//! - **Row 0** is the spawn buffer; settled pieces never occupy it
//!
//! Kick tables are written in the guideline convention where y grows upward,
//! so a table offset must have its y negated before it is applied to a piece.
//!
//! # Default Board Dimensions
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BOARD_WIDTH` | 10 | Columns |
//! | `BOARD_HEIGHT` | 21 | Spawn buffer row + 20 visible rows |
//!
//! # Examples
//!
//! ```
//! use srs_tetris_types::{GameAction, PieceKind, Rotation, Vec2};
//!
//! // Parse from string (case-insensitive)
//! let piece = PieceKind::from_str("t").unwrap();
//! assert_eq!(piece, PieceKind::T);
//!
//! // Orientation states are cyclic
//! assert_eq!(Rotation::North.rotate_ccw(), Rotation::West);
//! assert_eq!(Rotation::West.index(), 3);
//!
//! // Vectors add component-wise
//! assert_eq!(Vec2::new(1, 2) + Vec2::new(-1, 3), Vec2::new(0, 5));
//!
//! // Parse game action
//! let action = GameAction::from_str("rotate180").unwrap();
//! assert_eq!(action, GameAction::Rotate180);
//! ```

use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub};

use serde::{Deserialize, Serialize};

/// Default board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Default board height in cells (1 spawn buffer row + 20 visible rows)
pub const BOARD_HEIGHT: u8 = 21;

/// Integer 2D vector used for positions, offsets and kicks.
///
/// A plain value: every kick produces a new `Vec2` rather than mutating a
/// shared one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: i32,
    pub y: i32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0, y: 0 };
    pub const LEFT: Vec2 = Vec2 { x: -1, y: 0 };
    pub const RIGHT: Vec2 = Vec2 { x: 1, y: 0 };
    /// One row down in board space.
    pub const DOWN: Vec2 = Vec2 { x: 0, y: 1 };
    /// One row up in board space.
    pub const UP: Vec2 = Vec2 { x: 0, y: -1 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Vec2 {
    type Output = Vec2;

    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The seven tetromino piece kinds
///
/// Each piece has a distinct shape and color id:
/// - **T**: 1, T-shaped
/// - **S**: 2, S-shaped
/// - **Z**: 3, Z-shaped (mirror of S)
/// - **L**: 4, L-shaped
/// - **J**: 5, J-shaped (mirror of L)
/// - **O**: 6, 2x2 square
/// - **I**: 7, horizontal bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    T,
    S,
    Z,
    L,
    J,
    O,
    I,
}

impl PieceKind {
    /// All kinds in color-id order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::L,
        PieceKind::J,
        PieceKind::O,
        PieceKind::I,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use srs_tetris_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "t" => Some(PieceKind::T),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "l" => Some(PieceKind::L),
            "j" => Some(PieceKind::J),
            "o" => Some(PieceKind::O),
            "i" => Some(PieceKind::I),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::T => "t",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::L => "l",
            PieceKind::J => "j",
            PieceKind::O => "o",
            PieceKind::I => "i",
        }
    }

    /// Nonzero color id written into shape grids.
    ///
    /// The value only matters to renderers; the core treats any nonzero cell
    /// as occupied.
    pub fn color_id(&self) -> u8 {
        match self {
            PieceKind::T => 1,
            PieceKind::S => 2,
            PieceKind::Z => 3,
            PieceKind::L => 4,
            PieceKind::J => 5,
            PieceKind::O => 6,
            PieceKind::I => 7,
        }
    }

    /// Inverse of [`PieceKind::color_id`].
    pub fn from_color_id(id: u8) -> Option<Self> {
        PieceKind::ALL.iter().copied().find(|kind| kind.color_id() == id)
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_str().to_uppercase())
    }
}

/// Rotation states following the Super Rotation System (SRS)
///
/// - **North** (0): Spawn orientation
/// - **East** (1): Rotated 90° clockwise
/// - **South** (2): Rotated 180°
/// - **West** (3): Rotated 90° counter-clockwise (270° clockwise)
///
/// The rotation cycle goes: North → East → South → West → North
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Orientation state for an arbitrary integer, wrapped into `0..4`.
    ///
    /// Negative values wrap the same way as positive ones:
    ///
    /// ```
    /// use srs_tetris_types::Rotation;
    ///
    /// assert_eq!(Rotation::from_index(-1), Rotation::West);
    /// assert_eq!(Rotation::from_index(6), Rotation::South);
    /// ```
    pub fn from_index(index: i32) -> Self {
        match index.rem_euclid(4) {
            0 => Rotation::North,
            1 => Rotation::East,
            2 => Rotation::South,
            _ => Rotation::West,
        }
    }

    /// Numeric orientation state (0..=3)
    pub fn index(&self) -> u8 {
        match self {
            Rotation::North => 0,
            Rotation::East => 1,
            Rotation::South => 2,
            Rotation::West => 3,
        }
    }

    /// Rotate clockwise (90°)
    ///
    /// # Examples
    ///
    /// ```
    /// use srs_tetris_types::Rotation;
    ///
    /// assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
    /// assert_eq!(Rotation::West.rotate_cw(), Rotation::North);
    /// ```
    pub fn rotate_cw(&self) -> Self {
        Self::from_index(self.index() as i32 + 1)
    }

    /// Rotate counter-clockwise (-90° or 270°)
    pub fn rotate_ccw(&self) -> Self {
        Self::from_index(self.index() as i32 - 1)
    }

    /// Rotate 180°
    pub fn rotate_180(&self) -> Self {
        Self::from_index(self.index() as i32 + 2)
    }

    /// Orientation reached by a rotation action, `None` for anything else
    pub fn rotated_by(&self, action: GameAction) -> Option<Self> {
        match action {
            GameAction::RotateCw => Some(self.rotate_cw()),
            GameAction::RotateCcw => Some(self.rotate_ccw()),
            GameAction::Rotate180 => Some(self.rotate_180()),
            _ => None,
        }
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}

/// Actions a driver can request on the active piece
///
/// Movement and rotation actions are consumed by the core; `HardDrop` and
/// `Restart` only mean something to the driver that owns the game loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Drop piece one cell down
    SoftDrop,
    /// Instantly drop piece to lowest valid position
    HardDrop,
    /// Rotate piece 90° clockwise
    RotateCw,
    /// Rotate piece 90° counter-clockwise
    RotateCcw,
    /// Rotate piece 180°
    Rotate180,
    /// Restart with an empty board
    Restart,
}

impl GameAction {
    /// Parse action from string
    ///
    /// # Examples
    ///
    /// ```
    /// use srs_tetris_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("rotateCw"), Some(GameAction::RotateCw));
    /// assert_eq!(GameAction::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "softdrop" => Some(GameAction::SoftDrop),
            "harddrop" => Some(GameAction::HardDrop),
            "rotatecw" => Some(GameAction::RotateCw),
            "rotateccw" => Some(GameAction::RotateCcw),
            "rotate180" => Some(GameAction::Rotate180),
            "restart" => Some(GameAction::Restart),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::HardDrop => "hardDrop",
            GameAction::RotateCw => "rotateCw",
            GameAction::RotateCcw => "rotateCcw",
            GameAction::Rotate180 => "rotate180",
            GameAction::Restart => "restart",
        }
    }

    /// Whether the action is one of the three rotations.
    pub fn is_rotation(&self) -> bool {
        matches!(
            self,
            GameAction::RotateCw | GameAction::RotateCcw | GameAction::Rotate180
        )
    }
}

impl fmt::Display for GameAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Spin classification of a successful rotation
///
/// - **Spin**: a non-T piece rotated into a spot where it cannot shift in any
///   cardinal direction
/// - **TSpinMini**: one front corner and both back corners filled
/// - **TSpin**: both front corners and at least one back corner filled, or a
///   mini promoted by the 0->3 / 2->1 fifth-offset exception
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpinKind {
    Spin,
    TSpin,
    TSpinMini,
}

impl SpinKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SpinKind::Spin => "spin",
            SpinKind::TSpin => "t-spin",
            SpinKind::TSpinMini => "t-spin mini",
        }
    }
}

impl fmt::Display for SpinKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Cell filled with the specified piece kind
pub type Cell = Option<PieceKind>;
