//! Shapes module - tetromino shape grids and the pure grid transforms
//!
//! Every piece starts from its SRS spawn grid (orientation 0) and afterwards
//! only changes by rotating the grid it already has. O is 2x2, I is 4x4, and
//! T/S/Z/L/J are 3x3. Cells hold the piece's color id; zero is empty.
//! Reference: https://tetris.wiki/Super_Rotation_System

use arrayvec::ArrayVec;

use crate::types::{GameAction, PieceKind, Rotation, Vec2};

/// Largest grid side length (the I piece)
pub const MAX_SHAPE_SIZE: usize = 4;

/// Occupied cells of a tetromino (always four)
pub type Minos = ArrayVec<Vec2, 4>;

/// Square occupancy grid for one piece in one orientation.
///
/// Stored in a fixed 4x4 array; only the top-left `size x size` corner is
/// meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeGrid {
    kind: PieceKind,
    size: usize,
    cells: [[u8; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE],
}

impl ShapeGrid {
    /// Spawn (orientation 0) grid for a piece kind
    pub fn spawn(kind: PieceKind) -> Self {
        let layout: &[&[u8]] = match kind {
            PieceKind::T => &[&[0, 1, 0], &[1, 1, 1], &[0, 0, 0]],
            PieceKind::S => &[&[0, 1, 1], &[1, 1, 0], &[0, 0, 0]],
            PieceKind::Z => &[&[1, 1, 0], &[0, 1, 1], &[0, 0, 0]],
            PieceKind::L => &[&[0, 0, 1], &[1, 1, 1], &[0, 0, 0]],
            PieceKind::J => &[&[1, 0, 0], &[1, 1, 1], &[0, 0, 0]],
            PieceKind::O => &[&[1, 1], &[1, 1]],
            PieceKind::I => &[&[0, 0, 0, 0], &[1, 1, 1, 1], &[0, 0, 0, 0], &[0, 0, 0, 0]],
        };

        let id = kind.color_id();
        let mut cells = [[0u8; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for (y, row) in layout.iter().enumerate() {
            for (x, &filled) in row.iter().enumerate() {
                if filled != 0 {
                    cells[y][x] = id;
                }
            }
        }

        Self {
            kind,
            size: layout.len(),
            cells,
        }
    }

    /// Spawn grid rotated into `rotation` (1 → CW, 2 → 180, 3 → CCW)
    pub fn oriented(kind: PieceKind, rotation: Rotation) -> Self {
        let spawn = Self::spawn(kind);
        match rotation {
            Rotation::North => spawn,
            Rotation::East => spawn.rotated_cw(),
            Rotation::South => spawn.rotated_180(),
            Rotation::West => spawn.rotated_ccw(),
        }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    /// Side length of the grid
    pub fn size(&self) -> usize {
        self.size
    }

    /// Cell value at (x, y) inside the grid; 0 outside it.
    pub fn get(&self, x: usize, y: usize) -> u8 {
        if x < self.size && y < self.size {
            self.cells[y][x]
        } else {
            0
        }
    }

    /// Rows of the grid, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.cells[..self.size].iter().map(move |row| &row[..self.size])
    }

    /// Offsets of the occupied cells relative to the grid's top-left corner
    pub fn minos(&self) -> Minos {
        let mut minos = Minos::new();
        for (y, row) in self.rows().enumerate() {
            for (x, &value) in row.iter().enumerate() {
                if value != 0 {
                    minos.push(Vec2::new(x as i32, y as i32));
                }
            }
        }
        minos
    }

    /// Rotate 90° clockwise: transpose, then reverse each row.
    pub fn rotated_cw(&self) -> Self {
        let n = self.size;
        self.remap(|x, y| (y, n - 1 - x))
    }

    /// Rotate 90° counter-clockwise: transpose, then reverse the row order.
    pub fn rotated_ccw(&self) -> Self {
        let n = self.size;
        self.remap(|x, y| (n - 1 - y, x))
    }

    /// Rotate 180°: reverse both axes.
    pub fn rotated_180(&self) -> Self {
        let n = self.size;
        self.remap(|x, y| (n - 1 - x, n - 1 - y))
    }

    /// Grid transform matching a rotation action, `None` for anything else.
    pub fn rotated_by(&self, action: GameAction) -> Option<Self> {
        match action {
            GameAction::RotateCw => Some(self.rotated_cw()),
            GameAction::RotateCcw => Some(self.rotated_ccw()),
            GameAction::Rotate180 => Some(self.rotated_180()),
            _ => None,
        }
    }

    /// Build a new grid where cell (x, y) reads the source cell `source(x, y)`.
    fn remap(&self, source: impl Fn(usize, usize) -> (usize, usize)) -> Self {
        let mut cells = [[0u8; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for (y, row) in cells.iter_mut().enumerate().take(self.size) {
            for (x, cell) in row.iter_mut().enumerate().take(self.size) {
                let (sx, sy) = source(x, y);
                *cell = self.cells[sy][sx];
            }
        }
        Self {
            kind: self.kind,
            size: self.size,
            cells,
        }
    }
}
