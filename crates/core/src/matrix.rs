//! Matrix module - the occupancy grid pieces collide against
//!
//! The matrix is a `width x height` grid where each cell is empty or filled
//! with a piece kind, plus a ghost layer of the same size that only ever holds
//! the landing preview of the active piece.
//! Flat row-major storage; coordinates are (x, y) with (0, 0) top-left.
//! Row 0 is the spawn buffer: settled pieces are never allowed there.

use crate::shapes::ShapeGrid;
use crate::types::{Cell, PieceKind, Vec2, BOARD_HEIGHT, BOARD_WIDTH};

/// Which buffer a shape is written into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    /// Settled blocks
    Main,
    /// Landing preview of the active piece
    Ghost,
}

/// The playfield: settled cells and the ghost layer
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    width: u8,
    height: u8,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<Cell>,
    ghost: Vec<Cell>,
}

impl Matrix {
    /// Create a new empty matrix.
    ///
    /// A zero width or height gives a matrix with no cells, where every
    /// position collides and no row is ever full.
    pub fn new(width: u8, height: u8) -> Self {
        let size = width as usize * height as usize;
        Self {
            width,
            height,
            cells: vec![None; size],
            ghost: vec![None; size],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if self.is_out_of_bounds(x, y) {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Ghost layer cell at (x, y), None if out of bounds
    pub fn ghost(&self, x: i32, y: i32) -> Option<Cell> {
        self.index(x, y).map(|idx| self.ghost[idx])
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Check if position is out of bounds
    pub fn is_out_of_bounds(&self, x: i32, y: i32) -> bool {
        x < 0 || x >= self.width as i32 || y < 0 || y >= self.height as i32
    }

    /// Would `shape` placed at `position` overlap a wall, the floor, the
    /// spawn buffer row or a settled block?
    ///
    /// Note the asymmetric vertical bound: `y <= 0` collides, so row 0 stays
    /// reserved for spawning.
    pub fn collides(&self, shape: &ShapeGrid, position: Vec2) -> bool {
        shape.minos().iter().any(|&m| {
            let x = position.x + m.x;
            let y = position.y + m.y;
            x < 0
                || x >= self.width as i32
                || y <= 0
                || y >= self.height as i32
                || self.is_occupied(x, y)
        })
    }

    /// Empty the ghost layer
    pub fn clear_ghost(&mut self) {
        self.ghost.fill(None);
    }

    /// Write a shape's occupied cells at `position` into a layer.
    ///
    /// Nothing is written (and false returned) if any cell would fall outside
    /// the matrix.
    pub fn insert_blocks(&mut self, shape: &ShapeGrid, position: Vec2, layer: Layer) -> bool {
        let minos = shape.minos();
        if minos
            .iter()
            .any(|&m| self.is_out_of_bounds(position.x + m.x, position.y + m.y))
        {
            return false;
        }

        let kind = shape.kind();
        for m in minos {
            let cell = position + m;
            let idx = cell.y as usize * self.width as usize + cell.x as usize;
            match layer {
                Layer::Main => self.cells[idx] = Some(kind),
                Layer::Ghost => self.ghost[idx] = Some(kind),
            }
        }
        true
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= self.height as usize || self.width == 0 {
            return false;
        }
        let width = self.width as usize;
        let start = y * width;
        self.cells[start..start + width].iter().all(|cell| cell.is_some())
    }

    /// Clear all full rows and return the row indices that were cleared (sorted bottom to top)
    /// Rows above each cleared row shift down; the top rows are refilled empty.
    pub fn clear_full_rows(&mut self) -> Vec<usize> {
        let mut cleared_rows = Vec::new();
        let width = self.width as usize;
        let mut write_y = self.height as usize;

        // Scan from bottom to top
        for read_y in (0..self.height as usize).rev() {
            if self.is_row_full(read_y) {
                cleared_rows.push(read_y);
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src_start = read_y * width;
                    let dst_start = write_y * width;
                    self.cells
                        .copy_within(src_start..src_start + width, dst_start);
                }
            }
        }

        self.cells[..write_y * width].fill(None);
        cleared_rows
    }

    /// Number of filled cells in the main layer
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Rows of the main layer, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        // chunks(0) panics; a zero-width matrix has no cells to yield anyway
        self.cells.chunks(usize::from(self.width).max(1))
    }

    /// Clear the entire matrix, ghost layer included
    pub fn clear(&mut self) {
        self.cells.fill(None);
        self.ghost.fill(None);
    }

    /// Build a matrix from text rows, top row first.
    ///
    /// `.` or space is empty; a piece letter fills with that kind; any other
    /// character fills with a generic block. Missing rows at the top are
    /// empty. Handy for setting up positions in tests and demos.
    pub fn from_ascii(width: u8, height: u8, rows: &[&str]) -> Self {
        let mut matrix = Self::new(width, height);
        let offset = (height as usize).saturating_sub(rows.len());
        for (i, row) in rows.iter().enumerate() {
            let y = (offset + i) as i32;
            for (x, ch) in row.chars().enumerate() {
                let cell = match ch {
                    '.' | ' ' => None,
                    other => Some(
                        PieceKind::from_str(&other.to_string()).unwrap_or(PieceKind::O),
                    ),
                };
                matrix.set(x as i32, y, cell);
            }
        }
        matrix
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Self::new(BOARD_WIDTH, BOARD_HEIGHT)
    }
}
