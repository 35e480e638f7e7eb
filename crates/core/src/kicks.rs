//! Kicks module - rotation systems and their wall kick tables
//!
//! A rotation system owns six kick tables: one per shape class (T/S/Z/L/J,
//! I, O) for each rotation magnitude (90°, 180°). Each table maps a
//! transition key such as `"0->1"` to the ordered offsets to try. Offsets are
//! written in table space, where y grows upward.
//! Reference: https://tetris.wiki/Super_Rotation_System

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use crate::error::{CoreError, Result};
use crate::types::{GameAction, PieceKind, Rotation, Vec2};

/// Orientation change requested by a single rotate action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Transition {
    pub from: Rotation,
    pub to: Rotation,
}

impl Transition {
    pub fn new(from: Rotation, to: Rotation) -> Self {
        Self { from, to }
    }

    /// Transition for `from` indices, e.g. `Transition::indices(0, 3)`.
    pub fn indices(from: i32, to: i32) -> Self {
        Self::new(Rotation::from_index(from), Rotation::from_index(to))
    }

    /// Literal table key: `"{from}->{to}"`
    pub fn key(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.from.index(), self.to.index())
    }
}

/// Rotation magnitude selecting the 90° or the 180° tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Magnitude {
    Quarter,
    Half,
}

impl Magnitude {
    /// Magnitude of a rotation action, `None` for non-rotations
    pub fn of(action: GameAction) -> Option<Self> {
        match action {
            GameAction::RotateCw | GameAction::RotateCcw => Some(Magnitude::Quarter),
            GameAction::Rotate180 => Some(Magnitude::Half),
            _ => None,
        }
    }
}

/// Group of pieces sharing one kick table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KickClass {
    Tszlj,
    I,
    O,
}

impl KickClass {
    pub fn for_piece(kind: PieceKind) -> Self {
        match kind {
            PieceKind::T | PieceKind::S | PieceKind::Z | PieceKind::L | PieceKind::J => {
                KickClass::Tszlj
            }
            PieceKind::I => KickClass::I,
            PieceKind::O => KickClass::O,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            KickClass::Tszlj => "TSZLJ_KICKS",
            KickClass::I => "I_KICKS",
            KickClass::O => "O_KICKS",
        }
    }
}

/// Ordered kick offsets per transition for one shape class and magnitude
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KickTable {
    entries: HashMap<Transition, Vec<Vec2>>,
}

impl KickTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(from, to, offsets)` rows written as `(x, y)` pairs.
    fn from_rows(rows: KickRows) -> Self {
        let mut table = Self::new();
        for &(from, to, offsets) in rows {
            table.insert(
                Transition::indices(from, to),
                offsets.iter().map(|&(x, y)| Vec2::new(x, y)).collect(),
            );
        }
        table
    }

    /// Define (or replace) the offsets for a transition
    pub fn insert(&mut self, transition: Transition, offsets: Vec<Vec2>) {
        self.entries.insert(transition, offsets);
    }

    /// Offsets for a transition in try order, `None` if undefined
    pub fn offsets(&self, transition: Transition) -> Option<&[Vec2]> {
        self.entries.get(&transition).map(Vec::as_slice)
    }

    /// Offset at `index` for a transition
    pub fn offset(&self, transition: Transition, index: usize) -> Option<Vec2> {
        self.offsets(transition)?.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn transitions(&self) -> impl Iterator<Item = Transition> + '_ {
        self.entries.keys().copied()
    }
}

/// The three class tables for one magnitude
#[derive(Debug, Clone, PartialEq, Eq)]
struct ClassTables {
    tszlj: KickTable,
    i: KickTable,
    o: KickTable,
}

impl ClassTables {
    fn get(&self, class: KickClass) -> &KickTable {
        match class {
            KickClass::Tszlj => &self.tszlj,
            KickClass::I => &self.i,
            KickClass::O => &self.o,
        }
    }

    fn get_mut(&mut self, class: KickClass) -> &mut KickTable {
        match class {
            KickClass::Tszlj => &mut self.tszlj,
            KickClass::I => &mut self.i,
            KickClass::O => &mut self.o,
        }
    }
}

/// A named rotation system with its full set of kick tables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotationSystem {
    name: String,
    quarter: ClassTables,
    half: ClassTables,
}

static SRS: OnceLock<RotationSystem> = OnceLock::new();

impl RotationSystem {
    /// Build the tables for a named rotation system.
    ///
    /// Only `"SRS"` is supported; any other name is a configuration error.
    pub fn new(name: &str) -> Result<Self> {
        match name {
            "SRS" => Ok(Self::srs()),
            other => Err(CoreError::unsupported_rotation_system(other)),
        }
    }

    /// Process-wide shared instance, built on first use.
    pub fn shared(name: &str) -> Result<&'static RotationSystem> {
        match name {
            "SRS" => Ok(SRS.get_or_init(Self::srs)),
            other => Err(CoreError::unsupported_rotation_system(other)),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Table for a magnitude and shape class
    pub fn table(&self, magnitude: Magnitude, class: KickClass) -> &KickTable {
        match magnitude {
            Magnitude::Quarter => self.quarter.get(class),
            Magnitude::Half => self.half.get(class),
        }
    }

    /// Mutable table access for building custom systems
    pub fn table_mut(&mut self, magnitude: Magnitude, class: KickClass) -> &mut KickTable {
        match magnitude {
            Magnitude::Quarter => self.quarter.get_mut(class),
            Magnitude::Half => self.half.get_mut(class),
        }
    }

    /// Table a piece uses for a rotation action
    pub fn table_for(&self, kind: PieceKind, magnitude: Magnitude) -> &KickTable {
        self.table(magnitude, KickClass::for_piece(kind))
    }

    /// Guideline SRS data, including the 12-offset 180° tables.
    fn srs() -> Self {
        Self {
            name: "SRS".to_string(),
            quarter: ClassTables {
                tszlj: KickTable::from_rows(TSZLJ_KICKS),
                i: KickTable::from_rows(I_KICKS),
                o: KickTable::from_rows(O_KICKS),
            },
            half: ClassTables {
                tszlj: KickTable::from_rows(TSZLJ_180_KICKS),
                i: KickTable::from_rows(I_180_KICKS),
                o: KickTable::from_rows(O_180_KICKS),
            },
        }
    }
}

/// Table rows: (from, to, offsets in try order)
type KickRows = &'static [(i32, i32, &'static [(i32, i32)])];

/// T/S/Z/L/J 90° kicks
const TSZLJ_KICKS: KickRows = &[
    (0, 1, &[(0, 0), (-1, 0), (-1, 1), (0, -2), (-1, -2)]),
    (1, 0, &[(0, 0), (1, 0), (1, -1), (0, 2), (1, 2)]),
    (1, 2, &[(0, 0), (1, 0), (1, -1), (0, 2), (1, 2)]),
    (2, 1, &[(0, 0), (-1, 0), (-1, 1), (0, -2), (-1, -2)]),
    (2, 3, &[(0, 0), (1, 0), (1, 1), (0, -2), (1, -2)]),
    (3, 2, &[(0, 0), (-1, 0), (-1, -1), (0, 2), (-1, 2)]),
    (3, 0, &[(0, 0), (-1, 0), (-1, -1), (0, 2), (-1, 2)]),
    (0, 3, &[(0, 0), (1, 0), (1, 1), (0, -2), (1, -2)]),
];

/// I piece 90° kicks (different from T/S/Z/L/J)
const I_KICKS: KickRows = &[
    (0, 1, &[(0, 0), (-2, 0), (1, 0), (-2, -1), (1, 2)]),
    (1, 0, &[(0, 0), (2, 0), (-1, 0), (2, 1), (-1, -2)]),
    (1, 2, &[(0, 0), (-1, 0), (2, 0), (-1, 2), (2, -1)]),
    (2, 1, &[(0, 0), (1, 0), (-2, 0), (1, -2), (-2, 1)]),
    (2, 3, &[(0, 0), (2, 0), (-1, 0), (2, 1), (-1, -2)]),
    (3, 2, &[(0, 0), (-2, 0), (1, 0), (-2, -1), (1, 2)]),
    (3, 0, &[(0, 0), (1, 0), (-2, 0), (1, -2), (-2, 1)]),
    (0, 3, &[(0, 0), (-1, 0), (2, 0), (-1, 2), (2, -1)]),
];

/// O piece never kicks
const O_KICKS: KickRows = &[
    (0, 1, &[(0, 0)]),
    (1, 0, &[(0, 0)]),
    (1, 2, &[(0, 0)]),
    (2, 1, &[(0, 0)]),
    (2, 3, &[(0, 0)]),
    (3, 2, &[(0, 0)]),
    (3, 0, &[(0, 0)]),
    (0, 3, &[(0, 0)]),
];

/// T/S/Z/L/J 180° kicks, one row per starting state
#[rustfmt::skip]
const TSZLJ_180_KICKS: KickRows = &[
    (0, 2, &[(0, 0), (1, 0), (2, 0), (1, 1), (2, 1), (-1, 0), (-2, 0), (-1, 1), (-2, 1), (0, -1), (3, 0), (-3, 0)]),
    (2, 0, &[(0, 0), (-1, 0), (-2, 0), (-1, -1), (-2, -1), (1, 0), (2, 0), (1, -1), (2, -1), (0, 1), (-3, 0), (3, 0)]),
    (1, 3, &[(0, 0), (0, 1), (0, 2), (-1, 1), (-1, 2), (0, -1), (0, -2), (-1, -1), (-1, -2), (1, 0), (0, 3), (0, -3)]),
    (3, 1, &[(0, 0), (0, 1), (0, 2), (1, 1), (1, 2), (0, -1), (0, -2), (1, -1), (1, -2), (-1, 0), (0, 3), (0, -3)]),
];

/// I piece 180° kicks
const I_180_KICKS: KickRows = &[
    (0, 2, &[(0, 0), (-1, 0), (-2, 0), (1, 0), (2, 0), (0, 1)]),
    (2, 0, &[(0, 0), (1, 0), (2, 0), (-1, 0), (-2, 0), (0, -1)]),
    (1, 3, &[(0, 0), (0, 1), (0, 2), (0, -1), (0, -2), (-1, 0)]),
    (3, 1, &[(0, 0), (0, 1), (0, 2), (0, -1), (0, -2), (1, 0)]),
];

const O_180_KICKS: KickRows = &[
    (0, 2, &[(0, 0)]),
    (2, 0, &[(0, 0)]),
    (1, 3, &[(0, 0)]),
    (3, 1, &[(0, 0)]),
];
