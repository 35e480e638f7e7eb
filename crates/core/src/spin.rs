//! Spin detection for successful rotations
//!
//! - Non-T pieces use the immobility test: a rotation is a spin when the
//!   piece, at its new position, cannot shift one cell in any direction.
//! - The T piece uses the corner test on its 3x3 bounding box. The two
//!   corners on the pointing side are the "front" corners, the opposite two
//!   the "back" corners. Out-of-bounds corners count as filled.
//!
//! Reference: https://four.lol/srs/t-spin

use tracing::info;

use crate::kicks::Transition;
use crate::matrix::Matrix;
use crate::shapes::ShapeGrid;
use crate::types::{PieceKind, Rotation, SpinKind, Vec2};

/// Offset index of the fifth (last) 90° kick
const LAST_QUARTER_KICK: usize = 4;

/// Front corners of the T bounding box for each orientation
fn front_corners(rotation: Rotation) -> [Vec2; 2] {
    match rotation {
        Rotation::North => [Vec2::new(0, 0), Vec2::new(2, 0)],
        Rotation::East => [Vec2::new(2, 0), Vec2::new(2, 2)],
        Rotation::South => [Vec2::new(2, 2), Vec2::new(0, 2)],
        Rotation::West => [Vec2::new(0, 2), Vec2::new(0, 0)],
    }
}

/// Back corners: the front corners of the opposite orientation
fn back_corners(rotation: Rotation) -> [Vec2; 2] {
    front_corners(rotation.rotate_180())
}

const ALL_CORNERS: [Vec2; 4] = [
    Vec2::new(0, 0),
    Vec2::new(2, 0),
    Vec2::new(0, 2),
    Vec2::new(2, 2),
];

/// A corner counts as filled when it is occupied or lies outside the matrix.
fn corner_filled(matrix: &Matrix, cell: Vec2) -> bool {
    !matches!(matrix.get(cell.x, cell.y), Some(None))
}

fn count_filled(matrix: &Matrix, origin: Vec2, corners: &[Vec2]) -> usize {
    corners
        .iter()
        .filter(|&&corner| corner_filled(matrix, origin + corner))
        .count()
}

/// Can the piece still shift one cell left, right, down or up?
pub fn is_immobile(matrix: &Matrix, shape: &ShapeGrid, position: Vec2) -> bool {
    [Vec2::RIGHT, Vec2::LEFT, Vec2::DOWN, Vec2::UP]
        .iter()
        .all(|&dir| matrix.collides(shape, position + dir))
}

/// Corner test for a T piece that just rotated through `transition` using
/// the kick at `offset_index`, landing with its grid origin at `position`.
pub fn t_spin_kind(
    matrix: &Matrix,
    position: Vec2,
    transition: Transition,
    offset_index: usize,
) -> Option<SpinKind> {
    let front = count_filled(matrix, position, &front_corners(transition.to));

    match front {
        2 => {
            if count_filled(matrix, position, &ALL_CORNERS) >= 3 {
                Some(SpinKind::TSpin)
            } else {
                None
            }
        }
        1 => {
            if count_filled(matrix, position, &back_corners(transition.to)) < 2 {
                return None;
            }
            let promoted = offset_index == LAST_QUARTER_KICK
                && (transition == Transition::indices(0, 3)
                    || transition == Transition::indices(2, 1));
            if promoted {
                Some(SpinKind::TSpin)
            } else {
                Some(SpinKind::TSpinMini)
            }
        }
        _ => None,
    }
}

/// Classify a committed rotation.
pub fn classify(
    matrix: &Matrix,
    shape: &ShapeGrid,
    position: Vec2,
    transition: Transition,
    offset_index: usize,
) -> Option<SpinKind> {
    let spin = match shape.kind() {
        PieceKind::T => t_spin_kind(matrix, position, transition, offset_index),
        _ => is_immobile(matrix, shape, position).then_some(SpinKind::Spin),
    };

    if let Some(kind) = spin {
        info!(
            piece = %shape.kind(),
            transition = %transition,
            offset_index,
            spin = %kind,
            "spin detected"
        );
    }
    spin
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix(rows: &[&str]) -> Matrix {
        Matrix::from_ascii(10, 21, rows)
    }

    #[test]
    fn test_back_corners_oppose_front() {
        assert_eq!(back_corners(Rotation::North), front_corners(Rotation::South));
        assert_eq!(back_corners(Rotation::East), [Vec2::new(0, 2), Vec2::new(0, 0)]);
    }

    #[test]
    fn test_out_of_bounds_corner_is_filled() {
        let m = matrix(&[]);
        assert!(corner_filled(&m, Vec2::new(-1, 5)));
        assert!(corner_filled(&m, Vec2::new(10, 5)));
        assert!(corner_filled(&m, Vec2::new(3, 21)));
        // Row 0 is inside the matrix for the corner test
        assert!(!corner_filled(&m, Vec2::new(3, 0)));
    }

    #[test]
    fn test_two_front_and_one_back_is_full() {
        // T pointing up (North) with its box at (3, 17): front corners are
        // (3, 17) and (5, 17), back corners (3, 19) and (5, 19).
        let mut m = matrix(&[]);
        m.set(3, 17, Some(PieceKind::O));
        m.set(5, 17, Some(PieceKind::O));
        m.set(3, 19, Some(PieceKind::O));
        let t = Transition::indices(1, 0);
        assert_eq!(t_spin_kind(&m, Vec2::new(3, 17), t, 0), Some(SpinKind::TSpin));
    }

    #[test]
    fn test_two_front_without_back_is_nothing() {
        let mut m = matrix(&[]);
        m.set(3, 17, Some(PieceKind::O));
        m.set(5, 17, Some(PieceKind::O));
        let t = Transition::indices(1, 0);
        assert_eq!(t_spin_kind(&m, Vec2::new(3, 17), t, 0), None);
    }

    #[test]
    fn test_one_front_two_back_is_mini() {
        let mut m = matrix(&[]);
        m.set(3, 17, Some(PieceKind::O));
        m.set(3, 19, Some(PieceKind::O));
        m.set(5, 19, Some(PieceKind::O));
        let t = Transition::indices(1, 0);
        assert_eq!(t_spin_kind(&m, Vec2::new(3, 17), t, 1), Some(SpinKind::TSpinMini));
    }

    #[test]
    fn test_one_front_one_back_is_nothing() {
        let mut m = matrix(&[]);
        m.set(3, 17, Some(PieceKind::O));
        m.set(3, 19, Some(PieceKind::O));
        let t = Transition::indices(1, 0);
        assert_eq!(t_spin_kind(&m, Vec2::new(3, 17), t, 1), None);
    }

    #[test]
    fn test_mini_promoted_on_last_kick_exceptions() {
        // West-facing T (0->3): front corners (0,2) and (0,0) of the box.
        let mut m = matrix(&[]);
        let origin = Vec2::new(3, 17);
        m.set(3, 17, Some(PieceKind::O)); // front (0, 0)
        m.set(5, 17, Some(PieceKind::O)); // back (2, 0)
        m.set(5, 19, Some(PieceKind::O)); // back (2, 2)

        let t = Transition::indices(0, 3);
        assert_eq!(t_spin_kind(&m, origin, t, 4), Some(SpinKind::TSpin));
        assert_eq!(t_spin_kind(&m, origin, t, 3), Some(SpinKind::TSpinMini));
        // Same corners reached from 2->3 are not an exception
        let other = Transition::indices(2, 3);
        assert_eq!(t_spin_kind(&m, origin, other, 4), Some(SpinKind::TSpinMini));
    }

    #[test]
    fn test_immobility() {
        // S spawn grid minos: (1,0) (2,0) (0,1) (1,1)
        let s = ShapeGrid::spawn(PieceKind::S);
        let open = matrix(&[]);
        assert!(!is_immobile(&open, &s, Vec2::new(3, 10)));

        let pocket = matrix(&[
            "xxx..xxxxx", //
            "xx..xxxxxx", //
            "xxxxxxxxxx",
        ]);
        // Grid origin (2, 18) puts the minos exactly in the pocket.
        assert!(!pocket.collides(&s, Vec2::new(2, 18)));
        assert!(is_immobile(&pocket, &s, Vec2::new(2, 18)));
        assert_eq!(
            classify(&pocket, &s, Vec2::new(2, 18), Transition::indices(2, 1), 0),
            Some(SpinKind::Spin)
        );
    }
}
