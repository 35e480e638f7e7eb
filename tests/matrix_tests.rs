//! Matrix tests - cell access, collision rule and row clearing

use srs_tetris::core::{Matrix, ShapeGrid};
use srs_tetris::types::{PieceKind, Rotation, Vec2, BOARD_HEIGHT, BOARD_WIDTH};

#[test]
fn test_default_matrix_is_empty() {
    let matrix = Matrix::default();
    assert_eq!(matrix.width(), BOARD_WIDTH);
    assert_eq!(matrix.height(), BOARD_HEIGHT);
    assert_eq!(matrix.filled_count(), 0);
    assert_eq!(matrix.rows().count(), BOARD_HEIGHT as usize);
    assert!(matrix.rows().all(|row| row.iter().all(Option::is_none)));
}

#[test]
fn test_get_and_set_respect_bounds() {
    let mut matrix = Matrix::new(6, 8);
    assert!(matrix.set(5, 7, Some(PieceKind::J)));
    assert_eq!(matrix.get(5, 7), Some(Some(PieceKind::J)));
    assert!(matrix.is_occupied(5, 7));

    assert!(!matrix.set(6, 0, Some(PieceKind::J)));
    assert!(!matrix.set(0, 8, Some(PieceKind::J)));
    assert!(!matrix.set(-1, 3, Some(PieceKind::J)));
    assert_eq!(matrix.get(-1, 3), None);
    assert!(matrix.is_out_of_bounds(6, 0));
    assert!(!matrix.is_occupied(6, 0));
}

// ============== Collision ==============

#[test]
fn test_collision_rule_edges() {
    let matrix = Matrix::default();
    let o = ShapeGrid::spawn(PieceKind::O);

    assert!(!matrix.collides(&o, Vec2::new(0, 1)));
    assert!(!matrix.collides(&o, Vec2::new(8, 19)));

    // Row 0 is the spawn buffer
    assert!(matrix.collides(&o, Vec2::new(4, 0)));
    assert!(matrix.collides(&o, Vec2::new(-1, 5)));
    assert!(matrix.collides(&o, Vec2::new(9, 5)));
    assert!(matrix.collides(&o, Vec2::new(4, 20)));
}

#[test]
fn test_empty_grid_cells_never_collide() {
    let matrix = Matrix::from_ascii(10, 21, &["xxxxxxxxxx"]);
    // Vertical I in column 2 of its grid; the rest of the 4x4 box may
    // hang past the wall and over the filled floor row.
    let i = ShapeGrid::oriented(PieceKind::I, Rotation::East);
    assert!(!matrix.collides(&i, Vec2::new(7, 16)));
    assert!(!matrix.collides(&i, Vec2::new(-2, 1)));
    assert!(matrix.collides(&i, Vec2::new(7, 17)));
}

#[test]
fn test_occupied_cell_collides() {
    let mut matrix = Matrix::default();
    let t = ShapeGrid::spawn(PieceKind::T);
    assert!(!matrix.collides(&t, Vec2::new(3, 5)));
    matrix.set(4, 5, Some(PieceKind::Z));
    assert!(matrix.collides(&t, Vec2::new(3, 5)));
    assert!(!matrix.collides(&t, Vec2::new(4, 5)));
}

// ============== Row Clearing ==============

#[test]
fn test_clear_full_rows_shifts_down() {
    let mut matrix = Matrix::from_ascii(
        10,
        21,
        &[
            "j.........", //
            "xxxxxxxxxx", //
            ".s........", //
            "xxxxxxxxxx",
        ],
    );
    assert!(matrix.is_row_full(18));
    assert!(!matrix.is_row_full(19));

    assert_eq!(matrix.clear_full_rows(), vec![20, 18]);
    assert_eq!(matrix.filled_count(), 2);
    assert_eq!(matrix.get(1, 20), Some(Some(PieceKind::S)));
    assert_eq!(matrix.get(0, 19), Some(Some(PieceKind::J)));
    assert_eq!(matrix.get(0, 17), Some(None));
}

#[test]
fn test_clear_with_no_full_rows() {
    let mut matrix = Matrix::from_ascii(10, 21, &["xxxxxxxxx."]);
    let before = matrix.clone();
    assert!(matrix.clear_full_rows().is_empty());
    assert_eq!(matrix, before);
}

#[test]
fn test_more_than_four_rows_clear() {
    let mut matrix = Matrix::from_ascii(10, 21, &["xxxxxxxxxx"; 6]);
    assert_eq!(matrix.clear_full_rows().len(), 6);
    assert_eq!(matrix.filled_count(), 0);
}

#[test]
fn test_clear_resets_both_layers() {
    let mut matrix = Matrix::from_ascii(10, 21, &["zz........"]);
    matrix.clear();
    assert_eq!(matrix.filled_count(), 0);
    assert_eq!(matrix, Matrix::default());
}
