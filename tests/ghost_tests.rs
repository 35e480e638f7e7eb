//! Ghost projection, hard drop and locking

use srs_tetris::core::{Layer, Matrix, Tetromino};
use srs_tetris::types::{GameAction, PieceKind, Rotation, Vec2};

#[test]
fn test_ghost_lands_on_floor() {
    let mut matrix = Matrix::default();
    let mut piece = Tetromino::new(PieceKind::T, Rotation::North, 4, 2);
    let start = piece.position();

    let landing = piece.ghost(&mut matrix);
    assert_eq!(landing, Vec2::new(3, 19));
    assert_eq!(piece.ghost_position(), landing);
    assert_eq!(piece.position(), start);

    assert_eq!(matrix.ghost(4, 19), Some(Some(PieceKind::T)));
    for x in 3..=5 {
        assert_eq!(matrix.ghost(x, 20), Some(Some(PieceKind::T)));
    }
    // Ghost cells never leak into the settled layer
    assert_eq!(matrix.filled_count(), 0);
}

#[test]
fn test_ghost_lands_on_stack() {
    let mut matrix = Matrix::from_ascii(10, 21, &["....xx...."]);
    let mut piece = Tetromino::new(PieceKind::T, Rotation::North, 4, 2);
    assert_eq!(piece.ghost(&mut matrix), Vec2::new(3, 18));
}

#[test]
fn test_ghost_is_idempotent() {
    let mut matrix = Matrix::from_ascii(10, 21, &["..x.......", "xxxx..xxxx"]);
    let mut piece = Tetromino::new(PieceKind::L, Rotation::West, 3, 3);

    let first = piece.ghost(&mut matrix);
    let after_first = matrix.clone();
    let second = piece.ghost(&mut matrix);

    assert_eq!(first, second);
    assert_eq!(matrix, after_first);
}

#[test]
fn test_ghost_follows_piece() {
    let mut matrix = Matrix::default();
    let mut piece = Tetromino::new(PieceKind::O, Rotation::North, 0, 2);
    piece.ghost(&mut matrix);
    assert_eq!(matrix.ghost(0, 20), Some(Some(PieceKind::O)));

    assert!(piece.try_move(GameAction::MoveRight, &matrix).unwrap());
    assert!(piece.try_move(GameAction::MoveRight, &matrix).unwrap());
    piece.ghost(&mut matrix);

    // Old preview is gone, new one is in place
    assert_eq!(matrix.ghost(0, 20), Some(None));
    assert_eq!(matrix.ghost(2, 20), Some(Some(PieceKind::O)));
    assert_eq!(matrix.ghost(3, 19), Some(Some(PieceKind::O)));
}

#[test]
fn test_ghost_does_not_block_movement() {
    let mut matrix = Matrix::default();
    let mut piece = Tetromino::new(PieceKind::I, Rotation::North, 4, 2);
    let landing = piece.ghost(&mut matrix);

    while piece.try_move(GameAction::SoftDrop, &matrix).unwrap() {}
    assert_eq!(piece.position(), landing);
}

#[test]
fn test_blocked_piece_leaves_empty_ghost_layer() {
    let mut matrix = Matrix::default();
    let mut piece = Tetromino::new(PieceKind::O, Rotation::North, 4, 10);
    piece.ghost(&mut matrix);

    assert!(matrix.set(4, 10, Some(PieceKind::Z)));
    piece.ghost(&mut matrix);
    assert!((0..21).all(|y| (0..10).all(|x| matrix.ghost(x, y) == Some(None))));
}

// ============== Hard Drop & Lock ==============

#[test]
fn test_hard_drop_matches_ghost() {
    let mut matrix = Matrix::from_ascii(10, 21, &["...x......", "..xx......"]);
    let mut piece = Tetromino::new(PieceKind::J, Rotation::North, 4, 2);
    let landing = piece.ghost(&mut matrix);

    let rows = piece.hard_drop(&matrix);
    assert_eq!(piece.position(), landing);
    assert_eq!(rows, (landing.y - 1) as u32);
}

#[test]
fn test_lock_writes_settled_cells() {
    let mut matrix = Matrix::default();
    let mut piece = Tetromino::new(PieceKind::S, Rotation::North, 4, 2);
    piece.hard_drop(&matrix);

    assert!(piece.lock(&mut matrix));
    assert_eq!(matrix.filled_count(), 4);
    for cell in piece.cells() {
        assert_eq!(matrix.get(cell.x, cell.y), Some(Some(PieceKind::S)));
    }
}

#[test]
fn test_lock_refuses_overlap() {
    let mut matrix = Matrix::default();
    let piece = Tetromino::new(PieceKind::O, Rotation::North, 4, 10);
    assert!(matrix.set(5, 11, Some(PieceKind::I)));

    assert!(!piece.lock(&mut matrix));
    assert_eq!(matrix.filled_count(), 1);
}

#[test]
fn test_insert_blocks_into_ghost_layer() {
    let mut matrix = Matrix::default();
    let piece = Tetromino::new(PieceKind::Z, Rotation::North, 4, 2);
    assert!(matrix.insert_blocks(piece.blocks(), piece.position(), Layer::Ghost));
    assert_eq!(matrix.filled_count(), 0);
    matrix.clear_ghost();
    assert_eq!(matrix.ghost(3, 1), Some(None));
}
