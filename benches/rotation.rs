use criterion::{black_box, criterion_group, criterion_main, Criterion};
use srs_tetris::core::{Matrix, RotationSystem, ShapeGrid, Tetromino};
use srs_tetris::types::{GameAction, PieceKind, Rotation, Vec2};

fn bench_rotate_open(c: &mut Criterion) {
    let srs = RotationSystem::shared("SRS").unwrap();
    let matrix = Matrix::default();
    let mut piece = Tetromino::new(PieceKind::T, Rotation::North, 5, 10);

    c.bench_function("try_rotate_open", |b| {
        b.iter(|| {
            piece
                .try_rotate(black_box(GameAction::RotateCw), &matrix, srs)
                .unwrap()
        })
    });
}

fn bench_rotate_last_kick(c: &mut Criterion) {
    let srs = RotationSystem::shared("SRS").unwrap();
    let mut matrix = Matrix::default();
    for (x, y) in [(3, 17), (3, 19), (5, 19), (4, 15), (5, 15)] {
        matrix.set(x, y, Some(PieceKind::O));
    }
    let start = Tetromino::new(PieceKind::T, Rotation::South, 5, 16);

    c.bench_function("try_rotate_fifth_kick_t_spin", |b| {
        b.iter(|| {
            let mut piece = start;
            piece
                .try_rotate(black_box(GameAction::RotateCcw), &matrix, srs)
                .unwrap()
        })
    });
}

fn bench_rotate_180(c: &mut Criterion) {
    let srs = RotationSystem::shared("SRS").unwrap();
    let matrix = Matrix::from_ascii(10, 21, &["xxxxx.xxxx"; 4]);
    let start = Tetromino::new(PieceKind::I, Rotation::East, 4, 18);

    c.bench_function("try_rotate_180_rejected", |b| {
        b.iter(|| {
            let mut piece = start;
            piece
                .try_rotate(black_box(GameAction::Rotate180), &matrix, srs)
                .unwrap()
        })
    });
}

fn bench_ghost(c: &mut Criterion) {
    let mut matrix = Matrix::from_ascii(10, 21, &["x...x....x", "xx.xxx.xxx"]);
    let mut piece = Tetromino::new(PieceKind::L, Rotation::North, 4, 2);

    c.bench_function("ghost_projection", |b| {
        b.iter(|| black_box(piece.ghost(&mut matrix)))
    });
}

fn bench_collides(c: &mut Criterion) {
    let matrix = Matrix::from_ascii(10, 21, &["xxxxx.xxxx"; 8]);
    let shape = ShapeGrid::oriented(PieceKind::I, Rotation::East);

    c.bench_function("collides", |b| {
        b.iter(|| matrix.collides(black_box(&shape), black_box(Vec2::new(3, 13))))
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_rows", |b| {
        b.iter(|| {
            let mut matrix = Matrix::from_ascii(10, 21, &["xxxxxxxxxx"; 4]);
            matrix.clear_full_rows()
        })
    });
}

criterion_group!(
    benches,
    bench_rotate_open,
    bench_rotate_last_kick,
    bench_rotate_180,
    bench_ghost,
    bench_collides,
    bench_line_clear
);
criterion_main!(benches);
