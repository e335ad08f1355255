//! Rules Engine Benchmarks
//!
//! Performance benchmarks for legality checks and move application using Criterion.

use chess_rules::{
    attempt_move, is_square_attacked, legal_moves, reset_to_starting_position, Color,
    MoveHistory, Square,
};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_reset(c: &mut Criterion) {
    c.bench_function("reset_to_starting_position", |b| {
        b.iter(|| black_box(reset_to_starting_position()))
    });
}

fn bench_legal_moves_starting(c: &mut Criterion) {
    let board = reset_to_starting_position();
    let history = MoveHistory::new();

    c.bench_function("legal_moves_starting_position", |b| {
        b.iter(|| black_box(legal_moves(&board, Color::Light, &history)))
    });
}

fn bench_legal_moves_both_colors(c: &mut Criterion) {
    let board = reset_to_starting_position();
    let history = MoveHistory::new();

    c.bench_function("legal_moves_both_colors", |b| {
        b.iter(|| {
            let light = legal_moves(&board, Color::Light, &history).map(|moves| moves.len());
            let dark = legal_moves(&board, Color::Dark, &history).map(|moves| moves.len());
            black_box((light, dark))
        })
    });
}

fn bench_square_attacked(c: &mut Criterion) {
    let board = reset_to_starting_position();
    let center = Square::new(4, 4).expect("valid square");

    c.bench_function("is_square_attacked_center", |b| {
        b.iter(|| black_box(is_square_attacked(&board, center, Color::Dark)))
    });
}

fn bench_attempt_move_cycle(c: &mut Criterion) {
    let e2 = Square::new(6, 4).expect("valid square");
    let e4 = Square::new(4, 4).expect("valid square");

    c.bench_function("attempt_move_cycle", |b| {
        b.iter(|| {
            let mut board = reset_to_starting_position();
            let mut history = MoveHistory::new();
            let pawn = board.piece_at(e2);
            let outcome =
                pawn.map(|pawn| attempt_move(&mut board, &mut history, pawn, e2, e4, None));
            black_box(outcome)
        })
    });
}

criterion_group!(
    benches,
    bench_reset,
    bench_legal_moves_starting,
    bench_legal_moves_both_colors,
    bench_square_attacked,
    bench_attempt_move_cycle,
);
criterion_main!(benches);
