//! Benchmarks for the arrow puzzle solver.
//!
//! Measures the full two-pass solve and the plan enumeration.

use arrowbot_solver::{cells, solve, Board};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn scrambled_board(seed: i32) -> Board {
    let mut board = Board::new();
    for (x, y) in cells() {
        board.set(x, y, ((x * seed + y * 5 + 1) % 6) as u8);
    }
    board
}

fn bench_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve");

    for seed in [1, 7, 13] {
        let board = scrambled_board(seed);
        group.bench_with_input(BenchmarkId::from_parameter(seed), &board, |b, board| {
            b.iter(|| solve(black_box(board)))
        });
    }
    group.finish();
}

fn bench_plan_iteration(c: &mut Criterion) {
    let plan = solve(&scrambled_board(1));
    c.bench_function("plan_iteration", |b| {
        b.iter(|| black_box(&plan).iter().map(|c| u32::from(c.count)).sum::<u32>())
    });
}

criterion_group!(benches, bench_solve, bench_plan_iteration);
criterion_main!(benches);
