//! Micro-benchmarks for board parsing and validation.
//!
//! This benchmark suite measures the cost of moving a board through the
//! text codec and of a full consistency scan over its 27 groups.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench validation
//! ```

use std::hint;

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use ninewise_core::Board;

const SOLVED: &str = "\
1 2 3 4 5 6 7 8 9
4 5 6 7 8 9 1 2 3
7 8 9 1 2 3 4 5 6
2 3 4 5 6 7 8 9 1
5 6 7 8 9 1 2 3 4
8 9 1 2 3 4 5 6 7
3 4 5 6 7 8 9 1 2
6 7 8 9 1 2 3 4 5
9 1 2 3 4 5 6 7 8
";

const PUZZLE: &str = "\
5 3 . . 7 . . . .
6 . . 1 9 5 . . .
. 9 8 . . . . 6 .
8 . . . 6 . . . 3
4 . . 8 . 3 . . 1
7 . . . 2 . . . 6
. 6 . . . . 2 8 .
. . . 4 1 9 . . 5
. . . . 8 . . 7 9
";

fn bench_parse(c: &mut Criterion) {
    let inputs = [("solved", SOLVED), ("puzzle", PUZZLE)];

    for (param, input) in inputs {
        c.bench_with_input(BenchmarkId::new("parse", param), &input, |b, input| {
            b.iter(|| {
                let board: Board = hint::black_box(input).parse().unwrap();
                hint::black_box(board)
            });
        });
    }
}

fn bench_render(c: &mut Criterion) {
    let boards = [
        ("solved", SOLVED.parse::<Board>().unwrap()),
        ("blank", Board::all_blank()),
    ];

    for (param, board) in boards {
        c.bench_with_input(BenchmarkId::new("render", param), &board, |b, board| {
            b.iter(|| hint::black_box(board.render()));
        });
    }
}

fn bench_is_consistent(c: &mut Criterion) {
    let boards = [
        ("solved", SOLVED.parse::<Board>().unwrap()),
        ("puzzle", PUZZLE.parse::<Board>().unwrap()),
        ("blank", Board::all_blank()),
    ];

    for (param, board) in boards {
        c.bench_with_input(
            BenchmarkId::new("is_consistent", param),
            &board,
            |b, board| {
                b.iter_batched_ref(
                    || hint::black_box(board.clone()),
                    |board| hint::black_box(board.is_consistent()),
                    BatchSize::SmallInput,
                );
            },
        );
    }
}

criterion_group!(benches, bench_parse, bench_render, bench_is_consistent);
criterion_main!(benches);
