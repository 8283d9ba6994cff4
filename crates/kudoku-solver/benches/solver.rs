//! Benchmarks for the single-candidate solver.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench solver
//! ```

use std::hint;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use kudoku_core::Puzzle;
use kudoku_solver::{samples::PUZZLE_SOLUTION_PAIRS, solve};

fn bench_solve_samples(c: &mut Criterion) {
    for (index, (puzzle, _)) in PUZZLE_SOLUTION_PAIRS.iter().enumerate() {
        let parsed: Puzzle = puzzle.parse().unwrap();
        c.bench_with_input(BenchmarkId::new("solve", index), &parsed, |b, parsed| {
            b.iter(|| {
                let solved = solve(hint::black_box(parsed)).unwrap();
                hint::black_box(solved)
            });
        });
    }
}

fn bench_parse(c: &mut Criterion) {
    let (puzzle, _) = PUZZLE_SOLUTION_PAIRS[0];
    c.bench_function("parse", |b| {
        b.iter(|| {
            let parsed: Puzzle = hint::black_box(puzzle).parse().unwrap();
            hint::black_box(parsed)
        });
    });
}

criterion_group!(benches, bench_solve_samples, bench_parse);
criterion_main!(benches);
