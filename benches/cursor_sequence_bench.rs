//! CursorSequence benchmarks.
//!
//! Compares appending through `insert_after` with front insertion through
//! `insert_before` (which shifts every item), plus a full cursor traversal.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use dense_collections::dense::CursorSequence;
use std::hint::black_box;

const SIZES: [i32; 3] = [100, 1000, 10000];

fn benchmark_insertion(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("cursor_sequence_insert");

    for size in SIZES {
        group.bench_with_input(BenchmarkId::new("insert_after", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut sequence = CursorSequence::new();
                for value in 0..size {
                    sequence.insert_after(black_box(value));
                }
                black_box(sequence)
            });
        });

        group.bench_with_input(BenchmarkId::new("insert_before", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut sequence = CursorSequence::new();
                for value in 0..size {
                    sequence.insert_before(black_box(value));
                }
                black_box(sequence)
            });
        });
    }

    group.finish();
}

fn benchmark_traversal(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("cursor_sequence_traversal");

    for size in SIZES {
        let mut sequence: CursorSequence<i32> = (0..size).collect();
        group.bench_with_input(BenchmarkId::new("start_advance", size), &size, |bencher, _| {
            bencher.iter(|| {
                let mut total = 0i64;
                sequence.start();
                while let Some(&item) = sequence.current() {
                    total += i64::from(item);
                    let _ = sequence.advance();
                }
                black_box(total)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_insertion, benchmark_traversal);

criterion_main!(benches);
