//! Criterion micro-benchmarks for neighbour resolution.

use criterion::{criterion_group, criterion_main, Criterion};
use smallvec::smallvec;
use std::hint::black_box;
use tessera_space::{BoundaryPolicy, Line1D, Space, Square8};

/// Benchmark: neighbours() on all 10K cells of a 100x100 Square8, per policy.
fn bench_neighbours_square8_10k(c: &mut Criterion) {
    for policy in [
        BoundaryPolicy::Periodic,
        BoundaryPolicy::Absorbing,
        BoundaryPolicy::Reflective,
    ] {
        let space = Square8::new(100, 100, policy).unwrap();
        c.bench_function(&format!("neighbours_square8_10k_{policy}"), |b| {
            b.iter(|| {
                for r in 0..100i32 {
                    for col in 0..100i32 {
                        let coord = smallvec![r, col];
                        let n = space.neighbours(&coord);
                        black_box(&n);
                    }
                }
            });
        });
    }
}

/// Benchmark: index slots for every cell, the path the sweep takes.
fn bench_index_slots_square8_10k(c: &mut Criterion) {
    let space = Square8::new(100, 100, BoundaryPolicy::Periodic).unwrap();
    c.bench_function("index_slots_square8_10k", |b| {
        b.iter(|| {
            for i in 0..space.cell_count() {
                black_box(space.neighbour_index_slots(i, BoundaryPolicy::Periodic));
            }
        });
    });
}

/// Benchmark: index slots on a 10K-cell line.
fn bench_index_slots_line_10k(c: &mut Criterion) {
    let space = Line1D::new(10_000, BoundaryPolicy::Absorbing).unwrap();
    c.bench_function("index_slots_line_10k", |b| {
        b.iter(|| {
            for i in 0..space.cell_count() {
                black_box(space.neighbour_index_slots(i, BoundaryPolicy::Absorbing));
            }
        });
    });
}

criterion_group!(
    benches,
    bench_neighbours_square8_10k,
    bench_index_slots_square8_10k,
    bench_index_slots_line_10k
);
criterion_main!(benches);
