// SPDX-License-Identifier: AGPL-3.0-only

//! Criterion benches: seed summation cost vs full search cost.
//!
//! The seed summation dominates the search, so the two curves should sit
//! close together; a widening gap means the refinement walk regressed.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hseries::search::{threshold_search, SearchConfig};
use hseries::series::harmonic_sum;

fn bench_seed_summation(c: &mut Criterion) {
    c.bench_function("harmonic_sum_1e6", |b| {
        b.iter(|| harmonic_sum(black_box(1_000_000)))
    });
}

fn bench_search(c: &mut Criterion) {
    let config = SearchConfig::default();
    c.bench_function("threshold_search_m10", |b| {
        b.iter(|| threshold_search(black_box(10.0), &config))
    });
    c.bench_function("threshold_search_m14", |b| {
        b.iter(|| threshold_search(black_box(14.0), &config))
    });
}

criterion_group!(benches, bench_seed_summation, bench_search);
criterion_main!(benches);
