//! Criterion micro-benchmarks for list operations.
//!
//! `append_one` pins the O(n) single-append contract: the measured time
//! should scale linearly with the input length. `build_by_append` shows
//! the resulting O(n²) list-literal construction cost.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ort_bench::build_by_append;
use ort_collections::List;

fn bench_append_one(c: &mut Criterion) {
    let mut group = c.benchmark_group("list/append_one");
    for length in [10u32, 100, 1_000] {
        let list = build_by_append(length);
        group.bench_with_input(BenchmarkId::from_parameter(length), &list, |b, list| {
            b.iter(|| black_box(list.append(black_box(length))));
        });
    }
    group.finish();
}

fn bench_build_by_append(c: &mut Criterion) {
    let mut group = c.benchmark_group("list/build_by_append");
    for length in [10u32, 100, 1_000] {
        group.bench_with_input(
            BenchmarkId::from_parameter(length),
            &length,
            |b, &length| {
                b.iter(|| black_box(build_by_append(length)));
            },
        );
    }
    group.finish();
}

fn bench_replicate(c: &mut Criterion) {
    c.bench_function("list/replicate_1000", |b| {
        b.iter(|| black_box(List::replicate(black_box(7u32), 1_000)));
    });
}

fn bench_to_array(c: &mut Criterion) {
    let list = build_by_append(1_000);
    c.bench_function("list/to_array_1000", |b| {
        b.iter(|| black_box(list.to_array()));
    });
}

fn bench_tail(c: &mut Criterion) {
    let list = build_by_append(1_000);
    c.bench_function("list/tail_1000", |b| {
        b.iter(|| black_box(list.tail()));
    });
}

criterion_group!(
    benches,
    bench_append_one,
    bench_build_by_append,
    bench_replicate,
    bench_to_array,
    bench_tail,
);
criterion_main!(benches);
