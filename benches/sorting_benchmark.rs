use attrsort::prelude::*;
use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use rand::Rng;
use std::hint::black_box;

fn bench_integers(c: &mut Criterion) {
    let mut group = c.benchmark_group("Integer Sort");
    group.sample_size(10);

    // Dataset generation
    let mut rng = rand::rng();
    let count = 10_000;

    let random_ints: Vec<i64> = (0..count).map(|_| rng.random_range(0..1_000_000)).collect();

    group.bench_function("quick_sort", |b| {
        b.iter_batched(
            || random_ints.clone(),
            |mut data| quick_sort(black_box(&mut data), |a, b| a.cmp(b)),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("merge_sort", |b| {
        b.iter_batched(
            || random_ints.clone(),
            |mut data| merge_sort(black_box(&mut data), |a, b| a.cmp(b)),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("shellsort", |b| {
        b.iter_batched(
            || random_ints.clone(),
            |mut data| shellsort(black_box(&mut data), |a, b| a.cmp(b)),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("radix_sort", |b| {
        b.iter_batched(
            || random_ints.clone(),
            |mut data| radix_sort(black_box(&mut data)),
            BatchSize::SmallInput,
        )
    });

    // Std Sort (Stable)
    group.bench_function("slice::sort (stable)", |b| {
        b.iter_batched(
            || random_ints.clone(),
            |mut data| data.sort(),
            BatchSize::SmallInput,
        )
    });

    // Std Sort Unstable
    group.bench_function("slice::sort_unstable", |b| {
        b.iter_batched(
            || random_ints.clone(),
            |mut data| data.sort_unstable(),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

fn bench_selection(c: &mut Criterion) {
    let mut group = c.benchmark_group("Selection Sort");
    group.sample_size(10);

    // Quadratic, so a much smaller input.
    let mut rng = rand::rng();
    let input: Vec<i64> = (0..1_000).map(|_| rng.random_range(0..1_000_000)).collect();

    group.bench_function("selectionsort", |b| {
        b.iter_batched(
            || input.clone(),
            |mut data| selectionsort(black_box(&mut data), |a, b| a.cmp(b)),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("slice::sort_unstable", |b| {
        b.iter_batched(
            || input.clone(),
            |mut data| data.sort_unstable(),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(benches, bench_integers, bench_selection);
criterion_main!(benches);
