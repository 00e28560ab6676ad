//! Benchmarks for query operations and the order-by engine.
//!
//! Sorting benchmarks use shuffled data so the merge sort does real work.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use microlinq_core::Value;
use microlinq_query::{Query, Sequence};

// ============================================================================
// Data Generation Utilities
// ============================================================================

/// Simple LCG for reproducible pseudo-random shuffling
fn shuffle_indices(count: usize, seed: u64) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..count).collect();
    let mut s = seed;
    for i in (1..count).rev() {
        s = s.wrapping_mul(6364136223846793005).wrapping_add(1);
        let j = (s as usize) % (i + 1);
        indices.swap(i, j);
    }
    indices
}

fn create_shuffled_values(count: usize) -> Vec<Value> {
    shuffle_indices(count, 12345)
        .into_iter()
        .map(|i| Value::Int64(i as i64))
        .collect()
}

fn create_mixed_width_values(count: usize) -> Vec<Value> {
    shuffle_indices(count, 54321)
        .into_iter()
        .map(|i| match i % 3 {
            0 => Value::Int32(i as i32),
            1 => Value::Int64(i as i64),
            _ => Value::Int16((i % 30000) as i16),
        })
        .collect()
}

// ============================================================================
// Lazy Composition Benchmarks
// ============================================================================

fn bench_filter_select(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_select");

    for size in [100, 1000, 10000].iter() {
        let values = create_shuffled_values(*size);
        let threshold = (*size / 2) as i64; // 50% selectivity

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                let pipeline = values
                    .as_slice()
                    .filter(|v: &Value| v.as_i64() > Some(threshold))
                    .select(|v: Value| v.as_i64().unwrap_or(0) * 2);
                black_box(pipeline.items().sum::<i64>())
            })
        });
    }

    group.finish();
}

fn bench_count(c: &mut Criterion) {
    let mut group = c.benchmark_group("count");

    for size in [1000, 10000].iter() {
        let values = create_shuffled_values(*size);

        group.bench_with_input(BenchmarkId::new("direct", size), size, |b, _| {
            b.iter(|| black_box(values.count()))
        });
        group.bench_with_input(BenchmarkId::new("filtered", size), size, |b, _| {
            b.iter(|| black_box(values.as_slice().filter(|_: &Value| true).count()))
        });
    }

    group.finish();
}

fn bench_sum(c: &mut Criterion) {
    let mut group = c.benchmark_group("sum");

    for size in [1000, 10000].iter() {
        let values = create_shuffled_values(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| black_box(values.sum()))
        });
    }

    group.finish();
}

// ============================================================================
// Order-By Benchmarks
// ============================================================================

fn bench_order_by(c: &mut Criterion) {
    let mut group = c.benchmark_group("order_by");

    for size in [100, 1000, 10000].iter() {
        let homogeneous = create_shuffled_values(*size);
        let mixed = create_mixed_width_values(*size);

        group.bench_with_input(BenchmarkId::new("homogeneous", size), size, |b, _| {
            b.iter(|| black_box(homogeneous.order_by()))
        });
        group.bench_with_input(BenchmarkId::new("mixed_widths", size), size, |b, _| {
            b.iter(|| black_box(mixed.order_by()))
        });
        group.bench_with_input(BenchmarkId::new("explicit_comparer", size), size, |b, _| {
            b.iter(|| {
                black_box(homogeneous.order_by_with(|v: &Value| v.as_i64(), |a, b| a.cmp(b)))
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_filter_select,
    bench_count,
    bench_sum,
    bench_order_by,
);

criterion_main!(benches);
