//! Benchmarks for growable and notifying arrays.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use microlinq_collection::{GrowableArray, NotifyingArray};

fn bench_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("add");

    for size in [100, 1000, 10000].iter() {
        group.bench_with_input(BenchmarkId::new("growable", size), size, |b, &size| {
            b.iter(|| {
                let mut array = GrowableArray::with_capacity(0);
                for i in 0..size {
                    array.add(i);
                }
                black_box(array)
            })
        });
        group.bench_with_input(BenchmarkId::new("notifying", size), size, |b, &size| {
            b.iter(|| {
                let mut array = NotifyingArray::<i32>::with_capacity(0);
                array.subscribe(|items, event| {
                    black_box((items.len(), event));
                });
                for i in 0..size {
                    array.add(i);
                }
                black_box(array)
            })
        });
    }

    group.finish();
}

fn bench_insert_front(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_front");

    for size in [100, 1000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter_batched(
                || GrowableArray::with_capacity(size),
                |mut array| {
                    for i in 0..size {
                        array.insert(0, i);
                    }
                    black_box(array)
                },
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

criterion_group!(benches, bench_add, bench_insert_front);

criterion_main!(benches);
