use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use dynarray::DynArray;

fn bench_sequential_push_back(c: &mut Criterion) {
    let mut group = c.benchmark_group("sequential_push_back");

    for size in [10, 100, 1000, 10000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("from_empty", size), size, |b, &size| {
            b.iter(|| {
                let mut array = DynArray::new();
                for i in 0..size {
                    array.push_back(black_box(i as u64)).unwrap();
                }
                black_box(array.len())
            });
        });
        group.bench_with_input(BenchmarkId::new("reserved", size), size, |b, &size| {
            b.iter(|| {
                let mut array = DynArray::new();
                array.reserve(size).unwrap();
                for i in 0..size {
                    array.push_back(black_box(i as u64)).unwrap();
                }
                black_box(array.len())
            });
        });
    }
    group.finish();
}

fn bench_random_access(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_access");

    for size in [100, 1000].iter() {
        let array: DynArray<u64> = (0..*size as u64).collect();

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("at", size), size, |b, &size| {
            b.iter(|| {
                for i in 0..size {
                    black_box(array.at(i).ok());
                }
            });
        });
        group.bench_with_input(BenchmarkId::new("index", size), size, |b, &size| {
            b.iter(|| {
                for i in 0..size {
                    black_box(array[i]);
                }
            });
        });
    }
    group.finish();
}

fn bench_iterator_performance(c: &mut Criterion) {
    let mut group = c.benchmark_group("iterator");

    for size in [100, 1000].iter() {
        let array: DynArray<u64> = (0..*size as u64).collect();

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("forward", size), size, |b, _| {
            b.iter(|| {
                for item in black_box(&array) {
                    black_box(item);
                }
            });
        });
        group.bench_with_input(BenchmarkId::new("reverse", size), size, |b, _| {
            b.iter(|| {
                for item in black_box(&array).iter_rev() {
                    black_box(item);
                }
            });
        });
    }
    group.finish();
}

fn bench_resize_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("resize");

    group.bench_function("resize_within_capacity", |b| {
        let mut array: DynArray<u64> = DynArray::with_len(1000).unwrap();
        b.iter(|| {
            array.resize(black_box(10)).unwrap();
            array.resize(black_box(1000)).unwrap();
        });
    });

    group.bench_function("resize_with_value_grow", |b| {
        b.iter(|| {
            let mut array: DynArray<u64> = DynArray::new();
            array.resize_with_value(black_box(1000), 7).unwrap();
            black_box(array.len())
        });
    });

    group.bench_function("shrink_to_fit", |b| {
        b.iter(|| {
            let mut array: DynArray<u64> = DynArray::with_len(1000).unwrap();
            array.resize(500).unwrap();
            array.shrink_to_fit().unwrap();
            black_box(array.capacity())
        });
    });

    group.finish();
}

fn bench_comparison(c: &mut Criterion) {
    let left: DynArray<u64> = (0..1000).collect();
    let right: DynArray<u64> = (0..1000).collect();

    c.bench_function("compare_equal_1000", |b| {
        b.iter(|| black_box(&left) == black_box(&right));
    });
}

criterion_group!(
    benches,
    bench_sequential_push_back,
    bench_random_access,
    bench_iterator_performance,
    bench_resize_operations,
    bench_comparison
);
criterion_main!(benches);
