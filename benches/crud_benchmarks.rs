use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use tandem_map::{GuardedMap, KeyedCollection, OpenMap};

const N: usize = 1_000;

// ─── Helper functions to generate key sequences ─────────────────────────────

fn keys(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("key{i}")).collect()
}

// ─── Add benchmarks ─────────────────────────────────────────────────────────

fn bench_add(c: &mut Criterion) {
    let keys = keys(N);
    let mut group = c.benchmark_group("add");

    group.bench_function(BenchmarkId::new("OpenMap", N), |b| {
        b.iter(|| {
            let mut map = OpenMap::new();
            for (i, key) in keys.iter().enumerate() {
                map.add(key, i as i64).unwrap();
            }
            map
        });
    });

    group.bench_function(BenchmarkId::new("GuardedMap", N), |b| {
        b.iter(|| {
            let mut map = GuardedMap::new();
            for (i, key) in keys.iter().enumerate() {
                map.add(key, i as i64).unwrap();
            }
            map
        });
    });

    group.finish();
}

// ─── Get benchmarks ─────────────────────────────────────────────────────────

fn bench_get(c: &mut Criterion) {
    let keys = keys(N);
    let mut open = OpenMap::new();
    let mut guarded = GuardedMap::new();
    for (i, key) in keys.iter().enumerate() {
        open.add(key, i as i64).unwrap();
        guarded.add(key, i as i64).unwrap();
    }

    let mut group = c.benchmark_group("get");

    group.bench_function(BenchmarkId::new("OpenMap", N), |b| {
        b.iter(|| {
            let mut sum = 0i64;
            for key in &keys {
                sum += open.get(key).unwrap();
            }
            sum
        });
    });

    group.bench_function(BenchmarkId::new("GuardedMap", N), |b| {
        b.iter(|| {
            let mut sum = 0i64;
            for key in &keys {
                sum += guarded.get(key).unwrap();
            }
            sum
        });
    });

    group.finish();
}

// ─── Remove benchmarks ──────────────────────────────────────────────────────

fn bench_remove(c: &mut Criterion) {
    let keys = keys(N);
    let mut open = OpenMap::new();
    let mut guarded = GuardedMap::new();
    for (i, key) in keys.iter().enumerate() {
        open.add(key, i as i64).unwrap();
        guarded.add(key, i as i64).unwrap();
    }

    let mut group = c.benchmark_group("remove");

    group.bench_function(BenchmarkId::new("OpenMap", N), |b| {
        b.iter_batched(
            || open.clone(),
            |mut map| {
                for key in &keys {
                    map.remove(key).unwrap();
                }
                map
            },
            criterion::BatchSize::SmallInput,
        );
    });

    group.bench_function(BenchmarkId::new("GuardedMap", N), |b| {
        b.iter_batched(
            || guarded.clone(),
            |mut map| {
                for key in &keys {
                    map.remove(key).unwrap();
                }
                map
            },
            criterion::BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_add, bench_get, bench_remove);
criterion_main!(benches);
