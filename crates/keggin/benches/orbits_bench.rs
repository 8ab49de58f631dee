//! Criterion benchmarks for group closure, the invariance check, and orbit enumeration.
//! Zero counts: 1..=6 (C(12, 6) = 924 candidates at the top end).
//! Results: by default under target/criterion.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use keggin::api::{check_invariance, enumerate, rank, Keggin, KegginDistances};

fn bench_group(c: &mut Criterion) {
    let mut group = c.benchmark_group("keggin");
    group.bench_function("build_group", |b| b.iter(|| Keggin::new().unwrap()));

    let k = Keggin::new().unwrap();
    let d = KegginDistances::default();
    group.bench_function("check_invariance", |b| {
        b.iter(|| check_invariance(&k.group, &k.table, &d).unwrap())
    });
    group.finish();
}

fn bench_orbits(c: &mut Criterion) {
    let k = Keggin::new().unwrap();
    let d = KegginDistances::default();
    let mut group = c.benchmark_group("orbits");
    for z in 1..=6usize {
        group.bench_with_input(BenchmarkId::new("enumerate", z), &z, |b, &z| {
            b.iter(|| enumerate(&k.group, &k.table, z).unwrap().count())
        });
        group.bench_with_input(BenchmarkId::new("enumerate_and_rank", z), &z, |b, &z| {
            b.iter(|| {
                let orbits = enumerate(&k.group, &k.table, z).unwrap();
                rank(orbits, &k.table, &d).unwrap().len()
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_group, bench_orbits);
criterion_main!(benches);
