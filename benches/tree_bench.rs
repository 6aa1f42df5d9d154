//! Performance benchmarks

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fringetree::{Count, FringeTree, Minimum};

fn benchmark_edits(c: &mut Criterion) {
    let mut group = c.benchmark_group("edits");
    for n in [100usize, 1_000] {
        group.bench_with_input(BenchmarkId::new("prepend_chain", n), &n, |b, &n| {
            b.iter(|| {
                let mut t = FringeTree::empty(Count);
                for i in 0..n {
                    t = t.prepend(black_box(i));
                }
                t.measure()
            });
        });

        let base = FringeTree::from_values(Minimum::<i64>::new(), 0..n as i64);
        group.bench_with_input(BenchmarkId::new("concat", n), &base, |b, base| {
            b.iter(|| black_box(base.concat(base)).measure());
        });
    }
    group.finish();
}

fn benchmark_queries(c: &mut Criterion) {
    let balanced = FringeTree::from_values(Count, 0..10_000i64);

    c.bench_function("flatten_10000", |b| {
        b.iter(|| black_box(&balanced).flatten().len());
    });

    c.bench_function("view_l_10000", |b| {
        b.iter(|| black_box(&balanced).view_l().is_cons());
    });

    c.bench_function("measure_10000", |b| {
        b.iter(|| black_box(&balanced).measure());
    });
}

criterion_group!(benches, benchmark_edits, benchmark_queries);
criterion_main!(benches);
