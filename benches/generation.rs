//! Generation and serialization throughput

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use matgen::{MatrixFactory, MatrixMarketIO, MatrixSpec};

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");

    for &n in &[100usize, 1_000, 10_000] {
        group.bench_with_input(BenchmarkId::new("laplace1d", n), &n, |b, &n| {
            let factory = MatrixFactory::new(0);
            b.iter(|| black_box(factory.build_1d_laplace(n).unwrap()))
        });

        let side = (n as f64).sqrt() as usize;
        group.bench_with_input(BenchmarkId::new("laplace2d", n), &side, |b, &side| {
            let factory = MatrixFactory::new(0);
            b.iter(|| black_box(factory.build_2d_laplace(side, side).unwrap()))
        });
    }

    for &n in &[100usize, 1_000] {
        group.bench_with_input(BenchmarkId::new("random", n), &n, |b, &n| {
            let mut factory = MatrixFactory::new(42);
            b.iter(|| black_box(factory.build_random_sparse(n, 0.05).unwrap()))
        });
    }

    group.finish();
}

fn bench_write(c: &mut Criterion) {
    let matrix = MatrixFactory::new(0)
        .build(&MatrixSpec::Laplace2d { nx: 100, ny: 100 })
        .unwrap();

    c.bench_function("write_laplace2d_100x100", |b| {
        b.iter(|| {
            let mut buf = Vec::with_capacity(1 << 20);
            MatrixMarketIO::write_to(&mut buf, &matrix).unwrap();
            black_box(buf)
        })
    });
}

criterion_group!(benches, bench_build, bench_write);
criterion_main!(benches);
