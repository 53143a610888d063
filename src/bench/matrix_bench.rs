use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rmatrix::Matrix;
use std::hint::black_box;

fn bench_matmul(c: &mut Criterion) {
    let mut group = c.benchmark_group("matmul");
    group.sample_size(10);

    for size in [64, 128, 256] {
        let a = Matrix::<f64>::random(size, size);
        let b = Matrix::<f64>::random(size, size);

        group.bench_with_input(BenchmarkId::new("ijk", size), &size, |bench, _| {
            bench.iter(|| black_box(a.matmul(black_box(&b))))
        });
    }

    group.finish();
}

fn bench_transpose(c: &mut Criterion) {
    let mut group = c.benchmark_group("transpose");

    for size in [256, 1024] {
        let m = Matrix::<f32>::random(size, size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |bench, _| {
            bench.iter(|| black_box(m.transpose()))
        });
    }

    group.finish();
}

fn bench_elementwise(c: &mut Criterion) {
    let mut group = c.benchmark_group("elementwise");
    let size = 1024;
    let a = Matrix::<f64>::random(size, size);
    let b = Matrix::<f64>::random(size, size);

    group.bench_function("add", |bench| bench.iter(|| black_box(&a + &b)));
    group.bench_function("scale", |bench| {
        let mut m = a.clone();
        bench.iter(|| m.scale(black_box(1.000_001)))
    });

    group.finish();
}

criterion_group!(benches, bench_matmul, bench_transpose, bench_elementwise);
criterion_main!(benches);
