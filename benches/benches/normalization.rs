//! Benchmarks for LAB normalization
//!
//! Run with: cargo bench -p colorize-benches

use colorize_lab::{denormalize_lab, normalize_lab, LabNormalizer};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ndarray::Array3;

fn create_lab(size: usize) -> Array3<f64> {
    Array3::from_shape_fn((size, size, 3), |(y, x, c)| match c {
        0 => (x + y) as f64 / (2 * size) as f64 * 100.0,
        _ => (x as f64 - y as f64) / size as f64 * 127.0,
    })
}

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("LAB Normalization");

    for size in [64, 256, 1024] {
        let lab = create_lab(size);

        group.bench_with_input(BenchmarkId::new("normalize", size), &lab, |b, lab| {
            b.iter(|| normalize_lab(black_box(lab)).unwrap());
        });

        let lab_norm = normalize_lab(&lab).unwrap();
        group.bench_with_input(BenchmarkId::new("denormalize", size), &lab_norm, |b, lab_norm| {
            b.iter(|| denormalize_lab(black_box(lab_norm)).unwrap());
        });

        group.bench_with_input(BenchmarkId::new("normalize_in_place", size), &lab, |b, lab| {
            let normalizer = LabNormalizer::default();
            let mut buffer = lab.clone();
            b.iter(|| {
                buffer.assign(lab);
                normalizer.normalize_in_place(black_box(&mut buffer)).unwrap();
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_normalize);
criterion_main!(benches);
