//! Benchmarks for RGB <-> LAB conversion
//!
//! Run with: cargo bench -p colorize-benches

use colorize_core::Illuminant;
use colorize_lab::{rgb_pixel_to_lab, CieLabConverter, ColorSpaceConverter};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ndarray::Array3;

fn create_rgb(size: usize) -> Array3<f32> {
    Array3::from_shape_fn((size, size, 3), |(y, x, c)| match c {
        0 => x as f32 / size as f32,
        1 => y as f32 / size as f32,
        _ => 0.5,
    })
}

fn bench_pixel(c: &mut Criterion) {
    c.bench_function("rgb_pixel_to_lab", |b| {
        b.iter(|| rgb_pixel_to_lab(black_box([0.2, 0.5, 0.8]), Illuminant::D65));
    });
}

fn bench_conversion(c: &mut Criterion) {
    let mut group = c.benchmark_group("RGB LAB Conversion");

    let sequential = CieLabConverter::new().parallel_threshold(usize::MAX);
    let parallel = CieLabConverter::new().parallel_threshold(0);

    for size in [64, 256, 512] {
        let rgb = create_rgb(size);
        let lab = sequential.to_lab(&rgb).unwrap();

        group.bench_with_input(BenchmarkId::new("to_lab_sequential", size), &rgb, |b, rgb| {
            b.iter(|| sequential.to_lab(black_box(rgb)).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("to_lab_parallel", size), &rgb, |b, rgb| {
            b.iter(|| parallel.to_lab(black_box(rgb)).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("to_rgb_parallel", size), &lab, |b, lab| {
            b.iter(|| parallel.to_rgb(black_box(lab)).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_pixel, bench_conversion);
criterion_main!(benches);
