//! Benchmarks for geo crate distance calculations.

use aroundin_geo::{format_distance, haversine_distance_meters, Coordinate};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn create_test_points(count: usize) -> Vec<Coordinate> {
    (0..count)
        .map(|i| {
            // Generate points in a grid around Nairobi
            let lat = -1.5 + (i as f64 * 0.001) % 0.5;
            let lng = 36.6 + (i as f64 * 0.001) % 0.5;
            Coordinate::new(lat, lng)
        })
        .collect()
}

fn bench_single_distance(c: &mut Criterion) {
    let nairobi = Coordinate::new(-1.2921, 36.8219);
    let mombasa = Coordinate::new(-4.0435, 39.6682);

    c.bench_function("haversine_single", |b| {
        b.iter(|| haversine_distance_meters(black_box(&nairobi), black_box(&mombasa)))
    });
}

fn bench_distance_labels(c: &mut Criterion) {
    let mut group = c.benchmark_group("distance_labels");
    let user = Coordinate::new(-1.2841, 36.8155);

    for size in [10, 100, 1000].iter() {
        let points = create_test_points(*size);

        group.bench_with_input(BenchmarkId::new("sequential", size), size, |b, _| {
            b.iter(|| {
                points
                    .iter()
                    .map(|p| format_distance(haversine_distance_meters(black_box(&user), p)))
                    .collect::<Vec<_>>()
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_single_distance, bench_distance_labels);
criterion_main!(benches);
