use criterion::{black_box, criterion_group, criterion_main, Criterion};
use floormark_core::{point_in_polygon, polygon_centroid, Point};

fn ring(vertices: usize) -> Vec<Point> {
    (0..vertices)
        .map(|i| {
            let theta = 2.0 * std::f64::consts::PI * (i as f64) / (vertices as f64);
            Point::new(500.0 + 400.0 * theta.cos(), 500.0 + 400.0 * theta.sin())
        })
        .collect()
}

fn bench_containment(c: &mut Criterion) {
    let square = vec![
        Point::new(0.0, 0.0),
        Point::new(1000.0, 0.0),
        Point::new(1000.0, 1000.0),
        Point::new(0.0, 1000.0),
    ];
    let ring_256 = ring(256);

    c.bench_function("point_in_polygon/square", |b| {
        b.iter(|| point_in_polygon(black_box(Point::new(500.0, 500.0)), black_box(&square)))
    });

    c.bench_function("point_in_polygon/ring_256", |b| {
        b.iter(|| point_in_polygon(black_box(Point::new(500.0, 500.0)), black_box(&ring_256)))
    });
}

fn bench_centroid(c: &mut Criterion) {
    let ring_256 = ring(256);

    c.bench_function("polygon_centroid/ring_256", |b| {
        b.iter(|| polygon_centroid(black_box(&ring_256)))
    });
}

criterion_group!(benches, bench_containment, bench_centroid);
criterion_main!(benches);
