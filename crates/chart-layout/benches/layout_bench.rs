use chart_layout::arc::layout as arc_layout;
use chart_layout::{bucketize, build_path, Point, Segment};
use criterion::{criterion_group, criterion_main, black_box, BenchmarkId, Criterion};

fn gen_points(n: usize) -> Vec<Point> {
    (0..n)
        .map(|i| {
            // simple waveform with drift
            let y = (i as f64 * 0.01).sin() * 10.0 + (i as f64 * 0.0001);
            Point::new(i as f64, y)
        })
        .collect()
}

fn bench_paths(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_path");
    for &n in &[1_000usize, 10_000usize] {
        let data = gen_points(n);
        for smooth in [false, true] {
            group.bench_with_input(BenchmarkId::from_parameter(format!("n{n}_smooth{smooth}")), &smooth, |b, &s| {
                b.iter(|| black_box(build_path(&data, s, 0.75)));
            });
        }
    }
    group.finish();
}

fn bench_bucketize(c: &mut Criterion) {
    let mut group = c.benchmark_group("bucketize");
    let values: Vec<f64> = gen_points(100_000).into_iter().map(|p| p.y).collect();
    for &bins in &[10usize, 100usize] {
        group.bench_with_input(BenchmarkId::from_parameter(format!("b{bins}")), &bins, |b, &bins| {
            b.iter(|| black_box(bucketize(&values, bins, None)));
        });
    }
    group.finish();
}

fn bench_arcs(c: &mut Criterion) {
    let segments: Vec<Segment> = (0..64).map(|i| Segment::new(format!("s{i}"), (i % 7) as f64 + 0.5)).collect();
    c.bench_function("arc_layout_64", |b| {
        b.iter(|| black_box(arc_layout(&segments, 1.0)));
    });
}

criterion_group!(benches, bench_paths, bench_bucketize, bench_arcs);
criterion_main!(benches);
