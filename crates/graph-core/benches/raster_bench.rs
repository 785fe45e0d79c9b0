use criterion::{black_box, criterion_group, criterion_main, Criterion};
use graph_core::{rasterize, BufferCanvas, Cell, Chart};

fn build_wave(n: usize) -> (Vec<f64>, Vec<f64>) {
    let xs: Vec<f64> = (0..n).map(|i| i as f64).collect();
    let ys: Vec<f64> = (0..n).map(|i| (i as f64 * 0.01).sin() * 10.0).collect();
    (xs, ys)
}

fn bench_rasterize(c: &mut Criterion) {
    let mut group = c.benchmark_group("rasterize");
    for &(a, b) in &[(Cell::new(0, 0), Cell::new(10, 500)), (Cell::new(0, 0), Cell::new(500, 10))] {
        group.bench_function(format!("{}x{}", (b.row - a.row).abs(), (b.col - a.col).abs()), |bench| {
            bench.iter(|| black_box(rasterize(black_box(a), black_box(b))));
        });
    }
    group.finish();
}

fn bench_redraw(c: &mut Criterion) {
    let mut group = c.benchmark_group("redraw");
    for &n in &[10_000usize, 50_000usize] {
        group.bench_function(format!("wave_{n}"), |bench| {
            let (xs, ys) = build_wave(n);
            let mut canvas = BufferCanvas::new(40, 160);
            let mut chart = Chart::new();
            chart.plot(&mut canvas, &xs, &ys, "wave").expect("plot");
            bench.iter(|| chart.redraw(&mut canvas).expect("redraw"));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_rasterize, bench_redraw);
criterion_main!(benches);
