// File: crates/graph-examples/src/bin/sines.rs
// Summary: Minimal example that plots three sine combinations onto a text canvas.

use graph_core::{BufferCanvas, Chart};

fn main() {
    // Same shape the interactive grapher was exercised with: a fundamental,
    // a quarter-amplitude fourth harmonic, and their sum.
    let xs: Vec<f64> = (0..1700).map(|i| -3.5 + i as f64 * 0.01).collect();
    let ya: Vec<f64> = xs.iter().map(|&x| x.sin()).collect();
    let yb: Vec<f64> = xs.iter().map(|&x| 0.25 * (4.0 * x).sin()).collect();
    let yc: Vec<f64> = xs.iter().zip(&ya).map(|(&x, &a)| a + 0.25 * (4.0 * x).sin()).collect();

    let mut canvas = BufferCanvas::new(30, 100);
    let mut chart = Chart::new();
    chart.plot(&mut canvas, &xs, &ya, "sin(x)").expect("plot sin(x)");
    chart.plot(&mut canvas, &xs, &yb, "(1/4)sin(4x)").expect("plot harmonic");
    chart.plot(&mut canvas, &xs, &yc, "sin(x)+(1/4)sin(4x)").expect("plot sum");
    chart.toggle_legend(&mut canvas).expect("legend redraw");

    print!("{canvas}");
}
