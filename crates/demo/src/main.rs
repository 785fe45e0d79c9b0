// File: crates/demo/src/main.rs
// Summary: Demo loads an x,y CSV and prints several frames (auto, zoomed, panned, legend).

use anyhow::{Context, Result};
use graph_core::{BufferCanvas, Chart};
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    env_logger::init();

    let raw = std::env::args().nth(1).unwrap_or_else(|| "samples.csv".to_string());
    let path = PathBuf::from(&raw);
    if !path.exists() {
        anyhow::bail!("file not found: {}", path.display());
    }
    println!("Using input file: {}", path.display());

    let (xs, ys) = load_xy_csv(&path)
        .with_context(|| format!("failed to load CSV '{}'", path.display()))?;
    println!("Loaded {} points", xs.len());

    if xs.is_empty() {
        anyhow::bail!("no points loaded - check headers/delimiter.");
    }

    let mut canvas = BufferCanvas::new(32, 110);
    let mut chart = Chart::new();

    // Raw data plus a smoothed companion series.
    chart.plot(&mut canvas, &xs, &ys, "data")?;
    let (sx, sy) = smoothed(&xs, &ys, 9);
    chart.plot(&mut canvas, &sx, &sy, "smoothed")?;

    println!("-- auto frame --");
    print!("{canvas}");

    chart.zoom_in_x(&mut canvas)?;
    chart.zoom_in_y(&mut canvas)?;
    println!("-- zoomed frame --");
    print!("{canvas}");

    chart.move_right(&mut canvas)?;
    println!("-- panned frame --");
    print!("{canvas}");

    chart.autosize(&mut canvas)?;
    chart.toggle_legend(&mut canvas)?;
    println!("-- legend frame --");
    print!("{canvas}");

    Ok(())
}

/// Load (x, y) pairs from a CSV with x/y-like headers; rows with unparsable
/// numbers are skipped, and a missing x column falls back to the row index.
fn load_xy_csv(path: &Path) -> Result<(Vec<f64>, Vec<f64>)> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.to_lowercase())
        .collect::<Vec<_>>();
    println!("Headers: {:?}", headers);

    let idx = |names: &[&str]| -> Option<usize> {
        for (i, h) in headers.iter().enumerate() {
            for want in names {
                if h == want {
                    return Some(i);
                }
            }
        }
        None
    };

    let i_x = idx(&["x", "t", "time", "index"]);
    let i_y = idx(&["y", "value", "v"]).or(if headers.len() > 1 { Some(1) } else { None });

    let mut xs = Vec::new();
    let mut ys = Vec::new();
    let mut row_index = 0.0f64;

    for rec in rdr.records() {
        let rec = rec?;
        let parse = |i: Option<usize>| -> Option<f64> {
            i.and_then(|ix| rec.get(ix)).and_then(|s| s.trim().parse::<f64>().ok())
        };
        let x = parse(i_x).unwrap_or(row_index);
        row_index += 1.0;
        if let Some(y) = parse(i_y) {
            xs.push(x);
            ys.push(y);
        }
    }
    Ok((xs, ys))
}

/// Centered moving average over a window of `period` points.
fn smoothed(xs: &[f64], ys: &[f64], period: usize) -> (Vec<f64>, Vec<f64>) {
    let p = period.max(1);
    let half = p / 2;
    let mut out_x = Vec::with_capacity(xs.len());
    let mut out_y = Vec::with_capacity(ys.len());
    for i in 0..ys.len() {
        let lo = i.saturating_sub(half);
        let hi = (i + half + 1).min(ys.len());
        let avg = ys[lo..hi].iter().sum::<f64>() / (hi - lo) as f64;
        out_x.push(xs[i]);
        out_y.push(avg);
    }
    (out_x, out_y)
}
