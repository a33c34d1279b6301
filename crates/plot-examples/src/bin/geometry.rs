// File: crates/plot-examples/src/bin/geometry.rs
// Summary: Minimal example that autoscales a line chart and prints its geometry.

use anyhow::Result;
use plot_core::{Chart, PlotConfig, Series, SeriesGeometry};

fn main() -> Result<()> {
    let data = vec![
        (0.0, 0.0),
        (1.0, 1.2),
        (2.0, 0.8),
        (3.0, 1.8),
        (4.0, 1.4),
        (5.0, 2.0),
    ];

    let mut chart = Chart::new();
    chart.add_series(Series::line("drift", data));

    let cfg = PlotConfig::default();
    let g = chart.resolve_geometry(&cfg)?;

    let win = g.frame.plot_window;
    println!(
        "plot window: ({:.1}, {:.1}) .. ({:.1}, {:.1})",
        win.x_min, win.y_min, win.x_max, win.y_max
    );
    println!(
        "x range: [{}, {}] step {} ({} ticks)",
        g.x_range.min, g.x_range.max, g.x_range.tick_interval, g.x_range.tick_count
    );
    println!(
        "y range: [{}, {}] step {} ({} ticks)",
        g.y_range.min, g.y_range.max, g.y_range.tick_interval, g.y_range.tick_count
    );
    for t in &g.x_ticks {
        println!("x tick {:>8.3} -> px {:.1}", t.value, t.px);
    }
    if let SeriesGeometry::Points { name, points, .. } = &g.series[0] {
        println!("series {name:?}: {} mapped points", points.len());
    }
    Ok(())
}
