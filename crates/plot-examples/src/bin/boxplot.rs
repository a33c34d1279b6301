// File: crates/plot-examples/src/bin/boxplot.rs
// Summary: Example that summarizes two distributions as box-plot geometry.

use anyhow::Result;
use plot_core::{Chart, LayoutFlags, PlotConfig, Series, SeriesGeometry};

fn main() -> Result<()> {
    let calm = vec![4.8, 5.1, 5.3, 5.0, 4.9, 5.2, 5.4, 5.1, 5.0, 4.7];
    let noisy = vec![3.0, 9.5, 5.5, 6.1, 2.2, 7.8, 5.9, 30.0, 6.4, 5.7];

    let mut chart = Chart::new();
    chart.add_series(Series::from_distribution("calm", calm));
    chart.add_series(Series::from_distribution("noisy", noisy));

    let mut cfg = PlotConfig::default();
    cfg.flags = LayoutFlags { legend_on: true, ..LayoutFlags::default() };

    let g = chart.resolve_geometry(&cfg)?;
    for s in &g.series {
        if let SeriesGeometry::BoxGlyph { name, summary, mild_outliers_py, extreme_outliers_py, .. } = s {
            println!(
                "{name}: median {:.2}, IQR {:.2}, fences [{:.2}, {:.2}], outliers {}+{}",
                summary.median,
                summary.iqr(),
                summary.lower_fence,
                summary.upper_fence,
                mild_outliers_py.len(),
                extreme_outliers_py.len(),
            );
        }
    }
    let lb = g.frame.legend_box;
    println!(
        "legend box: ({:.1}, {:.1}) {}x{}",
        lb.x_min,
        lb.y_min,
        lb.width().round(),
        lb.height().round()
    );
    Ok(())
}
