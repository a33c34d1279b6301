// File: crates/plot-core/src/chart.rs
// Summary: Chart struct and the single-pass geometry pipeline
//          (classify -> scale -> layout -> map).

use crate::axis::{Axis, AxisRange};
use crate::config::PlotConfig;
use crate::error::{ChartError, Result};
use crate::geometry::{clamp, Rect};
use crate::layout::{self, Frame};
use crate::limits::{classify, classify_point, LimitMarker};
use crate::quantile::QuantileSummary;
use crate::scale::LinearMap;
use crate::series::{Series, SeriesKind};

/// One tick with its resolved pixel coordinate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickMark {
    pub value: f64,
    pub px: f64,
}

/// A plotted data point: either mapped inside the plot window, or
/// routed to a window edge with a limit marker.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PlottedPoint {
    Inside { px: f64, py: f64 },
    AtLimit { px: f64, py: f64, marker: LimitMarker },
}

/// Finalized per-series geometry handed to the emitter.
#[derive(Clone, Debug)]
pub enum SeriesGeometry {
    Points {
        name: String,
        kind: SeriesKind,
        points: Vec<PlottedPoint>,
    },
    BoxGlyph {
        name: String,
        x_px: f64,
        half_width_px: f64,
        /// Q1..Q3 body in pixel space.
        body: Rect,
        median_py: f64,
        whisker_low_py: f64,
        whisker_high_py: f64,
        mild_outliers_py: Vec<f64>,
        extreme_outliers_py: Vec<f64>,
        summary: QuantileSummary,
    },
}

/// Everything a markup emitter consumes for one image. Throwaway per
/// render pass; nothing here is retained between writes.
#[derive(Clone, Debug)]
pub struct RenderGeometry {
    pub frame: Frame,
    pub x_range: AxisRange,
    pub y_range: AxisRange,
    pub x_ticks: Vec<TickMark>,
    pub y_ticks: Vec<TickMark>,
    pub x_axis_line_y: f64,
    pub series: Vec<SeriesGeometry>,
}

pub struct Chart {
    pub series: Vec<Series>,
    pub x_axis: Axis,
    pub y_axis: Axis,
}

impl Chart {
    pub fn new() -> Self {
        Self {
            series: Vec::new(),
            x_axis: Axis::auto("X"),
            y_axis: Axis::auto("Y"),
        }
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    /// X position of the `i`-th box series: explicit if set, else a
    /// sequential 1-based slot.
    fn box_position(series: &Series, box_index: usize) -> f64 {
        series.position.unwrap_or((box_index + 1) as f64)
    }

    /// Gather the X and Y data every axis must cover. Box series
    /// contribute their glyph footprint on X and their raw sample on Y.
    fn collect_samples(&self) -> (Vec<f64>, Vec<f64>) {
        let mut xs = Vec::new();
        let mut ys = Vec::new();
        let mut box_index = 0usize;
        for s in &self.series {
            match s.kind {
                SeriesKind::Line | SeriesKind::Scatter => {
                    for &(x, y) in &s.data_xy {
                        xs.push(x);
                        ys.push(y);
                    }
                }
                SeriesKind::Box => {
                    let pos = Self::box_position(s, box_index);
                    box_index += 1;
                    xs.push(pos - 0.5);
                    xs.push(pos + 0.5);
                    ys.extend_from_slice(&s.data_dist);
                }
            }
        }
        (xs, ys)
    }

    /// Resolve both axis ranges from the data and cache them on the
    /// axes. A failed autoscale aborts before any geometry exists.
    pub fn autoscale_axes(&mut self, check_limits: bool) -> Result<()> {
        let (xs, ys) = self.collect_samples();
        // Y first: the X-axis line position may depend on the Y range.
        self.y_axis.resolve(&ys, check_limits, "y")?;
        self.x_axis.resolve(&xs, check_limits, "x")?;
        Ok(())
    }

    /// The render pass: classify, scale, lay out, and map everything.
    /// Output geometry is consumed by the external markup emitter.
    pub fn resolve_geometry(&mut self, cfg: &PlotConfig) -> Result<RenderGeometry> {
        let (xs, ys) = self.collect_samples();
        let y_range = self.y_axis.resolve(&ys, cfg.check_limits, "y")?;
        let x_range = self.x_axis.resolve(&xs, cfg.check_limits, "x")?;

        let names: Vec<&str> = self.series.iter().map(|s| s.name.as_str()).collect();
        let frame = layout::resolve(cfg.width, cfg.height, &cfg.insets, &cfg.flags, &cfg.text, &names);
        let win = frame.plot_window;

        let xmap = LinearMap::from_range(&x_range, win.x_min, win.x_max, false);
        let ymap = LinearMap::from_range(&y_range, win.y_min, win.y_max, true);

        let x_ticks = x_range
            .ticks()
            .into_iter()
            .map(|v| TickMark { value: v, px: xmap.to_px(v) })
            .collect();
        let y_ticks = y_range
            .ticks()
            .into_iter()
            .map(|v| TickMark { value: v, px: ymap.to_px(v) })
            .collect();

        let x_axis_line_y = layout::x_axis_line_y(&frame, &y_range, cfg.flags.x_axis_position);

        let mut out = Vec::with_capacity(self.series.len());
        let mut box_index = 0usize;
        for s in &self.series {
            match s.kind {
                SeriesKind::Line | SeriesKind::Scatter => {
                    let points = s
                        .data_xy
                        .iter()
                        .map(|&p| map_point(p, &xmap, &ymap, &win, cfg.check_limits))
                        .collect();
                    out.push(SeriesGeometry::Points {
                        name: s.name.clone(),
                        kind: s.kind,
                        points,
                    });
                }
                SeriesKind::Box => {
                    let pos = Self::box_position(s, box_index);
                    box_index += 1;
                    let summary = box_summary(s, cfg.check_limits)?;
                    let x_px = xmap.to_px(pos);
                    let half_width_px = (xmap.to_px(pos + 0.3) - xmap.to_px(pos - 0.3)).abs() / 2.0;
                    let body = Rect::from_bounds(
                        x_px - half_width_px,
                        ymap.to_px(summary.q3),
                        x_px + half_width_px,
                        ymap.to_px(summary.q1),
                    );
                    out.push(SeriesGeometry::BoxGlyph {
                        name: s.name.clone(),
                        x_px,
                        half_width_px,
                        body,
                        median_py: ymap.to_px(summary.median),
                        whisker_low_py: ymap.to_px(summary.whisker_low),
                        whisker_high_py: ymap.to_px(summary.whisker_high),
                        mild_outliers_py: summary.mild_outliers.iter().map(|&v| ymap.to_px(v)).collect(),
                        extreme_outliers_py: summary
                            .extreme_outliers
                            .iter()
                            .map(|&v| ymap.to_px(v))
                            .collect(),
                        summary,
                    });
                }
            }
        }

        Ok(RenderGeometry {
            frame,
            x_range,
            y_range,
            x_ticks,
            y_ticks,
            x_axis_line_y,
            series: out,
        })
    }
}

impl Default for Chart {
    fn default() -> Self {
        Self::new()
    }
}

/// Box summary under the same limit-filtering contract as autoscaling:
/// anomalous values are dropped from the distribution before the
/// quantiles are taken, never interpolated over.
fn box_summary(series: &Series, check_limits: bool) -> Result<QuantileSummary> {
    if !check_limits || series.data_dist.is_empty() {
        return series.summary();
    }
    let finite: Vec<f64> = series
        .data_dist
        .iter()
        .copied()
        .filter(|&v| !classify(v).is_at_limit())
        .collect();
    if finite.is_empty() {
        return Err(ChartError::NoFiniteValues { axis: "y" });
    }
    QuantileSummary::from_sample(&finite, series.quantile_rule)
}

/// Map one data point, routing at-limit values to the window edge.
/// A classified coordinate escapes toward the edge its sign points at;
/// NaN pins to the window midline under a cross marker.
fn map_point(
    p: (f64, f64),
    xmap: &LinearMap,
    ymap: &LinearMap,
    win: &Rect,
    check_limits: bool,
) -> PlottedPoint {
    if check_limits {
        let class = classify_point(p);
        if let Some(marker) = class.marker() {
            let px = match class.x.direction() {
                1 => win.x_max,
                -1 => win.x_min,
                _ if class.x.is_at_limit() => (win.x_min + win.x_max) / 2.0,
                _ => clamp(xmap.to_px(p.0), win.x_min, win.x_max),
            };
            let py = match class.y.direction() {
                1 => win.y_min,
                -1 => win.y_max,
                _ if class.y.is_at_limit() => (win.y_min + win.y_max) / 2.0,
                _ => clamp(ymap.to_px(p.1), win.y_min, win.y_max),
            };
            return PlottedPoint::AtLimit { px, py, marker };
        }
    }
    PlottedPoint::Inside { px: xmap.to_px(p.0), py: ymap.to_px(p.1) }
}
