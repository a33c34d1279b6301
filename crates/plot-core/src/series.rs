// File: crates/plot-core/src/series.rs
// Summary: Series model for line, scatter, and box-plot data.

use crate::error::Result;
use crate::quantile::{InterpolationRule, QuantileSummary};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeriesKind {
    Line,
    Scatter,
    /// Box-and-whisker summary of a 1D distribution.
    Box,
}

#[derive(Clone, Debug)]
pub struct Series {
    pub kind: SeriesKind,
    pub name: String,
    /// X/Y pairs; used by Line and Scatter.
    pub data_xy: Vec<(f64, f64)>,
    /// 1D distribution; used by Box.
    pub data_dist: Vec<f64>,
    /// Quantile rule for the box summary.
    pub quantile_rule: InterpolationRule,
    /// X position of the box glyph; box series without one are placed
    /// sequentially by the chart.
    pub position: Option<f64>,
}

impl Series {
    pub fn with_points(kind: SeriesKind, name: impl Into<String>, data: Vec<(f64, f64)>) -> Self {
        Self {
            kind,
            name: name.into(),
            data_xy: data,
            data_dist: Vec::new(),
            quantile_rule: InterpolationRule::default(),
            position: None,
        }
    }

    pub fn line(name: impl Into<String>, data: Vec<(f64, f64)>) -> Self {
        Self::with_points(SeriesKind::Line, name, data)
    }

    pub fn scatter(name: impl Into<String>, data: Vec<(f64, f64)>) -> Self {
        Self::with_points(SeriesKind::Scatter, name, data)
    }

    pub fn from_distribution(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            kind: SeriesKind::Box,
            name: name.into(),
            data_xy: Vec::new(),
            data_dist: values,
            quantile_rule: InterpolationRule::default(),
            position: None,
        }
    }

    pub fn with_quantile_rule(mut self, rule: InterpolationRule) -> Self {
        self.quantile_rule = rule;
        self
    }

    pub fn at_position(mut self, x: f64) -> Self {
        self.position = Some(x);
        self
    }

    /// Box summary of the distribution, computed from a sorted copy.
    pub fn summary(&self) -> Result<QuantileSummary> {
        QuantileSummary::from_sample(&self.data_dist, self.quantile_rule)
    }
}
