// File: crates/plot-core/src/axis.rs
// Summary: Axis model: resolved ranges, autoscale vs explicit modes.

use crate::autoscale::{scale_sample, scale_sample_sigma, ScaleOptions};
use crate::error::{ChartError, Result};
use crate::sample::Sample;

/// A finalized axis range with its tick grid.
/// Invariants: `max > min`, `tick_interval > 0`, and the span is an
/// integer multiple of `tick_interval` within floating tolerance, so
/// `tick_count == round((max - min) / tick_interval) + 1`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
    pub tick_interval: f64,
    pub tick_count: u32,
}

impl AxisRange {
    /// Explicit caller-supplied range; bypasses the scaler entirely but
    /// is still validated.
    pub fn explicit(min: f64, max: f64, tick_interval: f64) -> Result<Self> {
        if !min.is_finite() || !max.is_finite() || max <= min {
            return Err(ChartError::InvalidRange { min, max });
        }
        if !tick_interval.is_finite() || tick_interval <= 0.0 {
            return Err(ChartError::InvalidTickInterval { interval: tick_interval });
        }
        let tick_count = ((max - min) / tick_interval).round().max(1.0) as u32 + 1;
        Ok(Self { min, max, tick_interval, tick_count })
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    pub fn contains(&self, v: f64) -> bool {
        v >= self.min && v <= self.max
    }

    /// Tick data values. Computed by index from `min` so long grids do
    /// not accumulate floating error.
    pub fn ticks(&self) -> Vec<f64> {
        (0..self.tick_count)
            .map(|i| self.min + i as f64 * self.tick_interval)
            .collect()
    }
}

/// How an axis obtains its range. Autoscale and explicit ranges are
/// mutually exclusive by construction.
#[derive(Clone, Debug, PartialEq)]
pub enum RangeMode {
    /// Derive from data via the scaler.
    Auto(ScaleOptions),
    /// Derive from `mean +/- k*stddev` of the data.
    AutoSigma { options: ScaleOptions, k: f64 },
    /// Use the given range verbatim.
    Fixed { min: f64, max: f64, tick_interval: f64 },
}

#[derive(Clone, Debug)]
pub struct Axis {
    pub label: String,
    pub mode: RangeMode,
    resolved: Option<AxisRange>,
}

impl Axis {
    pub fn auto(label: impl Into<String>) -> Self {
        Self::with_options(label, ScaleOptions::default())
    }

    pub fn with_options(label: impl Into<String>, options: ScaleOptions) -> Self {
        Self { label: label.into(), mode: RangeMode::Auto(options), resolved: None }
    }

    pub fn auto_sigma(label: impl Into<String>, options: ScaleOptions, k: f64) -> Self {
        Self { label: label.into(), mode: RangeMode::AutoSigma { options, k }, resolved: None }
    }

    pub fn fixed(label: impl Into<String>, min: f64, max: f64, tick_interval: f64) -> Self {
        Self { label: label.into(), mode: RangeMode::Fixed { min, max, tick_interval }, resolved: None }
    }

    /// Resolve this axis against the data it spans, caching the result.
    /// Fixed axes ignore the sample.
    pub fn resolve(
        &mut self,
        sample: &dyn Sample,
        check_limits: bool,
        axis: &'static str,
    ) -> Result<AxisRange> {
        let range = match &self.mode {
            RangeMode::Fixed { min, max, tick_interval } => {
                AxisRange::explicit(*min, *max, *tick_interval)?
            }
            RangeMode::Auto(options) => scale_sample(sample, options, check_limits, axis)?,
            RangeMode::AutoSigma { options, k } => {
                scale_sample_sigma(sample, options, check_limits, *k, axis)?
            }
        };
        self.resolved = Some(range);
        Ok(range)
    }

    /// Last resolved range, if a render or autoscale pass has run.
    /// Read-back is for diagnostics only; the next resolve overwrites it.
    pub fn range(&self) -> Option<AxisRange> {
        self.resolved
    }
}
