// File: crates/plot-core/src/sample.rs
// Summary: Sample abstraction and scans (finite bounds, moments) over user data.

use crate::error::{ChartError, Result};
use crate::limits::classify;

/// Capability a data container needs to be autoscaled: a length and a
/// way to iterate its values as `f64`. Concrete adapters keep the core
/// numeric algorithms decoupled from any particular container type.
pub trait Sample {
    fn len(&self) -> usize;
    fn values(&self) -> Box<dyn Iterator<Item = f64> + '_>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Sample for [f64] {
    fn len(&self) -> usize {
        <[f64]>::len(self)
    }
    fn values(&self) -> Box<dyn Iterator<Item = f64> + '_> {
        Box::new(self.iter().copied())
    }
}

impl Sample for Vec<f64> {
    fn len(&self) -> usize {
        self.as_slice().len()
    }
    fn values(&self) -> Box<dyn Iterator<Item = f64> + '_> {
        Box::new(self.iter().copied())
    }
}

/// Min/max scan over a sample. With `check_limits` set, at-limit values
/// (NaN, infinities, near-overflow) are skipped; disabling the check is
/// faster but leaves the result undefined when anomalies are present.
pub fn finite_bounds(sample: &dyn Sample, check_limits: bool, axis: &'static str) -> Result<(f64, f64)> {
    if sample.is_empty() {
        return Err(ChartError::EmptySample { axis });
    }
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut any = false;
    for v in sample.values() {
        if check_limits && classify(v).is_at_limit() {
            continue;
        }
        min = min.min(v);
        max = max.max(v);
        any = true;
    }
    if !any || !min.is_finite() || !max.is_finite() {
        return Err(ChartError::NoFiniteValues { axis });
    }
    Ok((min, max))
}

/// Mean and standard deviation over the same filtered view as
/// `finite_bounds`. Limit filtering happens before the moments are
/// taken (filter-then-moment), so anomalies never skew the window.
pub fn moments(sample: &dyn Sample, check_limits: bool, axis: &'static str) -> Result<(f64, f64)> {
    if sample.is_empty() {
        return Err(ChartError::EmptySample { axis });
    }
    let mut n = 0usize;
    let mut sum = 0.0f64;
    for v in sample.values() {
        if check_limits && classify(v).is_at_limit() {
            continue;
        }
        sum += v;
        n += 1;
    }
    if n == 0 {
        return Err(ChartError::NoFiniteValues { axis });
    }
    let mean = sum / n as f64;
    let mut ss = 0.0f64;
    for v in sample.values() {
        if check_limits && classify(v).is_at_limit() {
            continue;
        }
        let d = v - mean;
        ss += d * d;
    }
    let stddev = (ss / n as f64).sqrt();
    Ok((mean, stddev))
}
