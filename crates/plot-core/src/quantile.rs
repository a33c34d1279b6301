// File: crates/plot-core/src/quantile.rs
// Summary: Order statistics (quantiles, median, box-plot summary with fences).

use crate::error::{ChartError, Result};

/// Interpolation rule for the quantile estimator. Each rule fixes the
/// offset `m` in `npm = n*p + m`, matching the named conventions used by
/// statistical packages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InterpolationRule {
    /// m = 0 (inverse of the empirical CDF).
    InverseCdf,
    /// m = -1/2 (rounds toward the closest observation).
    ClosestObservation,
    /// m = 1/2 (Hazen plotting positions).
    Hazen,
    /// m = p (Weibull plotting positions).
    Weibull,
    /// m = 1 - p (linear interpolation of modes; the common spreadsheet rule).
    Linear,
    /// m = (p + 1) / 3 (approximately median-unbiased for any distribution).
    MedianUnbiased,
    /// m = p/4 + 3/8 (approximately unbiased for normal samples).
    NormalUnbiased,
}

impl InterpolationRule {
    fn offset(&self, p: f64) -> f64 {
        match self {
            InterpolationRule::InverseCdf => 0.0,
            InterpolationRule::ClosestObservation => -0.5,
            InterpolationRule::Hazen => 0.5,
            InterpolationRule::Weibull => p,
            InterpolationRule::Linear => 1.0 - p,
            InterpolationRule::MedianUnbiased => (p + 1.0) / 3.0,
            InterpolationRule::NormalUnbiased => p / 4.0 + 3.0 / 8.0,
        }
    }
}

impl Default for InterpolationRule {
    fn default() -> Self {
        InterpolationRule::MedianUnbiased
    }
}

/// Estimate the `p`-quantile of an ascending-sorted sample.
///
/// `npm = n*p + m`; the index `j = floor(npm)` is clamped to `[1, n]` and
/// the result interpolates linearly between `sorted[j-1]` and `sorted[j]`
/// with the fractional part `g = npm - j` while `j < n`.
pub fn quantile(sorted: &[f64], p: f64, rule: InterpolationRule) -> Result<f64> {
    if sorted.is_empty() {
        return Err(ChartError::EmptyQuantileSample);
    }
    if !(0.0..=1.0).contains(&p) || p.is_nan() {
        return Err(ChartError::InvalidProbability(p));
    }
    let n = sorted.len();
    let npm = n as f64 * p + rule.offset(p);
    let j = (npm.floor() as i64).clamp(1, n as i64) as usize;
    let g = (npm - j as f64).clamp(0.0, 1.0);
    let lo = sorted[j - 1];
    if j < n {
        Ok(lo + g * (sorted[j] - lo))
    } else {
        Ok(lo)
    }
}

/// Median of an ascending-sorted sample: the central element for odd
/// lengths, the mean of the two central elements for even lengths.
pub fn median(sorted: &[f64]) -> Result<f64> {
    if sorted.is_empty() {
        return Err(ChartError::EmptyQuantileSample);
    }
    let n = sorted.len();
    if n % 2 == 0 {
        Ok((sorted[n / 2 - 1] + sorted[n / 2]) / 2.0)
    } else {
        Ok(sorted[n / 2])
    }
}

/// Five-number summary plus IQR fences and outlier partitions, derived
/// once per plotted series. Immutable after construction.
#[derive(Clone, Debug, PartialEq)]
pub struct QuantileSummary {
    pub min: f64,
    pub lower_fence: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub upper_fence: f64,
    pub max: f64,
    /// Whisker ends: the most extreme values still inside the mild fences.
    pub whisker_low: f64,
    pub whisker_high: f64,
    /// Values beyond a mild fence (1.5 * IQR) but inside the extreme fence.
    pub mild_outliers: Vec<f64>,
    /// Values beyond an extreme fence (3 * IQR).
    pub extreme_outliers: Vec<f64>,
}

impl QuantileSummary {
    /// Build from an unsorted sample; sorts a private copy.
    pub fn from_sample(values: &[f64], rule: InterpolationRule) -> Result<Self> {
        if values.is_empty() {
            return Err(ChartError::EmptyQuantileSample);
        }
        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        Self::from_sorted(&sorted, rule)
    }

    /// Build from an already ascending-sorted sample.
    pub fn from_sorted(sorted: &[f64], rule: InterpolationRule) -> Result<Self> {
        let q1 = quantile(sorted, 0.25, rule)?;
        let q3 = quantile(sorted, 0.75, rule)?;
        let med = median(sorted)?;
        let iqr = q3 - q1;
        let lower_fence = q1 - 1.5 * iqr;
        let upper_fence = q3 + 1.5 * iqr;
        let extreme_low = q1 - 3.0 * iqr;
        let extreme_high = q3 + 3.0 * iqr;

        let mut mild = Vec::new();
        let mut extreme = Vec::new();
        for &v in sorted {
            if v < extreme_low || v > extreme_high {
                extreme.push(v);
            } else if v < lower_fence || v > upper_fence {
                mild.push(v);
            }
        }

        // Whiskers reach the extreme in-fence observations, falling back
        // to the quartiles when every value on a side is an outlier.
        let whisker_low = sorted
            .iter()
            .copied()
            .find(|&v| v >= lower_fence)
            .unwrap_or(q1);
        let whisker_high = sorted
            .iter()
            .rev()
            .copied()
            .find(|&v| v <= upper_fence)
            .unwrap_or(q3);

        Ok(Self {
            min: sorted[0],
            lower_fence,
            q1,
            median: med,
            q3,
            upper_fence,
            max: sorted[sorted.len() - 1],
            whisker_low,
            whisker_high,
            mild_outliers: mild,
            extreme_outliers: extreme,
        })
    }

    /// Interquartile range.
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }
}
