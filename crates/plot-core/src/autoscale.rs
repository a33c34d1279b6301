// File: crates/plot-core/src/autoscale.rs
// Summary: Tick-step selection and "nice" axis range derivation from data.

use crate::axis::AxisRange;
use crate::error::{ChartError, Result};
use crate::sample::{finite_bounds, moments, Sample};

/// Upper bound on candidate steps examined before the search is declared
/// divergent. Each notch shrinks the step, so 64 covers far more decades
/// than any representable span.
const MAX_STEP_NOTCHES: usize = 64;

/// Families of permitted tick steps, each scaled by powers of ten.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepSystem {
    /// {2, 4, 6, 8, 10} * 10^k
    Even,
    /// {1, 5, 10} * 10^k
    OneFive,
    /// {1, 2, 5, 10} * 10^k
    OneTwoFive,
}

impl StepSystem {
    /// Multipliers in descending order with cross-decade duplicates
    /// removed (10 * 10^k already appears as 1 * 10^(k+1)).
    fn multipliers(&self) -> &'static [f64] {
        match self {
            StepSystem::Even => &[10.0, 8.0, 6.0, 4.0, 2.0],
            StepSystem::OneFive => &[5.0, 1.0],
            StepSystem::OneTwoFive => &[5.0, 2.0, 1.0],
        }
    }
}

/// Knobs for [`scale_axis`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleOptions {
    /// Extend the nearer boundary so zero lies inside the range.
    pub force_include_zero: bool,
    /// Fraction of the span below which a boundary's intrusion past the
    /// nearest inner tick multiple is snapped away rather than paid for
    /// with a full extra tick. Zero disables snapping.
    pub tightness: f64,
    /// Minimum number of ticks the chosen step must produce.
    pub min_ticks: u32,
    pub step_system: StepSystem,
}

impl Default for ScaleOptions {
    fn default() -> Self {
        Self {
            force_include_zero: false,
            tightness: 0.0,
            min_ticks: 6,
            step_system: StepSystem::OneTwoFive,
        }
    }
}

impl ScaleOptions {
    fn validate(&self) -> Result<()> {
        if self.min_ticks < 2 {
            return Err(ChartError::InvalidScaleOptions(format!(
                "min_ticks must be at least 2, got {}",
                self.min_ticks
            )));
        }
        if !(0.0..1.0).contains(&self.tightness) {
            return Err(ChartError::InvalidScaleOptions(format!(
                "tightness must lie in [0, 1), got {}",
                self.tightness
            )));
        }
        Ok(())
    }
}

/// Compute a "nice" axis range covering `[min_value, max_value]`.
///
/// Candidate steps are walked coarse to fine through the step family;
/// for each, the data boundaries are rounded outward to multiples of the
/// step, the tightness tie-break and zero inclusion are applied, and the
/// first candidate whose derived tick count reaches `min_ticks` wins.
///
/// Worked example: `scale_axis(0.2, 6.5)` with `min_ticks = 6` and the
/// {1,2,5,10} family settles on step 1 and the range `[0, 7]` (8 ticks).
pub fn scale_axis(min_value: f64, max_value: f64, options: &ScaleOptions) -> Result<AxisRange> {
    options.validate()?;
    if !min_value.is_finite() || !max_value.is_finite() || min_value > max_value {
        return Err(ChartError::InvalidRange { min: min_value, max: max_value });
    }

    let (mut lo, mut hi) = (min_value, max_value);
    if lo == hi {
        // Degenerate span: expand symmetrically so a real axis exists.
        let pad = if lo == 0.0 { 0.5 } else { lo.abs() * 1e-3 };
        lo -= pad;
        hi += pad;
    }
    let span = hi - lo;

    let mults = options.step_system.multipliers();
    let start_exp = span.log10().ceil() as i32;

    for notch in 0..MAX_STEP_NOTCHES {
        let exp = start_exp - (notch / mults.len()) as i32;
        let step = mults[notch % mults.len()] * 10f64.powi(exp);
        if !step.is_finite() {
            // Overflowed candidate; finer notches are still viable.
            continue;
        }
        if step <= 0.0 {
            break;
        }

        let mut lo_r = (lo / step).floor() * step;
        if lo_r > lo {
            // Quotient rounded across the integer boundary; stay outward.
            lo_r -= step;
        }
        let mut hi_r = (hi / step).ceil() * step;
        if hi_r < hi {
            hi_r += step;
        }

        if options.tightness > 0.0 {
            // A boundary that only barely pokes past an inner multiple is
            // not worth a whole extra tick; snap it to that multiple.
            let down = (hi / step).floor() * step;
            if hi - down < options.tightness * span && down > lo_r {
                hi_r = down;
            }
            let up = (lo / step).ceil() * step;
            if up - lo < options.tightness * span && up < hi_r {
                lo_r = up;
            }
        }

        if options.force_include_zero {
            if lo_r > 0.0 {
                lo_r = 0.0;
            } else if hi_r < 0.0 {
                hi_r = 0.0;
            }
        }

        if hi_r <= lo_r {
            continue;
        }

        let count = ((hi_r - lo_r) / step).round() as u32 + 1;
        if count >= options.min_ticks {
            return Ok(AxisRange {
                min: lo_r,
                max: hi_r,
                tick_interval: step,
                tick_count: count,
            });
        }
    }

    Err(ChartError::StepSearchDiverged { span, min_ticks: options.min_ticks })
}

/// Autoscale from a raw sample: min/max scan (with optional limit-value
/// filtering) followed by [`scale_axis`].
pub fn scale_sample(
    sample: &dyn Sample,
    options: &ScaleOptions,
    check_limits: bool,
    axis: &'static str,
) -> Result<AxisRange> {
    let (min, max) = finite_bounds(sample, check_limits, axis)?;
    scale_axis(min, max, options)
}

/// Outlier-resistant autoscale: the bounds come from `mean +/- k*stddev`
/// of the sample instead of its literal extremes. Limit values are
/// filtered before the moments are taken.
pub fn scale_sample_sigma(
    sample: &dyn Sample,
    options: &ScaleOptions,
    check_limits: bool,
    k: f64,
    axis: &'static str,
) -> Result<AxisRange> {
    if !k.is_finite() || k <= 0.0 {
        return Err(ChartError::InvalidScaleOptions(format!(
            "sigma multiplier must be positive, got {k}"
        )));
    }
    let (mean, stddev) = moments(sample, check_limits, axis)?;
    scale_axis(mean - k * stddev, mean + k * stddev, options)
}
