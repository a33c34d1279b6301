// File: crates/plot-core/src/error.rs
// Summary: Error types for autoscaling and quantile computation.

use thiserror::Error;

/// Result type alias for plot-core operations.
pub type Result<T> = std::result::Result<T, ChartError>;

/// Fatal configuration errors. Layout overflow is deliberately absent:
/// the layout resolver degrades and reports warnings instead of failing.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChartError {
    #[error("no data to autoscale on {axis} axis")]
    EmptySample { axis: &'static str },

    #[error("no finite values to scale on {axis} axis")]
    NoFiniteValues { axis: &'static str },

    #[error("invalid axis range: min={min}, max={max}")]
    InvalidRange { min: f64, max: f64 },

    #[error("invalid tick interval: {interval}")]
    InvalidTickInterval { interval: f64 },

    #[error("invalid scale options: {0}")]
    InvalidScaleOptions(String),

    #[error("tick step search did not converge for span {span} with min_ticks {min_ticks}")]
    StepSearchDiverged { span: f64, min_ticks: u32 },

    #[error("empty sample passed to quantile")]
    EmptyQuantileSample,

    #[error("quantile probability {0} outside [0, 1]")]
    InvalidProbability(f64),
}
