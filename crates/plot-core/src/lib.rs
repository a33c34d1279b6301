// File: crates/plot-core/src/lib.rs
// Summary: Core library entry point; exports the autoscaling, layout,
//          and coordinate-mapping API.

pub mod autoscale;
pub mod axis;
pub mod chart;
pub mod config;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod limits;
pub mod quantile;
pub mod sample;
pub mod scale;
pub mod series;
pub mod types;

pub use autoscale::{scale_axis, scale_sample, scale_sample_sigma, ScaleOptions, StepSystem};
pub use axis::{Axis, AxisRange, RangeMode};
pub use chart::{Chart, PlottedPoint, RenderGeometry, SeriesGeometry, TickMark};
pub use config::PlotConfig;
pub use error::{ChartError, Result};
pub use geometry::Rect;
pub use layout::{
    Frame, LayoutFlags, LayoutWarning, LegendCorner, TextMetrics, XAxisPosition,
};
pub use limits::{classify, classify_point, LimitClass, LimitMarker, PointClass};
pub use quantile::{median, quantile, InterpolationRule, QuantileSummary};
pub use sample::Sample;
pub use scale::{to_data, to_pixel, LinearMap};
pub use series::{Series, SeriesKind};
pub use types::Insets;
