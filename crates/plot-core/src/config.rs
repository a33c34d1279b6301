// File: crates/plot-core/src/config.rs
// Summary: Plot configuration record; read-only during the render pass.

use crate::layout::{LayoutFlags, TextMetrics};
use crate::types::{Insets, HEIGHT, WIDTH};

/// All knobs a render pass reads. Built by plain field assignment
/// before geometry is resolved; never mutated during the pass.
#[derive(Clone, Debug, PartialEq)]
pub struct PlotConfig {
    pub width: u32,
    pub height: u32,
    pub insets: Insets,
    pub flags: LayoutFlags,
    pub text: TextMetrics,
    /// Route NaN/infinite/near-overflow values to edge markers and keep
    /// them out of autoscaling. Disabling skips the classification scan;
    /// behavior with anomalous data is then undefined.
    pub check_limits: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            flags: LayoutFlags::default(),
            text: TextMetrics::default(),
            check_limits: true,
        }
    }
}
