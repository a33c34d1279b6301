// File: crates/plot-core/src/types.rs
// Summary: Shared constants and the border-margin record.

/// Default image width in pixels.
pub const WIDTH: u32 = 1024;
/// Default image height in pixels.
pub const HEIGHT: u32 = 640;

/// Border margins carved off the image edge before any band layout.
/// Non-negative by type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }

    /// Same margin on every side.
    pub const fn uniform(px: u32) -> Self {
        Self::new(px, px, px, px)
    }
}

impl Default for Insets {
    fn default() -> Self {
        Self::uniform(12)
    }
}
