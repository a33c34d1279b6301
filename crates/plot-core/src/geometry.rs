// File: crates/plot-core/src/geometry.rs
// Summary: Pixel-space rectangle and small geometry helpers.

/// Pixel rectangle. Construction normalizes so that `x_max >= x_min`
/// and `y_max >= y_min` always hold.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x_min: f64,
    pub y_min: f64,
    pub x_max: f64,
    pub y_max: f64,
}

impl Rect {
    pub fn from_bounds(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Self {
        let (x_min, x_max) = if x_min <= x_max { (x_min, x_max) } else { (x_max, x_min) };
        let (y_min, y_max) = if y_min <= y_max { (y_min, y_max) } else { (y_max, y_min) };
        Self { x_min, y_min, x_max, y_max }
    }

    pub fn from_origin_size(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::from_bounds(x, y, x + width.max(0.0), y + height.max(0.0))
    }

    /// Zero-area rectangle at a point.
    pub fn degenerate_at(x: f64, y: f64) -> Self {
        Self { x_min: x, y_min: y, x_max: x, y_max: y }
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    pub fn is_degenerate(&self) -> bool {
        self.width() <= 1.0 || self.height() <= 1.0
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x_min && x <= self.x_max && y >= self.y_min && y <= self.y_max
    }
}

#[inline]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    if v < lo {
        lo
    } else if v > hi {
        hi
    } else {
        v
    }
}
