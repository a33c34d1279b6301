// File: crates/plot-core/src/scale.rs
// Summary: Linear data<->pixel coordinate transform.

use crate::axis::AxisRange;

/// Pure linear map between a data range and a pixel span.
///
/// `invert` flips the pixel direction; it is set for Y axes because
/// pixel Y grows downward while data Y conventionally grows upward.
/// Values outside the data range map outside the pixel span without
/// clamping; callers route at-limit points elsewhere before this stage.
#[derive(Clone, Copy, Debug)]
pub struct LinearMap {
    d_min: f64,
    d_max: f64,
    px_lo: f64,
    px_hi: f64,
    invert: bool,
}

impl LinearMap {
    pub fn new(d_min: f64, d_max: f64, px_lo: f64, px_hi: f64, invert: bool) -> Self {
        let mut s = Self { d_min, d_max, px_lo, px_hi, invert };
        if (s.d_max - s.d_min).abs() < 1e-12 {
            s.d_max = s.d_min + 1.0;
        }
        if (s.px_hi - s.px_lo).abs() < 1e-12 {
            s.px_hi = s.px_lo + 1.0;
        }
        s
    }

    pub fn from_range(range: &AxisRange, px_lo: f64, px_hi: f64, invert: bool) -> Self {
        Self::new(range.min, range.max, px_lo, px_hi, invert)
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f64 {
        let t = (v - self.d_min) / (self.d_max - self.d_min);
        if self.invert {
            self.px_hi - t * (self.px_hi - self.px_lo)
        } else {
            self.px_lo + t * (self.px_hi - self.px_lo)
        }
    }

    #[inline]
    pub fn from_px(&self, px: f64) -> f64 {
        let extent = self.px_hi - self.px_lo;
        let t = if self.invert {
            (self.px_hi - px) / extent
        } else {
            (px - self.px_lo) / extent
        };
        self.d_min + t * (self.d_max - self.d_min)
    }
}

/// Free-function form: data value to pixel coordinate.
pub fn to_pixel(value: f64, range: &AxisRange, pixel_span: (f64, f64), invert: bool) -> f64 {
    LinearMap::from_range(range, pixel_span.0, pixel_span.1, invert).to_px(value)
}

/// Free-function form: pixel coordinate back to data value.
pub fn to_data(px: f64, range: &AxisRange, pixel_span: (f64, f64), invert: bool) -> f64 {
    LinearMap::from_range(range, pixel_span.0, pixel_span.1, invert).from_px(px)
}
