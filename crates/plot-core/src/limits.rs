// File: crates/plot-core/src/limits.rs
// Summary: Classification of data values as finite, infinite, NaN, or near-overflow.

/// Divisor applied to `f64::MAX` when deciding that a finite value is
/// close enough to overflow to be treated as "at the limit".
pub const OVERFLOW_MARGIN: f64 = 4.0;

/// Classification of a single data value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LimitClass {
    Normal,
    PlusInfinity,
    MinusInfinity,
    Nan,
    NearMax,
    NearMinusMax,
}

/// Marker glyph an emitter should draw for an at-limit point, pointing
/// toward the edge of the plot window the value escaped through.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LimitMarker {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Cross,
}

impl LimitClass {
    /// True for anything that should not pass through the coordinate mapper.
    pub fn is_at_limit(&self) -> bool {
        !matches!(self, LimitClass::Normal)
    }

    /// Sign of the limit: +1 for high-side, -1 for low-side, 0 for Normal/NaN.
    pub fn direction(&self) -> i8 {
        match self {
            LimitClass::PlusInfinity | LimitClass::NearMax => 1,
            LimitClass::MinusInfinity | LimitClass::NearMinusMax => -1,
            LimitClass::Normal | LimitClass::Nan => 0,
        }
    }
}

/// Classify a value. Total over all IEEE-754 doubles: every input maps
/// to exactly one class. Finite values beyond `f64::MAX / OVERFLOW_MARGIN`
/// are flagged as near-overflow so they draw as edge markers instead of
/// at an absurd pixel position.
pub fn classify(x: f64) -> LimitClass {
    if x.is_nan() {
        return LimitClass::Nan;
    }
    if x == f64::INFINITY {
        return LimitClass::PlusInfinity;
    }
    if x == f64::NEG_INFINITY {
        return LimitClass::MinusInfinity;
    }
    if x > f64::MAX / OVERFLOW_MARGIN {
        return LimitClass::NearMax;
    }
    if x < f64::MIN / OVERFLOW_MARGIN {
        return LimitClass::NearMinusMax;
    }
    LimitClass::Normal
}

/// Per-coordinate classification of a 2D point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PointClass {
    pub x: LimitClass,
    pub y: LimitClass,
}

impl PointClass {
    /// A point is at limit if either coordinate is non-Normal.
    pub fn is_at_limit(&self) -> bool {
        self.x.is_at_limit() || self.y.is_at_limit()
    }

    /// Marker an emitter should use for this point. Vertical escape wins
    /// over horizontal when both coordinates are at limit; NaN draws a cross.
    pub fn marker(&self) -> Option<LimitMarker> {
        if !self.is_at_limit() {
            return None;
        }
        if self.x == LimitClass::Nan || self.y == LimitClass::Nan {
            return Some(LimitMarker::Cross);
        }
        match self.y.direction() {
            1 => Some(LimitMarker::ArrowUp),
            -1 => Some(LimitMarker::ArrowDown),
            _ => match self.x.direction() {
                1 => Some(LimitMarker::ArrowRight),
                -1 => Some(LimitMarker::ArrowLeft),
                _ => Some(LimitMarker::Cross),
            },
        }
    }
}

/// Classify both coordinates of a point independently.
pub fn classify_point(p: (f64, f64)) -> PointClass {
    PointClass { x: classify(p.0), y: classify(p.1) }
}
