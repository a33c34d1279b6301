// File: crates/plot-core/src/layout.rs
// Summary: Resolve non-overlapping pixel regions: plot window, legend, labels, bands.

use crate::axis::AxisRange;
use crate::geometry::Rect;
use crate::scale::LinearMap;
use crate::types::Insets;

/// Estimated text extents supplied by the caller. Real font shaping is
/// an emitter concern; the resolver only needs rough box sizes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextMetrics {
    pub char_width: f64,
    pub line_height: f64,
}

impl Default for TextMetrics {
    fn default() -> Self {
        Self { char_width: 7.2, line_height: 14.0 }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LegendCorner {
    TopRight,
    TopLeft,
    BottomRight,
    BottomLeft,
}

/// Where the X-axis line is drawn relative to the plot window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum XAxisPosition {
    /// Along the bottom edge of the plot window.
    WindowBottom,
    /// At the pixel position of data-value zero when zero lies inside
    /// the Y range; falls back to the bottom edge otherwise.
    ZeroOrigin,
    /// Along the top edge of the plot window.
    WindowTop,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutFlags {
    pub title_on: bool,
    pub legend_on: bool,
    pub x_label_on: bool,
    pub y_label_on: bool,
    pub tick_values_on: bool,
    pub legend_corner: LegendCorner,
    pub x_axis_position: XAxisPosition,
}

impl Default for LayoutFlags {
    fn default() -> Self {
        Self {
            title_on: false,
            legend_on: false,
            x_label_on: true,
            y_label_on: true,
            tick_values_on: true,
            legend_corner: LegendCorner::TopRight,
            x_axis_position: XAxisPosition::WindowBottom,
        }
    }
}

/// Non-fatal layout degradations. Rendering proceeds either way.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutWarning {
    /// Requested bands exhausted the image; the plot window was clamped
    /// to a minimum-size rectangle.
    PlotWindowCollapsed,
    /// The legend did not fit at its requested size and was shrunk.
    LegendTruncated,
}

/// The resolved pixel regions of one chart image. Disabled zones are
/// zero-area rectangles on their home edge.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    pub plot_window: Rect,
    pub title_band: Rect,
    pub legend_box: Rect,
    pub x_label_band: Rect,
    pub y_label_band: Rect,
    pub warnings: Vec<LayoutWarning>,
}

impl Frame {
    pub fn is_degraded(&self) -> bool {
        !self.warnings.is_empty()
    }
}

// Fixed paddings, in pixels.
const LEGEND_SWATCH_W: f64 = 18.0;
const LEGEND_PAD: f64 = 6.0;
const BAND_GAP: f64 = 4.0;
/// Estimated digits in a tick-value label.
const TICK_LABEL_CHARS: f64 = 6.0;

/// Carve `amount` pixels off one side of `work`, clamped so the
/// remainder keeps at least one pixel in that dimension. Returns the
/// amount actually carved.
fn carve_top(work: &mut Rect, amount: f64) -> f64 {
    let a = amount.max(0.0).min(work.height() - 1.0).max(0.0);
    work.y_min += a;
    a
}

fn carve_bottom(work: &mut Rect, amount: f64) -> f64 {
    let a = amount.max(0.0).min(work.height() - 1.0).max(0.0);
    work.y_max -= a;
    a
}

fn carve_left(work: &mut Rect, amount: f64) -> f64 {
    let a = amount.max(0.0).min(work.width() - 1.0).max(0.0);
    work.x_min += a;
    a
}

fn carve_right(work: &mut Rect, amount: f64) -> f64 {
    let a = amount.max(0.0).min(work.width() - 1.0).max(0.0);
    work.x_max -= a;
    a
}

/// Resolve the pixel regions for an image of `width` x `height`.
///
/// Bands are carved off the full image in a fixed order (margins, title,
/// legend, axis labels, tick-value bands); whatever remains is the plot
/// window. This never fails: oversized requests degrade to a minimum
/// 1x1 plot window and report a warning instead.
pub fn resolve(
    width: u32,
    height: u32,
    insets: &Insets,
    flags: &LayoutFlags,
    text: &TextMetrics,
    series_names: &[&str],
) -> Frame {
    let w = width.max(2) as f64;
    let h = height.max(2) as f64;
    let mut warnings = Vec::new();

    let mut work = Rect::from_bounds(
        (insets.left as f64).min(w - 1.0),
        (insets.top as f64).min(h - 1.0),
        (w - insets.right as f64).max(insets.left as f64 + 1.0).min(w),
        (h - insets.bottom as f64).max(insets.top as f64 + 1.0).min(h),
    );

    // Title band across the top.
    let title_band = if flags.title_on {
        let want = text.line_height * 1.6;
        let top = work.y_min;
        let got = carve_top(&mut work, want + BAND_GAP);
        Rect::from_bounds(work.x_min, top, work.x_max, top + got - BAND_GAP.min(got))
    } else {
        Rect::degenerate_at(work.x_min, work.y_min)
    };

    // Legend box at its corner; the plot loses a vertical strip on that side.
    let legend_box = if flags.legend_on && !series_names.is_empty() {
        let longest = series_names.iter().map(|n| n.chars().count()).max().unwrap_or(0) as f64;
        let want_w = longest * text.char_width + LEGEND_SWATCH_W + 3.0 * LEGEND_PAD;
        let want_h = series_names.len() as f64 * text.line_height * 1.3 + 2.0 * LEGEND_PAD;
        let got_w = match flags.legend_corner {
            LegendCorner::TopRight | LegendCorner::BottomRight => carve_right(&mut work, want_w + BAND_GAP),
            LegendCorner::TopLeft | LegendCorner::BottomLeft => carve_left(&mut work, want_w + BAND_GAP),
        };
        let box_w = (got_w - BAND_GAP).max(0.0);
        let box_h = want_h.min(work.height());
        if box_w + BAND_GAP < want_w || box_h < want_h {
            warnings.push(LayoutWarning::LegendTruncated);
        }
        match flags.legend_corner {
            LegendCorner::TopRight => {
                Rect::from_origin_size(work.x_max + BAND_GAP, work.y_min, box_w, box_h)
            }
            LegendCorner::BottomRight => {
                Rect::from_origin_size(work.x_max + BAND_GAP, work.y_max - box_h, box_w, box_h)
            }
            LegendCorner::TopLeft => {
                Rect::from_origin_size(work.x_min - BAND_GAP - box_w, work.y_min, box_w, box_h)
            }
            LegendCorner::BottomLeft => {
                Rect::from_origin_size(work.x_min - BAND_GAP - box_w, work.y_max - box_h, box_w, box_h)
            }
        }
    } else {
        Rect::degenerate_at(work.x_max, work.y_min)
    };

    // Y-axis label: a rotated line of text along the left edge.
    let y_label_band = if flags.y_label_on {
        let got = carve_left(&mut work, text.line_height * 1.4 + BAND_GAP);
        Rect::from_bounds(work.x_min - got, work.y_min, work.x_min - BAND_GAP.min(got), work.y_max)
    } else {
        Rect::degenerate_at(work.x_min, work.y_min)
    };

    // X-axis label band: the outermost bottom strip. Carved before the
    // tick-value band so the tick numbers stay adjacent to the window.
    let x_label_band = if flags.x_label_on {
        let got = carve_bottom(&mut work, text.line_height * 1.4 + BAND_GAP);
        Rect::from_bounds(work.x_min, work.y_max + BAND_GAP.min(got), work.x_max, work.y_max + got)
    } else {
        Rect::degenerate_at(work.x_min, work.y_max)
    };

    // Tick-value bands: numbers left of the window and directly below it.
    if flags.tick_values_on {
        carve_left(&mut work, TICK_LABEL_CHARS * text.char_width + BAND_GAP);
        carve_bottom(&mut work, text.line_height * 1.2 + BAND_GAP);
    }

    let plot_window = if work.width() <= 1.0 || work.height() <= 1.0 {
        warnings.push(LayoutWarning::PlotWindowCollapsed);
        Rect::from_origin_size(work.x_min, work.y_min, 1.0, 1.0)
    } else {
        work
    };

    Frame { plot_window, title_band, legend_box, x_label_band, y_label_band, warnings }
}

/// Pixel Y of the X-axis line. `ZeroOrigin` needs the Y axis already
/// resolved, which fixes the evaluation order: scale Y before placing
/// the X-axis line.
pub fn x_axis_line_y(frame: &Frame, y_range: &AxisRange, position: XAxisPosition) -> f64 {
    let win = &frame.plot_window;
    match position {
        XAxisPosition::WindowBottom => win.y_max,
        XAxisPosition::WindowTop => win.y_min,
        XAxisPosition::ZeroOrigin => {
            if y_range.contains(0.0) {
                LinearMap::from_range(y_range, win.y_min, win.y_max, true).to_px(0.0)
            } else {
                win.y_max
            }
        }
    }
}
