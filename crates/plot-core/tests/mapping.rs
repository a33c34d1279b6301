// File: crates/plot-core/tests/mapping.rs
// Purpose: Validate the linear data<->pixel transform and its round-trip law.

use plot_core::{to_data, to_pixel, AxisRange, LinearMap};

fn range(min: f64, max: f64, step: f64) -> AxisRange {
    AxisRange::explicit(min, max, step).unwrap()
}

#[test]
fn endpoints_map_to_span_edges() {
    let r = range(0.0, 10.0, 1.0);
    let m = LinearMap::from_range(&r, 100.0, 500.0, false);
    assert_eq!(m.to_px(0.0), 100.0);
    assert_eq!(m.to_px(10.0), 500.0);
    assert_eq!(m.to_px(5.0), 300.0);
}

#[test]
fn inverted_span_flips_direction() {
    // Pixel Y grows downward; data min lands on the high pixel.
    let r = range(0.0, 10.0, 1.0);
    let m = LinearMap::from_range(&r, 20.0, 420.0, true);
    assert_eq!(m.to_px(0.0), 420.0);
    assert_eq!(m.to_px(10.0), 20.0);
}

#[test]
fn round_trip_within_tolerance() {
    let r = range(-3.0, 17.0, 2.0);
    for invert in [false, true] {
        let m = LinearMap::from_range(&r, 72.0, 953.0, invert);
        for i in 0..=50 {
            let v = r.min + r.span() * i as f64 / 50.0;
            let back = m.from_px(m.to_px(v));
            let scale = v.abs().max(1.0);
            assert!(
                (back - v).abs() <= 1e-9 * scale,
                "invert={invert}: {v} -> {back}"
            );
        }
    }
}

#[test]
fn monotonic_over_the_range() {
    let r = range(-1.0, 1.0, 0.5);
    let m = LinearMap::from_range(&r, 0.0, 300.0, false);
    let mut prev = f64::NEG_INFINITY;
    for i in 0..=100 {
        let v = -1.0 + 2.0 * i as f64 / 100.0;
        let px = m.to_px(v);
        assert!(px >= prev);
        prev = px;
    }
}

#[test]
fn out_of_range_extrapolates_without_clamping() {
    let r = range(0.0, 10.0, 1.0);
    let m = LinearMap::from_range(&r, 100.0, 200.0, false);
    assert!(m.to_px(-5.0) < 100.0);
    assert!(m.to_px(20.0) > 200.0);
}

#[test]
fn zero_width_pixel_span_stays_finite() {
    let r = range(0.0, 10.0, 1.0);
    for invert in [false, true] {
        let m = LinearMap::from_range(&r, 50.0, 50.0, invert);
        assert!(m.to_px(5.0).is_finite());
        assert!(m.from_px(50.0).is_finite());
    }
    assert!(to_data(50.0, &r, (50.0, 50.0), false).is_finite());
}

#[test]
fn free_functions_match_struct() {
    let r = range(2.0, 8.0, 1.0);
    let m = LinearMap::from_range(&r, 10.0, 90.0, true);
    assert_eq!(to_pixel(5.0, &r, (10.0, 90.0), true), m.to_px(5.0));
    assert_eq!(to_data(50.0, &r, (10.0, 90.0), true), m.from_px(50.0));
}
