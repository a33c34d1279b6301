// File: crates/plot-core/tests/limits.rs
// Purpose: Validate limit-value classification and marker routing.

use plot_core::limits::OVERFLOW_MARGIN;
use plot_core::{classify, classify_point, LimitClass, LimitMarker};

#[test]
fn classifier_is_total_over_representative_doubles() {
    let inputs = [
        0.0,
        -0.0,
        1.0,
        -1.0,
        f64::MIN_POSITIVE,
        f64::MAX,
        f64::MIN,
        f64::MAX / OVERFLOW_MARGIN,
        f64::INFINITY,
        f64::NEG_INFINITY,
        f64::NAN,
        f64::EPSILON,
        1e308,
        -1e308,
    ];
    for &x in &inputs {
        // Every double maps to exactly one class; the match below is
        // exhaustive, so reaching it at all proves totality here.
        let class = classify(x);
        match class {
            LimitClass::Normal => assert!(x.is_finite()),
            LimitClass::Nan => assert!(x.is_nan()),
            LimitClass::PlusInfinity => assert_eq!(x, f64::INFINITY),
            LimitClass::MinusInfinity => assert_eq!(x, f64::NEG_INFINITY),
            LimitClass::NearMax => assert!(x.is_finite() && x > 0.0),
            LimitClass::NearMinusMax => assert!(x.is_finite() && x < 0.0),
        }
    }
}

#[test]
fn near_overflow_margins() {
    let threshold = f64::MAX / OVERFLOW_MARGIN;
    assert_eq!(classify(threshold), LimitClass::Normal);
    assert_eq!(classify(threshold * 1.01), LimitClass::NearMax);
    assert_eq!(classify(f64::MAX), LimitClass::NearMax);
    assert_eq!(classify(-threshold * 1.01), LimitClass::NearMinusMax);
    assert_eq!(classify(f64::MIN), LimitClass::NearMinusMax);
}

#[test]
fn at_limit_predicate() {
    assert!(!classify(3.5).is_at_limit());
    assert!(classify(f64::NAN).is_at_limit());
    assert!(classify(f64::INFINITY).is_at_limit());
    assert!(classify(f64::MAX).is_at_limit());
}

#[test]
fn point_is_at_limit_if_either_coordinate_is() {
    assert!(!classify_point((1.0, 2.0)).is_at_limit());
    assert!(classify_point((f64::INFINITY, 2.0)).is_at_limit());
    assert!(classify_point((1.0, f64::NAN)).is_at_limit());
}

#[test]
fn marker_routing() {
    assert_eq!(classify_point((1.0, 2.0)).marker(), None);
    assert_eq!(
        classify_point((1.0, f64::INFINITY)).marker(),
        Some(LimitMarker::ArrowUp)
    );
    assert_eq!(
        classify_point((1.0, f64::NEG_INFINITY)).marker(),
        Some(LimitMarker::ArrowDown)
    );
    assert_eq!(
        classify_point((f64::INFINITY, 2.0)).marker(),
        Some(LimitMarker::ArrowRight)
    );
    assert_eq!(
        classify_point((f64::NEG_INFINITY, 2.0)).marker(),
        Some(LimitMarker::ArrowLeft)
    );
    assert_eq!(
        classify_point((f64::NAN, 2.0)).marker(),
        Some(LimitMarker::Cross)
    );
    // Vertical escape wins when both coordinates are at limit.
    assert_eq!(
        classify_point((f64::INFINITY, f64::INFINITY)).marker(),
        Some(LimitMarker::ArrowUp)
    );
    // Near-overflow routes like infinity.
    assert_eq!(
        classify_point((1.0, f64::MAX)).marker(),
        Some(LimitMarker::ArrowUp)
    );
}
