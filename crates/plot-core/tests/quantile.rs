// File: crates/plot-core/tests/quantile.rs
// Purpose: Validate quantile interpolation rules, medians, and box fences.

use plot_core::{median, quantile, ChartError, InterpolationRule, QuantileSummary};

const RULES: [InterpolationRule; 7] = [
    InterpolationRule::InverseCdf,
    InterpolationRule::ClosestObservation,
    InterpolationRule::Hazen,
    InterpolationRule::Weibull,
    InterpolationRule::Linear,
    InterpolationRule::MedianUnbiased,
    InterpolationRule::NormalUnbiased,
];

fn twelve() -> Vec<f64> {
    vec![0.2, 1.1, 3.3, 4.2, 5.4, 6.5, 6.8, 6.9, 7.2, 7.3, 8.1, 8.5]
}

#[test]
fn median_of_twelve_sorted_values() {
    let m = median(&twelve()).unwrap();
    assert!((m - 6.65).abs() < 1e-12, "median was {m}");
}

#[test]
fn median_odd_length_takes_center() {
    assert_eq!(median(&[1.0, 2.0, 9.0]).unwrap(), 2.0);
    assert_eq!(median(&[4.0]).unwrap(), 4.0);
}

#[test]
fn quantile_endpoints_stay_in_sample() {
    let data = twelve();
    for rule in RULES {
        let lo = quantile(&data, 0.0, rule).unwrap();
        let hi = quantile(&data, 1.0, rule).unwrap();
        assert!(lo >= data[0] && lo <= data[data.len() - 1]);
        assert!(hi >= data[0] && hi <= data[data.len() - 1]);
    }
}

#[test]
fn quantile_monotonic_in_p() {
    let data = twelve();
    for rule in RULES {
        let mut prev = f64::NEG_INFINITY;
        for i in 0..=20 {
            let p = i as f64 / 20.0;
            let q = quantile(&data, p, rule).unwrap();
            assert!(q >= prev - 1e-12, "{rule:?}: q({p}) = {q} < {prev}");
            prev = q;
        }
    }
}

#[test]
fn median_unbiased_rule_uses_third_offset() {
    // n=9, p=0.25, m=(p+1)/3: npm = 2.25 + 1.25/3, j=2, g=npm-2.
    let data: Vec<f64> = (1..=9).map(f64::from).collect();
    let q = quantile(&data, 0.25, InterpolationRule::MedianUnbiased).unwrap();
    let npm = 9.0 * 0.25 + 1.25 / 3.0;
    let expected = 2.0 + (npm - 2.0) * 1.0;
    assert!((q - expected).abs() < 1e-12);
}

#[test]
fn quantile_errors() {
    let empty: [f64; 0] = [];
    assert_eq!(
        quantile(&empty, 0.5, InterpolationRule::default()).unwrap_err(),
        ChartError::EmptyQuantileSample
    );
    assert_eq!(
        quantile(&[1.0], 1.5, InterpolationRule::default()).unwrap_err(),
        ChartError::InvalidProbability(1.5)
    );
    assert_eq!(median(&empty).unwrap_err(), ChartError::EmptyQuantileSample);
}

#[test]
fn summary_classifies_extreme_outlier() {
    let data = vec![2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 50.0];
    let s = QuantileSummary::from_sample(&data, InterpolationRule::MedianUnbiased).unwrap();

    assert_eq!(s.min, 2.0);
    assert_eq!(s.max, 50.0);
    assert!(s.q1 < s.median && s.median < s.q3);
    assert!((s.lower_fence - (s.q1 - 1.5 * s.iqr())).abs() < 1e-12);
    assert!((s.upper_fence - (s.q3 + 1.5 * s.iqr())).abs() < 1e-12);

    // 50 is beyond the 3*IQR fence; nothing else leaves the mild fences.
    assert_eq!(s.extreme_outliers, vec![50.0]);
    assert!(s.mild_outliers.is_empty());
    assert_eq!(s.whisker_high, 9.0);
    assert_eq!(s.whisker_low, 2.0);
}

#[test]
fn summary_separates_mild_from_extreme() {
    // Tight cluster with one mild and one extreme outlier above it.
    let mut data: Vec<f64> = (0..20).map(|i| 10.0 + i as f64 * 0.1).collect();
    let s0 = QuantileSummary::from_sample(&data, InterpolationRule::MedianUnbiased).unwrap();
    let mild = s0.upper_fence + 0.5 * s0.iqr();
    let extreme = s0.q3 + 4.0 * s0.iqr();
    data.push(mild);
    data.push(extreme);

    let s = QuantileSummary::from_sample(&data, InterpolationRule::MedianUnbiased).unwrap();
    assert!(s.mild_outliers.contains(&mild), "mild {mild} in {:?}", s.mild_outliers);
    assert!(s.extreme_outliers.contains(&extreme));
    assert!(!s.extreme_outliers.contains(&mild));
}

#[test]
fn summary_from_unsorted_input() {
    let data = vec![8.5, 0.2, 7.2, 1.1, 6.8, 3.3, 7.3, 4.2, 8.1, 5.4, 6.9, 6.5];
    let s = QuantileSummary::from_sample(&data, InterpolationRule::default()).unwrap();
    assert!((s.median - 6.65).abs() < 1e-12);
    assert_eq!(s.min, 0.2);
    assert_eq!(s.max, 8.5);
}
