//! Tests for the series-to-fits pipeline and its error taxonomy
//!
//! These tests verify that:
//! - A synthetic fourth-order sweep reports an order-four fit
//! - Position and velocity columns are fitted independently
//! - The transient prefix is excluded from fits but kept in the output
//! - Record order is preserved, never re-sorted
//! - Bad input is rejected with the right error, never a poisoned fit

use crate::analysis::{AnalysisConfig, analyze_series};
use crate::error::{AnalysisError, InsufficientDataError};
use crate::model::{ResultRecord, ResultSeries};

/// Build a series on the dyadic grid `dt_i = 2^-i` following exact power laws.
fn power_series(
    len: usize,
    p_scale: f64,
    p_order: f64,
    v_scale: f64,
    v_order: f64,
) -> ResultSeries {
    (0..len)
        .map(|i| {
            let dt = 2.0_f64.powi(-(i as i32));
            ResultRecord {
                dt,
                p_diff_max: p_scale * dt.powf(p_order),
                v_diff_max: v_scale * dt.powf(v_order),
            }
        })
        .collect()
}

/// Test the canonical scenario: 20 dyadic steps of an exact fourth-order law
#[test]
fn test_fourth_order_series_reports_order_four() {
    let series = power_series(20, 1e-3, 4.0, 1e-3, 4.0);
    let analysis = analyze_series(&series, &AnalysisConfig::default()).unwrap();

    assert!(
        (analysis.p_fit.exponent - 4.0).abs() < 1e-6,
        "Expected exponent 4.0, got {}",
        analysis.p_fit.exponent
    );
    let expected_coefficient = 1e-3_f64.ln();
    assert!(
        (analysis.p_fit.coefficient - expected_coefficient).abs() < 1e-6,
        "Expected coefficient {:.6}, got {:.6}",
        expected_coefficient,
        analysis.p_fit.coefficient
    );
}

/// Test that position and velocity columns get independent fits
#[test]
fn test_velocity_fit_is_independent() {
    let series = power_series(22, 1e-3, 4.0, 5e-2, 3.0);
    let analysis = analyze_series(&series, &AnalysisConfig::default()).unwrap();

    assert!(
        (analysis.p_fit.exponent - 4.0).abs() < 1e-6,
        "Expected position exponent 4.0, got {}",
        analysis.p_fit.exponent
    );
    assert!(
        (analysis.v_fit.exponent - 3.0).abs() < 1e-6,
        "Expected velocity exponent 3.0, got {}",
        analysis.v_fit.exponent
    );
}

/// Test that one record short of the minimum is rejected
#[test]
fn test_too_few_records() {
    let config = AnalysisConfig::default();
    let series = power_series(config.min_records() - 1, 1e-3, 4.0, 1e-3, 4.0);

    let err = analyze_series(&series, &config).unwrap_err();
    assert!(matches!(
        err,
        AnalysisError::InsufficientData(InsufficientDataError::TooFewRecords {
            required: 20,
            available: 19,
        })
    ));
}

/// Test that a skip larger than any possible series is an error, not a panic
#[test]
fn test_huge_transient_skip_is_rejected() {
    let series = power_series(20, 1e-3, 4.0, 1e-3, 4.0);
    let config = AnalysisConfig::new().with_transient_skip(usize::MAX);

    let err = analyze_series(&series, &config).unwrap_err();
    assert!(matches!(
        err,
        AnalysisError::InsufficientData(InsufficientDataError::TooFewRecords { .. })
    ));
}

/// Test that a zero error magnitude is a domain error naming the record
#[test]
fn test_zero_position_error_is_a_domain_error() {
    let mut records: Vec<ResultRecord> = power_series(20, 1e-3, 4.0, 1e-3, 4.0)
        .records()
        .to_vec();
    records[5].p_diff_max = 0.0;

    let err = analyze_series(&ResultSeries::new(records), &AnalysisConfig::default()).unwrap_err();
    match err {
        AnalysisError::Domain(d) => {
            assert_eq!(d.field, "p_diff_max");
            assert_eq!(d.index, 5);
            assert_eq!(d.value, 0.0);
        }
        other => panic!("Expected a domain error, got {other:?}"),
    }
}

/// Test that a non-positive step size is a domain error naming the record
#[test]
fn test_non_positive_step_is_a_domain_error() {
    let mut records: Vec<ResultRecord> = power_series(20, 1e-3, 4.0, 1e-3, 4.0)
        .records()
        .to_vec();
    records[3].dt = -0.5;

    let err = analyze_series(&ResultSeries::new(records), &AnalysisConfig::default()).unwrap_err();
    assert!(matches!(
        err,
        AnalysisError::Domain(d) if d.field == "dt" && d.index == 3
    ));
}

/// Test that a zero sub-step count is rejected before anything else runs
#[test]
fn test_zero_calc_cnt_is_a_config_error() {
    let series = power_series(20, 1e-3, 4.0, 1e-3, 4.0);
    let config = AnalysisConfig::new().with_calc_cnt(0);

    let err = analyze_series(&series, &config).unwrap_err();
    match err {
        AnalysisError::Config(msg) => {
            assert!(msg.contains("calc_cnt"), "Unhelpful message: {msg}")
        }
        other => panic!("Expected a config error, got {other:?}"),
    }
}

/// Test that the transient prefix never leaks into the fit
#[test]
fn test_transient_prefix_does_not_perturb_the_fit() {
    // Constant errors over the first 18 steps would drag the slope toward
    // zero if they were fitted; the asymptotic tail is an exact fourth order.
    let records: Vec<ResultRecord> = (0..24)
        .map(|i| {
            let dt = 2.0_f64.powi(-i);
            let asymptotic = 1e-3 * dt.powf(4.0);
            let (p, v) = if i < 18 {
                (0.9, 0.7)
            } else {
                (asymptotic, asymptotic)
            };
            ResultRecord {
                dt,
                p_diff_max: p,
                v_diff_max: v,
            }
        })
        .collect();

    let analysis =
        analyze_series(&ResultSeries::new(records), &AnalysisConfig::default()).unwrap();

    assert!(
        (analysis.p_fit.exponent - 4.0).abs() < 1e-9,
        "Prefix leaked into the fit: exponent {}",
        analysis.p_fit.exponent
    );
    // The full sequences still carry all 24 records for plotting.
    assert_eq!(analysis.scaled_dt.len(), 24);
    assert_eq!(analysis.p_diff_max[0], 0.9);
}

/// Test that record order is preserved whichever way the sweep was stored
#[test]
fn test_record_order_is_preserved() {
    let descending = power_series(22, 1e-3, 4.0, 1e-3, 4.0);
    let ascending = ResultSeries::new(descending.records().iter().rev().copied().collect());

    let config = AnalysisConfig::default();
    let desc = analyze_series(&descending, &config).unwrap();
    let asc = analyze_series(&ascending, &config).unwrap();

    for (i, record) in descending.records().iter().enumerate() {
        assert_eq!(desc.scaled_dt[i], record.dt, "Order changed at index {i}");
    }
    for (i, record) in ascending.records().iter().enumerate() {
        assert_eq!(asc.scaled_dt[i], record.dt, "Order changed at index {i}");
    }

    // Exact power-law data fits to the same line from either direction.
    assert!(
        (desc.p_fit.exponent - asc.p_fit.exponent).abs() < 1e-9,
        "Storage order changed the fit: {} vs {}",
        desc.p_fit.exponent,
        asc.p_fit.exponent
    );
}

/// Test that `calc_cnt` scales the axis and shifts only the coefficient
#[test]
fn test_calc_cnt_scales_the_axis() {
    let series = power_series(22, 1e-3, 4.0, 1e-3, 4.0);

    let base = analyze_series(&series, &AnalysisConfig::default()).unwrap();
    let scaled = analyze_series(&series, &AnalysisConfig::new().with_calc_cnt(3)).unwrap();

    for (i, record) in series.records().iter().enumerate() {
        assert_eq!(scaled.scaled_dt[i], record.dt * 3.0);
    }
    assert_eq!(scaled.p_diff_max, base.p_diff_max);

    assert!(
        (scaled.p_fit.exponent - base.p_fit.exponent).abs() < 1e-9,
        "Exponent must not move under step scaling: {} vs {}",
        base.p_fit.exponent,
        scaled.p_fit.exponent
    );
    let expected = base.p_fit.coefficient - base.p_fit.exponent * 3.0_f64.ln();
    assert!(
        (scaled.p_fit.coefficient - expected).abs() < 1e-9,
        "Expected coefficient {expected}, got {}",
        scaled.p_fit.coefficient
    );
}

/// Test that an axis without spread cannot support a slope
#[test]
fn test_identical_step_sizes_cannot_be_fitted() {
    let records: Vec<ResultRecord> = (0..20)
        .map(|i| ResultRecord {
            dt: 0.5,
            p_diff_max: 1e-3 * (i + 1) as f64,
            v_diff_max: 1e-3 * (i + 1) as f64,
        })
        .collect();

    let err = analyze_series(&ResultSeries::new(records), &AnalysisConfig::default()).unwrap_err();
    assert!(matches!(
        err,
        AnalysisError::InsufficientData(InsufficientDataError::IdenticalStepSizes)
    ));
}

/// Test that fitted curves are reconstructed over the full untruncated axis
#[test]
fn test_fit_curves_span_the_full_axis() {
    let series = power_series(24, 1e-3, 4.0, 5e-2, 3.0);
    let analysis = analyze_series(&series, &AnalysisConfig::default()).unwrap();

    let curve = analysis.p_fit_curve();
    assert_eq!(curve.len(), 24, "Curve must cover the skipped prefix too");

    for (i, &(x, y)) in curve.iter().enumerate() {
        assert_eq!(x, analysis.scaled_dt[i]);
        let expected = analysis.p_fit.coefficient.exp() * x.powf(analysis.p_fit.exponent);
        assert!(
            (y - expected).abs() <= 1e-12 * expected.abs(),
            "Expected {expected}, got {y} at index {i}"
        );
    }
}
