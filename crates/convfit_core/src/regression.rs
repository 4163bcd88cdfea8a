//! Least-squares fitting, in plain and log-log space.

use crate::error::{AnalysisError, DomainError, InsufficientDataError};
use crate::model::PowerLawFit;

/// Simple linear regression via ordinary least squares.
///
/// Returns `(slope, intercept)` for `y = slope * x + intercept`, or `None`
/// when fewer than two points are given or the x values have no spread.
#[must_use]
pub fn linear_regression(xs: &[f64], ys: &[f64]) -> Option<(f64, f64)> {
    let n = xs.len().min(ys.len());
    if n < 2 {
        return None;
    }

    let n_f = n as f64;
    let mean_x: f64 = xs[..n].iter().sum::<f64>() / n_f;
    let mean_y: f64 = ys[..n].iter().sum::<f64>() / n_f;

    // Centered sums keep the slope stable when the axis sits far from zero,
    // which log-transformed step sizes always do.
    let mut ss_xx = 0.0;
    let mut ss_xy = 0.0;
    for (&x, &y) in xs[..n].iter().zip(&ys[..n]) {
        ss_xx += (x - mean_x) * (x - mean_x);
        ss_xy += (x - mean_x) * (y - mean_y);
    }

    if ss_xx < f64::EPSILON {
        return None; // vertical line, undefined slope
    }

    let slope = ss_xy / ss_xx;
    Some((slope, mean_y - slope * mean_x))
}

/// Fail on the first value a logarithm cannot be taken of.
pub(crate) fn check_log_domain(field: &'static str, values: &[f64]) -> Result<(), DomainError> {
    for (index, &value) in values.iter().enumerate() {
        if !value.is_finite() || value <= 0.0 {
            return Err(DomainError {
                field,
                index,
                value,
            });
        }
    }
    Ok(())
}

/// Fit `y = exp(coefficient) * x^exponent` by least squares in log-log space.
///
/// Both sequences must be strictly positive; the fit is over the shorter of
/// the two lengths.
pub fn fit_power_law(xs: &[f64], ys: &[f64]) -> Result<PowerLawFit, AnalysisError> {
    let n = xs.len().min(ys.len());
    if n < 2 {
        return Err(InsufficientDataError::TooFewRecords {
            required: 2,
            available: n,
        }
        .into());
    }

    check_log_domain("x", &xs[..n])?;
    check_log_domain("y", &ys[..n])?;

    let log_x: Vec<f64> = xs[..n].iter().map(|x| x.ln()).collect();
    let log_y: Vec<f64> = ys[..n].iter().map(|y| y.ln()).collect();

    let (exponent, coefficient) = linear_regression(&log_x, &log_y)
        .ok_or(InsufficientDataError::IdenticalStepSizes)?;

    Ok(PowerLawFit {
        exponent,
        coefficient,
    })
}
