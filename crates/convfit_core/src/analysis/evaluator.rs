//! The analysis pipeline: one kernel's sweep in, two power-law fits out.

use crate::error::{AnalysisError, InsufficientDataError};
use crate::model::{PowerLawFit, ResultSeries};
use crate::regression::{check_log_domain, fit_power_law};

use super::AnalysisConfig;

/// Everything `analyze_series` learns about one kernel's sweep.
///
/// The three sequences span the full series in record order; only entries
/// from `transient_skip` onward informed the fits. Keeping the whole axis
/// lets callers draw the fitted curve across every recorded step size.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvergenceAnalysis {
    /// Step axis, already scaled by `calc_cnt`
    pub scaled_dt: Vec<f64>,
    /// Raw position errors, aligned with `scaled_dt`
    pub p_diff_max: Vec<f64>,
    /// Raw velocity errors, aligned with `scaled_dt`
    pub v_diff_max: Vec<f64>,
    /// Power law fitted to the position errors
    pub p_fit: PowerLawFit,
    /// Power law fitted to the velocity errors
    pub v_fit: PowerLawFit,
}

impl ConvergenceAnalysis {
    /// Raw position-error trace as (step, error) points.
    #[must_use]
    pub fn p_points(&self) -> Vec<(f64, f64)> {
        self.scaled_dt
            .iter()
            .copied()
            .zip(self.p_diff_max.iter().copied())
            .collect()
    }

    /// Raw velocity-error trace as (step, error) points.
    #[must_use]
    pub fn v_points(&self) -> Vec<(f64, f64)> {
        self.scaled_dt
            .iter()
            .copied()
            .zip(self.v_diff_max.iter().copied())
            .collect()
    }

    /// Position fit evaluated over the full step axis.
    #[must_use]
    pub fn p_fit_curve(&self) -> Vec<(f64, f64)> {
        self.p_fit.curve(&self.scaled_dt)
    }

    /// Velocity fit evaluated over the full step axis.
    #[must_use]
    pub fn v_fit_curve(&self) -> Vec<(f64, f64)> {
        self.v_fit.curve(&self.scaled_dt)
    }
}

/// Reduce one kernel's sweep to position and velocity power-law fits.
///
/// The first `transient_skip` records are excluded from the fits but kept in
/// the returned sequences. Every column must be strictly positive over the
/// whole series: the fits take logarithms of the retained suffix and the
/// full sequences end up on log-scaled axes.
pub fn analyze_series(
    series: &ResultSeries,
    config: &AnalysisConfig,
) -> Result<ConvergenceAnalysis, AnalysisError> {
    config.validate()?;

    let available = series.len();
    let required = config.min_records();
    if available < required {
        return Err(InsufficientDataError::TooFewRecords {
            required,
            available,
        }
        .into());
    }

    let scaled_dt = series.scaled_dt(config.calc_cnt);
    let p_diff_max = series.p_errors();
    let v_diff_max = series.v_errors();

    check_log_domain("dt", &scaled_dt)?;
    check_log_domain("p_diff_max", &p_diff_max)?;
    check_log_domain("v_diff_max", &v_diff_max)?;

    let skip = config.transient_skip;
    let p_fit = fit_power_law(&scaled_dt[skip..], &p_diff_max[skip..])?;
    let v_fit = fit_power_law(&scaled_dt[skip..], &v_diff_max[skip..])?;

    Ok(ConvergenceAnalysis {
        scaled_dt,
        p_diff_max,
        v_diff_max,
        p_fit,
        v_fit,
    })
}
