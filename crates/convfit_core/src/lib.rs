//! Convergence analysis library
//!
//! This crate reduces time-step sweeps from numerical integrators to
//! power-law fits of error versus step size. It supports:
//! - Ordered result series with per-kernel step scaling (`calc_cnt`)
//! - Transient-prefix truncation before fitting
//! - Least-squares power-law fits in log-log space
//! - Fitted-curve reconstruction over the full step axis
//! - A typed error taxonomy (domain, sufficiency, configuration)
//!
//! # Typical use
//!
//! ```ignore
//! use convfit_core::{AnalysisConfig, ResultSeries, analyze_series};
//!
//! let series: ResultSeries = records.into();
//! let config = AnalysisConfig::new().with_calc_cnt(4);
//! let analysis = analyze_series(&series, &config)?;
//! assert!(analysis.p_fit.exponent > 3.9);
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod analysis;
pub mod error;
pub mod regression;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use analysis::{AnalysisConfig, ConvergenceAnalysis, DEFAULT_TRANSIENT_SKIP, analyze_series};
pub use error::{AnalysisError, DomainError, InsufficientDataError};
pub use model::{PowerLawFit, ResultRecord, ResultSeries};
pub use regression::{fit_power_law, linear_regression};
