//! Convergence-order analysis.
//!
//! Reduces a step-size sweep to a power-law fit per error metric: the step
//! axis is scaled by the kernel's sub-step count, a transient prefix of
//! coarse steps is dropped, and the remainder is fitted in log-log space.
//!
//! ```ignore
//! use convfit_core::analysis::{AnalysisConfig, analyze_series};
//!
//! let config = AnalysisConfig::new().with_calc_cnt(3);
//! let analysis = analyze_series(&series, &config)?;
//! println!("observed order: {:.2}", analysis.p_fit.exponent);
//! ```

mod config;
mod evaluator;

pub use config::*;
pub use evaluator::*;
