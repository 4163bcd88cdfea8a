//! Tunables for the convergence analysis.

use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;

/// Records discarded from the head of a series before fitting.
///
/// Coarse steps sit outside the asymptotic regime and would drag the fitted
/// slope around; the upstream sweeps only settle into it around the 19th
/// refinement.
pub const DEFAULT_TRANSIENT_SKIP: usize = 18;

/// Controls how a convergence series is reduced to power-law fits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Sub-steps the integrator performs per recorded step; scales the
    /// step axis so kernels with different stage counts stay comparable.
    pub calc_cnt: u32,
    /// Leading records excluded from the fit (still part of the plotted
    /// sequences).
    pub transient_skip: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            calc_cnt: 1,
            transient_skip: DEFAULT_TRANSIENT_SKIP,
        }
    }
}

impl AnalysisConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_calc_cnt(mut self, calc_cnt: u32) -> Self {
        self.calc_cnt = calc_cnt;
        self
    }

    #[must_use]
    pub fn with_transient_skip(mut self, transient_skip: usize) -> Self {
        self.transient_skip = transient_skip;
        self
    }

    /// Fewest records a series needs: the skipped prefix plus two fit points.
    #[must_use]
    pub fn min_records(&self) -> usize {
        self.transient_skip.saturating_add(2)
    }

    pub fn validate(&self) -> Result<(), AnalysisError> {
        if self.calc_cnt == 0 {
            return Err(AnalysisError::Config(
                "calc_cnt must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
