use serde::{Deserialize, Serialize};

/// One sample from a convergence sweep: a step size and the worst-case
/// position/velocity errors observed when integrating with it.
///
/// Result files usually carry extra bookkeeping fields (solver name, wall
/// time, error standard deviations); only these three take part in the
/// analysis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResultRecord {
    /// Integrator time step
    pub dt: f64,
    /// Maximum absolute position error over the run
    pub p_diff_max: f64,
    /// Maximum absolute velocity error over the run
    pub v_diff_max: f64,
}

/// An ordered series of sweep records for a single kernel.
///
/// Record order is preserved exactly as loaded; nothing here re-sorts by
/// step size.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultSeries {
    records: Vec<ResultRecord>,
}

impl ResultSeries {
    #[must_use]
    pub fn new(records: Vec<ResultRecord>) -> Self {
        Self { records }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn records(&self) -> &[ResultRecord] {
        &self.records
    }

    /// Step axis with every entry scaled by the integrator's sub-step count.
    #[must_use]
    pub fn scaled_dt(&self, calc_cnt: u32) -> Vec<f64> {
        let scale = f64::from(calc_cnt);
        self.records.iter().map(|r| r.dt * scale).collect()
    }

    /// Position error column, in record order.
    #[must_use]
    pub fn p_errors(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.p_diff_max).collect()
    }

    /// Velocity error column, in record order.
    #[must_use]
    pub fn v_errors(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.v_diff_max).collect()
    }
}

impl From<Vec<ResultRecord>> for ResultSeries {
    fn from(records: Vec<ResultRecord>) -> Self {
        Self { records }
    }
}

impl FromIterator<ResultRecord> for ResultSeries {
    fn from_iter<I: IntoIterator<Item = ResultRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}
