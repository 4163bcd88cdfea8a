use serde::{Deserialize, Serialize};

/// Parameters of a fitted power law `y = exp(coefficient) * x^exponent`.
///
/// `exponent` is the slope of the least-squares line in log-log space, i.e.
/// the observed convergence order. `coefficient` is that line's intercept,
/// the natural log of the power law's scale factor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PowerLawFit {
    pub exponent: f64,
    pub coefficient: f64,
}

impl PowerLawFit {
    /// The literal scale factor `exp(coefficient)`.
    #[must_use]
    pub fn scale_factor(&self) -> f64 {
        self.coefficient.exp()
    }

    /// Evaluate the fitted law at `x`.
    #[must_use]
    pub fn evaluate(&self, x: f64) -> f64 {
        self.scale_factor() * x.powf(self.exponent)
    }

    /// Evaluate the fitted law over a whole axis.
    #[must_use]
    pub fn curve(&self, xs: &[f64]) -> Vec<(f64, f64)> {
        xs.iter().map(|&x| (x, self.evaluate(x))).collect()
    }
}
