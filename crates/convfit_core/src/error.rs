use std::fmt;

/// A value that must be strictly positive (a logarithm is taken of it)
/// was zero, negative, or non-finite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DomainError {
    /// Which column the value came from
    pub field: &'static str,
    /// Index of the offending record within the series
    pub index: usize,
    pub value: f64,
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at record {} is {}, expected a positive finite value",
            self.field, self.index, self.value
        )
    }
}

impl std::error::Error for DomainError {}

/// Errors related to series that cannot support a fit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsufficientDataError {
    TooFewRecords { required: usize, available: usize },
    /// Every step size is the same, so no slope can be estimated
    IdenticalStepSizes,
}

impl fmt::Display for InsufficientDataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InsufficientDataError::TooFewRecords { required, available } => {
                write!(f, "need at least {required} records, got {available}")
            }
            InsufficientDataError::IdenticalStepSizes => {
                write!(f, "all step sizes are identical, slope is undefined")
            }
        }
    }
}

impl std::error::Error for InsufficientDataError {}

/// Errors produced by the convergence analysis pipeline
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisError {
    InsufficientData(InsufficientDataError),
    Domain(DomainError),
    /// Configuration error
    Config(String),
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisError::InsufficientData(e) => write!(f, "{e}"),
            AnalysisError::Domain(e) => write!(f, "{e}"),
            AnalysisError::Config(msg) => write!(f, "configuration error: {msg}"),
        }
    }
}

impl std::error::Error for AnalysisError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AnalysisError::InsufficientData(e) => Some(e),
            AnalysisError::Domain(e) => Some(e),
            AnalysisError::Config(_) => None,
        }
    }
}

impl From<InsufficientDataError> for AnalysisError {
    fn from(err: InsufficientDataError) -> Self {
        AnalysisError::InsufficientData(err)
    }
}

impl From<DomainError> for AnalysisError {
    fn from(err: DomainError) -> Self {
        AnalysisError::Domain(err)
    }
}
