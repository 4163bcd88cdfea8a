mod fit;
mod record;

pub use fit::PowerLawFit;
pub use record::{ResultRecord, ResultSeries};
