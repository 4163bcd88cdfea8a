//! Loading of per-kernel result files
//!
//! Each kernel's sweep lives in `{data_dir}/{kernel}.json`: a UTF-8 JSON
//! array of objects with numeric `dt`, `p_diff_max` and `v_diff_max` fields.
//! Records may carry extra bookkeeping fields (solver name, wall time, error
//! spreads); those are ignored.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use convfit_core::{ResultRecord, ResultSeries};

/// Error types for result-file access
#[derive(Debug)]
pub enum DataSourceError {
    Io { path: PathBuf, message: String },
    Parse { path: PathBuf, message: String },
}

impl fmt::Display for DataSourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSourceError::Io { path, message } => {
                write!(f, "IO error reading {}: {}", path.display(), message)
            }
            DataSourceError::Parse { path, message } => {
                write!(f, "Parse error in {}: {}", path.display(), message)
            }
        }
    }
}

impl std::error::Error for DataSourceError {}

/// A record that omits one of the required numeric fields
#[derive(Debug)]
pub struct SchemaError {
    pub path: PathBuf,
    /// Index of the offending record within the file's array
    pub index: usize,
    pub field: &'static str,
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "record {} in {} is missing required field `{}`",
            self.index,
            self.path.display(),
            self.field
        )
    }
}

impl std::error::Error for SchemaError {}

/// Error types for loading a kernel's series
#[derive(Debug)]
pub enum LoadError {
    DataSource(DataSourceError),
    Schema(SchemaError),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::DataSource(e) => write!(f, "{e}"),
            LoadError::Schema(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::DataSource(e) => Some(e),
            LoadError::Schema(e) => Some(e),
        }
    }
}

impl From<DataSourceError> for LoadError {
    fn from(err: DataSourceError) -> Self {
        LoadError::DataSource(err)
    }
}

impl From<SchemaError> for LoadError {
    fn from(err: SchemaError) -> Self {
        LoadError::Schema(err)
    }
}

/// One array element as it sits on disk. The analysis fields are optional
/// here so a missing one surfaces as a schema violation naming the record,
/// not as a parse failure for the whole file.
#[derive(Debug, Deserialize)]
struct RawRecord {
    dt: Option<f64>,
    p_diff_max: Option<f64>,
    v_diff_max: Option<f64>,
}

impl RawRecord {
    fn into_record(self, path: &Path, index: usize) -> Result<ResultRecord, SchemaError> {
        let missing = |field: &'static str| SchemaError {
            path: path.to_path_buf(),
            index,
            field,
        };
        Ok(ResultRecord {
            dt: self.dt.ok_or_else(|| missing("dt"))?,
            p_diff_max: self.p_diff_max.ok_or_else(|| missing("p_diff_max"))?,
            v_diff_max: self.v_diff_max.ok_or_else(|| missing("v_diff_max"))?,
        })
    }
}

/// Path of the result file for one kernel.
#[must_use]
pub fn kernel_data_path(data_dir: &Path, kernel: &str) -> PathBuf {
    data_dir.join(format!("{kernel}.json"))
}

/// Load a kernel's sweep from a JSON results file, preserving record order.
pub fn load_series(path: &Path) -> Result<ResultSeries, LoadError> {
    let content = fs::read_to_string(path).map_err(|e| DataSourceError::Io {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let raw: Vec<RawRecord> = serde_json::from_str(&content).map_err(|e| DataSourceError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut records = Vec::with_capacity(raw.len());
    for (index, record) in raw.into_iter().enumerate() {
        records.push(record.into_record(path, index)?);
    }

    Ok(ResultSeries::new(records))
}
