//! Kernel rosters: which result files to analyze and how to scale them
//!
//! The roster comes from one of three places, in order of precedence: a YAML
//! manifest file, repeated `--kernel name[:calc_cnt]` arguments, or the
//! built-in default sweep.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::loader::DataSourceError;

/// One kernel to analyze: its result-file stem and sub-step count
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KernelSpec {
    pub name: String,
    /// Sub-steps the integrator performs per recorded step
    #[serde(default = "default_calc_cnt")]
    pub calc_cnt: u32,
}

fn default_calc_cnt() -> u32 {
    1
}

impl KernelSpec {
    #[must_use]
    pub fn new(name: impl Into<String>, calc_cnt: u32) -> Self {
        Self {
            name: name.into(),
            calc_cnt,
        }
    }

    /// Parse a CLI kernel argument of the form `name` or `name:calc_cnt`.
    pub fn parse(spec: &str) -> Result<Self, String> {
        let (name, calc_cnt) = match spec.split_once(':') {
            None => (spec, 1),
            Some((name, count)) => {
                let calc_cnt = count
                    .parse::<u32>()
                    .map_err(|_| format!("invalid calc_cnt `{count}` in kernel spec `{spec}`"))?;
                (name, calc_cnt)
            }
        };
        if name.is_empty() {
            return Err(format!("empty kernel name in spec `{spec}`"));
        }
        Ok(Self::new(name, calc_cnt))
    }
}

/// The set of kernels one invocation analyzes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KernelManifest {
    pub kernels: Vec<KernelSpec>,
}

impl Default for KernelManifest {
    /// The standard sweep: every integrator the upstream simulator ships,
    /// with its force-evaluation count as the step multiplier.
    fn default() -> Self {
        Self {
            kernels: vec![
                KernelSpec::new("yoshida4_relative", 3),
                KernelSpec::new("yoshida4", 3),
                KernelSpec::new("vel_verlet_relative", 1),
                KernelSpec::new("vel_verlet", 1),
                KernelSpec::new("symplectic_euler_relative", 1),
                KernelSpec::new("symplectic_euler", 1),
                KernelSpec::new("rk4", 4),
            ],
        }
    }
}

/// Load a kernel manifest from a YAML file.
pub fn load_manifest(path: &Path) -> Result<KernelManifest, DataSourceError> {
    let content = fs::read_to_string(path).map_err(|e| DataSourceError::Io {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    serde_saphyr::from_str(&content).map_err(|e| DataSourceError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
