//! Result-file loading and kernel rosters.

mod loader;
mod manifest;

pub use loader::{DataSourceError, LoadError, SchemaError, kernel_data_path, load_series};
pub use manifest::{KernelManifest, KernelSpec, load_manifest};
