//! Convergence analysis for numerical integration kernels
//!
//! This crate loads per-kernel step-size sweeps, fits error-versus-step
//! power laws, and renders one comparative log-log chart. It supports:
//! - JSON result files with one record per step size
//! - Per-kernel step scaling for multi-stage integrators
//! - Kernel rosters from a YAML manifest, CLI arguments, or a built-in sweep
//! - PNG or SVG output with fitted, raw, and scatter traces per kernel

// ============================================================================
// Core modules
// ============================================================================

pub mod logging;
pub mod plot;
pub mod runner;

// ============================================================================
// Data modules
// ============================================================================

pub mod data;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use logging::init_logging;
pub use plot::{ChartOptions, PlotError, render};
pub use runner::{KernelReport, analyze_kernel, run};
