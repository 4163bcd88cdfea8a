//! Batch orchestration: load and analyze every kernel in the roster.

use std::path::Path;

use color_eyre::eyre::{Result, WrapErr, bail};

use convfit_core::{AnalysisConfig, ConvergenceAnalysis, analyze_series};

use crate::data::{KernelSpec, kernel_data_path, load_series};

/// One kernel's spec together with its finished analysis
#[derive(Debug, Clone)]
pub struct KernelReport {
    pub spec: KernelSpec,
    pub analysis: ConvergenceAnalysis,
}

/// Load and analyze a single kernel's result file.
///
/// Any failure is wrapped with the kernel name and file path so a batch
/// abort identifies the offender.
pub fn analyze_kernel(
    data_dir: &Path,
    spec: &KernelSpec,
    transient_skip: usize,
) -> Result<KernelReport> {
    let path = kernel_data_path(data_dir, &spec.name);
    let config = AnalysisConfig::new()
        .with_calc_cnt(spec.calc_cnt)
        .with_transient_skip(transient_skip);

    let series = load_series(&path).wrap_err_with(|| {
        format!("failed to load kernel `{}` from {}", spec.name, path.display())
    })?;

    let analysis = analyze_series(&series, &config).wrap_err_with(|| {
        format!(
            "failed to analyze kernel `{}` from {}",
            spec.name,
            path.display()
        )
    })?;

    tracing::info!(
        kernel = spec.name.as_str(),
        records = series.len(),
        p_slope = analysis.p_fit.exponent,
        v_slope = analysis.v_fit.exponent,
        "Analyzed kernel"
    );

    Ok(KernelReport {
        spec: spec.clone(),
        analysis,
    })
}

/// Analyze every kernel in roster order.
///
/// The first failure aborts the whole batch; there is no per-kernel
/// recovery.
pub fn run(
    data_dir: &Path,
    kernels: &[KernelSpec],
    transient_skip: usize,
) -> Result<Vec<KernelReport>> {
    if kernels.is_empty() {
        bail!("no kernels to analyze");
    }

    let mut reports = Vec::with_capacity(kernels.len());
    for spec in kernels {
        reports.push(analyze_kernel(data_dir, spec, transient_skip)?);
    }
    Ok(reports)
}
