use std::path::PathBuf;

use clap::Parser;

use convfit::data::{KernelManifest, KernelSpec, load_manifest};
use convfit::{ChartOptions, init_logging, render, run};

#[derive(Parser, Debug)]
#[command(name = "convfit")]
#[command(about = "Fits convergence orders of integration kernels from step-size sweeps")]
struct Args {
    /// Directory holding the per-kernel result files
    #[arg(short, long, default_value = ".")]
    data_dir: PathBuf,

    /// Output image path; a .svg extension selects the vector backend
    #[arg(short, long, default_value = "convergence.png")]
    out: PathBuf,

    /// Kernel to analyze, as `name` or `name:calc_cnt` (repeatable; default: the built-in sweep)
    #[arg(short, long = "kernel", value_parser = KernelSpec::parse)]
    kernels: Vec<KernelSpec>,

    /// YAML manifest listing kernels; takes precedence over --kernel
    #[arg(short, long)]
    manifest: Option<PathBuf>,

    /// Records dropped from the head of every series before fitting
    #[arg(long, default_value_t = convfit_core::DEFAULT_TRANSIENT_SKIP)]
    transient_skip: usize,

    /// Also draw the velocity-error traces
    #[arg(long)]
    plot_velocity: bool,

    /// Lower bound of the error axis
    #[arg(long, default_value_t = 1e-10)]
    y_floor: f64,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    init_logging(&args.log_level)?;

    let kernels = if let Some(path) = &args.manifest {
        load_manifest(path)?.kernels
    } else if !args.kernels.is_empty() {
        args.kernels.clone()
    } else {
        KernelManifest::default().kernels
    };

    let reports = run(&args.data_dir, &kernels, args.transient_skip)?;

    println!(
        "{:<28} {:>8} {:>9} {:>9}",
        "kernel", "calc_cnt", "p slope", "v slope"
    );
    for report in &reports {
        println!(
            "{:<28} {:>8} {:>9.2} {:>9.2}",
            report.spec.name,
            report.spec.calc_cnt,
            report.analysis.p_fit.exponent,
            report.analysis.v_fit.exponent
        );
    }

    let options = ChartOptions {
        output: args.out.clone(),
        y_floor: args.y_floor,
        plot_velocity: args.plot_velocity,
        ..ChartOptions::default()
    };
    render(&reports, &options)?;

    tracing::info!(
        chart = %args.out.display(),
        kernels = reports.len(),
        "Convergence analysis finished"
    );

    Ok(())
}
