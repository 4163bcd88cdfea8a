//! Comparative convergence chart
//!
//! One log-log chart for the whole batch: per kernel a dashed fitted line,
//! a solid raw line and a scatter overlay, all sharing one palette color.
//! The legend sits in its own panel to the right of the plot area. Velocity
//! traces are computed upstream either way and drawn only on request.

use std::fmt;
use std::path::PathBuf;

use plotters::coord::Shift;
use plotters::prelude::*;

use crate::runner::KernelReport;

/// Error types for chart rendering
#[derive(Debug)]
pub enum PlotError {
    /// Nothing to draw
    NoData,
    /// The y-axis floor cannot anchor a log scale
    InvalidFloor(f64),
    /// Backend failure while drawing or writing the image
    Backend(String),
}

impl fmt::Display for PlotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlotError::NoData => write!(f, "no kernel traces to draw"),
            PlotError::InvalidFloor(v) => {
                write!(f, "y-axis floor must be a positive finite value, got {v}")
            }
            PlotError::Backend(msg) => write!(f, "chart backend error: {msg}"),
        }
    }
}

impl std::error::Error for PlotError {}

fn backend_error<E: fmt::Display>(e: E) -> PlotError {
    PlotError::Backend(e.to_string())
}

/// How the comparison chart is drawn
#[derive(Debug, Clone)]
pub struct ChartOptions {
    /// Where the rendered image lands; a `.svg` extension selects the
    /// vector backend, anything else gets a PNG
    pub output: PathBuf,
    /// Canvas size in pixels
    pub size: (u32, u32),
    /// Lower bound of the error axis, strictly positive since the axis is
    /// log scaled; smaller values are clamped up to it
    pub y_floor: f64,
    /// Also draw the velocity-error traces
    pub plot_velocity: bool,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            output: PathBuf::from("convergence.png"),
            size: (1400, 900),
            y_floor: 1e-10,
            plot_velocity: false,
        }
    }
}

/// Render the batch chart to the configured output file.
pub fn render(reports: &[KernelReport], options: &ChartOptions) -> Result<(), PlotError> {
    if !options.y_floor.is_finite() || options.y_floor <= 0.0 {
        return Err(PlotError::InvalidFloor(options.y_floor));
    }

    let is_svg = options
        .output
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"));

    if is_svg {
        let root = SVGBackend::new(&options.output, options.size).into_drawing_area();
        draw_chart(&root, reports, options)?;
        root.present().map_err(backend_error)
    } else {
        let root = BitMapBackend::new(&options.output, options.size).into_drawing_area();
        draw_chart(&root, reports, options)?;
        root.present().map_err(backend_error)
    }
}

fn draw_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    reports: &[KernelReport],
    options: &ChartOptions,
) -> Result<(), PlotError> {
    root.fill(&WHITE).map_err(backend_error)?;

    let (x_min, x_max) = x_bounds(reports).ok_or(PlotError::NoData)?;
    let y_top = y_ceiling(reports, options.plot_velocity, options.y_floor) * 2.0;

    let (plot_area, legend_area) = root.split_horizontally((72).percent_width());

    let mut chart = ChartBuilder::on(&plot_area)
        .margin(12)
        .x_label_area_size(44)
        .y_label_area_size(64)
        .build_cartesian_2d(
            (x_min..x_max).log_scale(),
            (options.y_floor..y_top).log_scale(),
        )
        .map_err(backend_error)?;

    chart
        .configure_mesh()
        .x_desc("dt")
        .x_label_formatter(&|v| format!("{v:.0e}"))
        .y_label_formatter(&|v| format!("{v:.0e}"))
        .draw()
        .map_err(backend_error)?;

    let mut legend: Vec<(String, RGBAColor, bool)> = Vec::new();

    for (idx, report) in reports.iter().enumerate() {
        let color = Palette99::pick(idx).to_rgba();
        let name = report.spec.name.as_str();
        let analysis = &report.analysis;

        let mut metrics = vec![(
            "p_diff",
            analysis.p_points(),
            analysis.p_fit_curve(),
            analysis.p_fit.exponent,
        )];
        if options.plot_velocity {
            metrics.push((
                "v_diff",
                analysis.v_points(),
                analysis.v_fit_curve(),
                analysis.v_fit.exponent,
            ));
        }

        for (metric, raw, fit, slope) in metrics {
            let raw = clamped_to_floor(&raw, options.y_floor);
            let fit = clamped_to_floor(&fit, options.y_floor);

            chart
                .draw_series(DashedLineSeries::new(fit, 6, 4, color.stroke_width(2)))
                .map_err(backend_error)?;
            legend.push((fit_label(name, metric, slope), color, true));

            chart
                .draw_series(LineSeries::new(raw.clone(), color.stroke_width(2)))
                .map_err(backend_error)?;
            legend.push((series_label(name, metric), color, false));

            chart
                .draw_series(
                    raw.iter()
                        .map(|&(x, y)| Circle::new((x, y), 3, color.filled())),
                )
                .map_err(backend_error)?;
        }
    }

    draw_legend(&legend_area, &legend)
}

/// Stack the legend entries in their own panel, vertically centered so the
/// column reads like a legend anchored at the plot's center right.
fn draw_legend<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    entries: &[(String, RGBAColor, bool)],
) -> Result<(), PlotError> {
    let (_, panel_height) = area.dim_in_pixel();
    let line_height: i32 = 22;
    let total = entries.len() as i32 * line_height;
    let mut y = ((panel_height as i32 - total) / 2).max(10);

    for (label, color, dashed) in entries {
        let style = color.stroke_width(2);
        if *dashed {
            area.draw(&PathElement::new(vec![(8, y), (18, y)], style))
                .map_err(backend_error)?;
            area.draw(&PathElement::new(vec![(24, y), (34, y)], style))
                .map_err(backend_error)?;
        } else {
            area.draw(&PathElement::new(vec![(8, y), (34, y)], style))
                .map_err(backend_error)?;
        }
        area.draw(&Text::new(
            label.clone(),
            (42, y - 7),
            ("sans-serif", 15).into_font(),
        ))
        .map_err(backend_error)?;
        y += line_height;
    }

    Ok(())
}

fn fit_label(kernel: &str, metric: &str, slope: f64) -> String {
    format!("{kernel} Fit: {metric} (slope={slope:.2})")
}

fn series_label(kernel: &str, metric: &str) -> String {
    format!("{kernel} {metric}")
}

/// Lift values below the axis floor onto it so every trace stays visible.
fn clamped_to_floor(points: &[(f64, f64)], floor: f64) -> Vec<(f64, f64)> {
    points.iter().map(|&(x, y)| (x, y.max(floor))).collect()
}

/// Extent of the step axis over every report, `None` when there is no spread.
fn x_bounds(reports: &[KernelReport]) -> Option<(f64, f64)> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for report in reports {
        for &x in &report.analysis.scaled_dt {
            min = min.min(x);
            max = max.max(x);
        }
    }
    (min < max).then_some((min, max))
}

/// Largest value any drawn trace reaches, fitted curves included.
fn y_ceiling(reports: &[KernelReport], plot_velocity: bool, floor: f64) -> f64 {
    let mut top = floor;
    for report in reports {
        let analysis = &report.analysis;
        let mut sweep = |points: Vec<(f64, f64)>| {
            for (_, y) in points {
                top = top.max(y);
            }
        };
        sweep(analysis.p_points());
        sweep(analysis.p_fit_curve());
        if plot_velocity {
            sweep(analysis.v_points());
            sweep(analysis.v_fit_curve());
        }
    }
    top
}
