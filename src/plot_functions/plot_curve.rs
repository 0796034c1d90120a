// src/plot_functions/plot_curve.rs

use log::info;
use std::path::Path;

use crate::constants::{
    COLOR_CURVE_MAIN, CURVE_AXIS_MAX, CURVE_AXIS_MIN, LINE_WIDTH_PLOT,
};
use crate::data_input::curve_parser::parse_curve_file;
use crate::error::EvalError;
use crate::plot_framework::{draw_curve_plot, CurvePlotConfig, PlotSeries};

/// Generates a line plot of a two-column curve CSV (e.g. precision-recall).
///
/// Column 0 drives the horizontal axis, column 1 the vertical axis, with
/// axis labels taken from the header row. Parsing happens before any
/// drawing, so a malformed row produces no output file.
pub fn plot_curve(input_file_path: &Path, output_filename: &str) -> Result<(), EvalError> {
    let curve = parse_curve_file(input_file_path)?;

    let series = PlotSeries {
        data: curve.points.clone(),
        color: *COLOR_CURVE_MAIN,
        stroke_width: LINE_WIDTH_PLOT,
    };

    let config = CurvePlotConfig {
        title: format!("{} vs {}", curve.x_axis_label(), curve.y_axis_label()),
        x_range: CURVE_AXIS_MIN..CURVE_AXIS_MAX,
        y_range: CURVE_AXIS_MIN..CURVE_AXIS_MAX,
        series: vec![series],
        x_label: curve.x_axis_label(),
        y_label: curve.y_axis_label(),
    };

    draw_curve_plot(output_filename, &config)?;
    info!("saved plot to {}", output_filename);
    Ok(())
}
