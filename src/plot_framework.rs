// src/plot_framework.rs

use plotters::backend::BitMapBackend;
use plotters::chart::ChartBuilder;
use plotters::drawing::IntoDrawingArea;
use plotters::series::LineSeries;
use plotters::style::colors::WHITE;
use plotters::style::{Color, IntoFont, RGBColor};

use std::fmt::Display;
use std::ops::Range;

use crate::constants::{FONT_SIZE_AXIS_LABEL, FONT_SIZE_CHART_TITLE, PLOT_HEIGHT, PLOT_WIDTH};
use crate::error::EvalError;

#[derive(Clone)]
pub struct PlotSeries {
    pub data: Vec<(f64, f64)>,
    pub color: RGBColor,
    pub stroke_width: u32,
}

#[derive(Clone)]
pub struct CurvePlotConfig {
    pub title: String,
    pub x_range: Range<f64>,
    pub y_range: Range<f64>,
    pub series: Vec<PlotSeries>,
    pub x_label: String,
    pub y_label: String,
}

// Plotters backend errors are generic over the backend type, so they are
// flattened to a message here instead of carried as a source.
fn render_err<E: Display>(err: E) -> EvalError {
    EvalError::Render(err.to_string())
}

/// Draws a single chart to a PNG file using a CurvePlotConfig struct.
/// Axis ranges and labels come from the config.
pub fn draw_curve_plot(output_filename: &str, config: &CurvePlotConfig) -> Result<(), EvalError> {
    let root_area =
        BitMapBackend::new(output_filename, (PLOT_WIDTH, PLOT_HEIGHT)).into_drawing_area();
    root_area.fill(&WHITE).map_err(render_err)?;

    let mut chart = ChartBuilder::on(&root_area)
        .caption(&config.title, ("sans-serif", FONT_SIZE_CHART_TITLE))
        .margin(5)
        .x_label_area_size(50)
        .y_label_area_size(50)
        .build_cartesian_2d(config.x_range.clone(), config.y_range.clone())
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .x_desc(&config.x_label)
        .y_desc(&config.y_label)
        .x_labels(12)
        .y_labels(12)
        .x_label_formatter(&|v| format!("{:.2}", v))
        .y_label_formatter(&|v| format!("{:.2}", v))
        .light_line_style(WHITE.mix(0.7))
        .label_style(("sans-serif", FONT_SIZE_AXIS_LABEL).into_font())
        .draw()
        .map_err(render_err)?;

    for s in &config.series {
        if s.data.is_empty() {
            continue;
        }
        chart
            .draw_series(LineSeries::new(
                s.data.iter().cloned(),
                s.color.stroke_width(s.stroke_width),
            ))
            .map_err(render_err)?;
    }

    root_area.present().map_err(render_err)?;
    Ok(())
}
