// src/constants.rs

// Import specific colors needed
use plotters::style::colors::full_palette::LIGHTBLUE;
use plotters::style::RGBColor;

// Plot dimensions.
pub const PLOT_WIDTH: u32 = 1280;
pub const PLOT_HEIGHT: u32 = 720;

// Fixed axis bounds for rate-valued curves. Precision and recall live in
// [0, 1]; the 0.05 overshoot keeps endpoint markers off the plot border.
pub const CURVE_AXIS_MIN: f64 = -0.05;
pub const CURVE_AXIS_MAX: f64 = 1.05;

// Box tables carry [x1, y1, x2, y2, class_id] per row.
pub const BOX_TABLE_COLUMNS: usize = 5;

// Font sizes.
pub const FONT_SIZE_CHART_TITLE: i32 = 30;
pub const FONT_SIZE_AXIS_LABEL: i32 = 16;

// --- Plot Color Assignments ---
pub const COLOR_CURVE_MAIN: &RGBColor = &LIGHTBLUE;

// Stroke widths for lines
pub const LINE_WIDTH_PLOT: u32 = 2;
