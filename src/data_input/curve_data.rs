// src/data_input/curve_data.rs

/// Structure to hold a two-column metric series parsed from a CSV file.
/// The header row supplies the axis names; data rows supply the points.
#[derive(Debug, Default, Clone)]
pub struct CurveData {
    pub x_name: String,        // Header name of column 0 (horizontal axis).
    pub y_name: String,        // Header name of column 1 (vertical axis).
    pub points: Vec<(f64, f64)>, // (column 0, column 1) per data row.
}

impl CurveData {
    /// Axis label for column 0, capitalized for display.
    pub fn x_axis_label(&self) -> String {
        capitalize(&self.x_name)
    }

    /// Axis label for column 1, capitalized for display.
    pub fn y_axis_label(&self) -> String {
        capitalize(&self.y_name)
    }
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
