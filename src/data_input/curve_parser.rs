// src/data_input/curve_parser.rs

use csv::ReaderBuilder;
use log::info;
use std::fs::File;
use std::io::{BufReader, ErrorKind};
use std::path::Path;

use crate::data_input::curve_data::CurveData;
use crate::error::EvalError;

/// Parses a two-column curve CSV file.
///
/// The first row is the header and names the two axes; every following row
/// must carry at least two numeric fields (extra fields are ignored).
///
/// # Errors
/// * `EvalError::FileNotFound` when the path does not exist.
/// * `EvalError::MissingColumns` when the header names fewer than two columns.
/// * `EvalError::ShortRow` / `EvalError::Parse` when a data row cannot be
///   converted to two numeric fields; the error names the 1-based file line.
pub fn parse_curve_file(input_file_path: &Path) -> Result<CurveData, EvalError> {
    let file = File::open(input_file_path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => EvalError::FileNotFound {
            path: input_file_path.display().to_string(),
        },
        _ => EvalError::Io(e),
    })?;

    // flexible: rows narrower or wider than the header are handled here,
    // not rejected by the reader ("at least two numeric fields" contract).
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(BufReader::new(file));

    let headers = reader.headers()?.clone();
    if headers.len() < 2 {
        return Err(EvalError::MissingColumns {
            found: headers.len(),
        });
    }
    let x_name = headers.get(0).unwrap_or_default().to_string();
    let y_name = headers.get(1).unwrap_or_default().to_string();

    let mut points: Vec<(f64, f64)> = Vec::new();
    for (row_index, record) in reader.records().enumerate() {
        let record = record?;
        let line = row_index + 2; // 1-based file line; the header occupies line 1
        if record.len() < 2 {
            return Err(EvalError::ShortRow {
                line,
                found: record.len(),
            });
        }
        let x = parse_field(record.get(0).unwrap_or_default(), line)?;
        let y = parse_field(record.get(1).unwrap_or_default(), line)?;
        points.push((x, y));
    }

    info!(
        "parsed {} data point(s) from {}",
        points.len(),
        input_file_path.display()
    );

    Ok(CurveData {
        x_name,
        y_name,
        points,
    })
}

fn parse_field(raw: &str, line: usize) -> Result<f64, EvalError> {
    raw.parse::<f64>().map_err(|_| EvalError::Parse {
        line,
        value: raw.to_string(),
    })
}
