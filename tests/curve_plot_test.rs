// tests/curve_plot_test.rs

use std::fs;

use detection_utils::error::EvalError;
use detection_utils::plot_functions::plot_curve::plot_curve;

/// Canonical precision-recall fixture: header plus eleven rate pairs.
const PR_CSV: &str = "precision,recall\n\
0.013,0.951\n\
0.376,0.851\n\
0.441,0.839\n\
0.570,0.758\n\
0.635,0.674\n\
0.721,0.604\n\
0.837,0.531\n\
0.860,0.453\n\
0.962,0.348\n\
0.982,0.273\n\
1.0,0.0\n";

#[test]
fn renders_png_from_valid_csv() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let csv_path = dir.path().join("pr_data.csv");
    fs::write(&csv_path, PR_CSV).expect("write fixture csv");

    let output = dir.path().join("pr_data_curve.png");
    let output_str = output.to_string_lossy().to_string();
    plot_curve(&csv_path, &output_str).expect("plot should succeed");

    let metadata = fs::metadata(&output).expect("output png should exist");
    assert!(metadata.len() > 0, "output png should not be empty");
}

#[test]
fn malformed_row_produces_error_and_no_artifact() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let csv_path = dir.path().join("bad_data.csv");
    fs::write(&csv_path, "precision,recall\n0.5,oops\n").expect("write fixture csv");

    let output = dir.path().join("bad_data_curve.png");
    let output_str = output.to_string_lossy().to_string();
    match plot_curve(&csv_path, &output_str) {
        Err(EvalError::Parse { line: 2, value }) => assert_eq!(value, "oops"),
        other => panic!("expected parse error, got {:?}", other),
    }
    assert!(!output.exists(), "no artifact should be produced on failure");
}

#[test]
fn missing_input_file_is_reported() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let missing = dir.path().join("nope.csv");
    let output = dir.path().join("nope_curve.png");
    let output_str = output.to_string_lossy().to_string();
    match plot_curve(&missing, &output_str) {
        Err(EvalError::FileNotFound { .. }) => {}
        other => panic!("expected file-not-found error, got {:?}", other),
    }
}
