// src/error.rs

use thiserror::Error;

/// The main error type for detection-utils operations.
#[derive(Debug, Error)]
pub enum EvalError {
    #[error("class id {id} is out of range for a set of {len} class name(s)")]
    ClassIdOutOfRange { id: usize, len: usize },

    #[error("expected a box table with {expected} columns, got {found}")]
    ShapeMismatch { expected: usize, found: usize },

    #[error("input file not found: {path}")]
    FileNotFound { path: String },

    #[error("header row must name at least two columns, got {found}")]
    MissingColumns { found: usize },

    #[error("line {line}: expected at least two fields, got {found}")]
    ShortRow { line: usize, found: usize },

    #[error("line {line}: cannot parse '{value}' as a number")]
    Parse { line: usize, value: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("plot rendering failed: {0}")]
    Render(String),
}
