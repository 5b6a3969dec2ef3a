//! Error types for the report pipeline.
//!
//! One enum per stage, with a top-level [`ReportError`] that wraps them:
//!
//! - [`LoadError`] - reading, decoding, and typing the input CSV
//! - [`ChartError`] - building chart figures
//! - [`ReportError`] - top-level orchestration errors
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across stage boundaries.

use std::path::PathBuf;
use thiserror::Error;

// =============================================================================
// Loading Errors
// =============================================================================

/// Errors while loading enrollment records.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Failed to read file.
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    /// Bytes could not be decoded with the requested encoding.
    #[error("Failed to decode input as {encoding}")]
    Encoding { encoding: String },

    /// Malformed CSV.
    #[error("Invalid CSV format: {0}")]
    Csv(#[from] csv::Error),

    /// No header line.
    #[error("CSV file is empty")]
    EmptyFile,

    /// A required column is absent from the header.
    #[error("Missing column: {0}")]
    MissingColumn(String),

    /// Region name has no token to derive a province from.
    #[error("Line {line}: region name is empty, cannot derive province")]
    EmptyRegionName { line: usize },

    /// A count cell is not an integer.
    #[error("Line {line}, column '{column}' (value '{value}'): not an integer count")]
    InvalidCount {
        line: usize,
        column: String,
        value: String,
    },
}

// =============================================================================
// Chart Errors
// =============================================================================

/// Errors while building chart figures.
#[derive(Debug, Error)]
pub enum ChartError {
    /// Builder received no rows.
    #[error("No data to plot for chart '{0}'")]
    Empty(&'static str),
}

// =============================================================================
// Report Errors (top-level)
// =============================================================================

/// Top-level pipeline errors.
///
/// This is the error type returned by [`crate::run`].
#[derive(Debug, Error)]
pub enum ReportError {
    /// Input file does not exist. Checked before any parse attempt.
    #[error("File not found at {}", .0.display())]
    InputNotFound(PathBuf),

    /// Loading error.
    #[error("Load error: {0}")]
    Load(#[from] LoadError),

    /// Chart building error.
    #[error("Chart error: {0}")]
    Chart(#[from] ChartError),

    /// Writing the output file failed.
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for loading operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Result type for chart building.
pub type ChartResult<T> = Result<T, ChartError>;

/// Result type for the whole pipeline.
pub type ReportResult<T> = Result<T, ReportError>;
