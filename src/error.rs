//! Error types for generation, serialization, and timing reports.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the matrix generators and the coordinate-file writer/reader.
#[derive(Debug, Error)]
pub enum GenError {
    /// A matrix dimension was zero.
    #[error("invalid shape {rows}x{cols}: both dimensions must be at least 1")]
    InvalidShape { rows: usize, cols: usize },

    /// Requested density outside `[0, 1]`.
    #[error("invalid density {0}: must lie in [0, 1]")]
    InvalidDensity(f64),

    /// Diagonal value and offset arrays differ in length.
    #[error("diagonal arrays differ in length: {values} values vs {offsets} offsets")]
    ShapeMismatch { values: usize, offsets: usize },

    /// Filesystem failure, propagated untranslated.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A coordinate file could not be parsed back into a matrix.
    #[error("parse error in {} at line {line}: {reason}", .path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        reason: String,
    },
}

/// Errors raised by the timing-CSV aggregator and chart renderer.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("column {0:?} not found in timing CSV")]
    MissingColumn(String),

    #[error("no size token in matrix name {0:?}: expected <prefix>_<size>_...")]
    BadSizeToken(String),

    #[error("column {column:?} holds non-numeric value {value:?}")]
    BadValue { column: String, value: String },

    #[error("chart rendering failed: {0}")]
    Plot(String),
}
