//! Error types for the data-loader crate.
//!
//! Every failure aborts the whole load: callers never see a partially
//! parsed dataset.

use thiserror::Error;

/// Errors that can occur while loading the food dataset
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// Dataset file could not be opened
    #[error("Failed to open file {path}: {source}")]
    FileOpen {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The CSV reader itself failed (I/O while reading, invalid UTF-8, ...)
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A field in a data row couldn't be converted to its expected type
    ///
    /// `line` is the 1-based line in the source, header included.
    #[error("Parse error at line {line} in {file}: {reason}")]
    ParseError {
        file: String,
        line: usize,
        reason: String,
    },

    /// Row carries fewer fields than a food record needs
    #[error("Expected {expected} fields but found {found} in line {line}")]
    FieldCountMismatch {
        expected: usize,
        found: usize,
        line: usize,
    },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;
