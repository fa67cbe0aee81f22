//! Error types for the csv-mt940 library.

use std::io;
use thiserror::Error;

/// Result type alias for library operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while converting a ledger to MT940.
///
/// Every variant is fatal: a conversion either yields a complete statement
/// or one of these, never a partial statement.
#[derive(Debug, Error)]
pub enum Error {
    /// The ledger has no transaction rows after the header.
    #[error("CSV is empty or has no transaction rows")]
    EmptyInput,

    /// A row cannot be mapped unambiguously onto the header fields.
    #[error("Malformed row at line {line}: {message}")]
    MalformedRow { line: u64, message: String },

    /// A required date is not a valid `YYYY-MM-DD` calendar date.
    #[error("Invalid date: {0}")]
    DateParse(String),

    /// I/O error occurred during read or write operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Low-level CSV reader failure (e.g. invalid UTF-8).
    #[error("CSV parsing error: {0}")]
    CsvError(#[from] csv::Error),

    /// Invalid configuration or command-line value.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
