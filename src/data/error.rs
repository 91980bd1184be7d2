//! Error types for data operations
//!
//! Provides unified error handling for CSV loading and parsing. Parse
//! problems are deliberately soft: the loader logs and skips rather than
//! failing a batch, so only a handful of variants exist.

use thiserror::Error;

/// Errors that can occur during data operations
#[derive(Error, Debug)]
pub enum DataError {
    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// File content produced no headers (empty or whitespace-only)
    #[error("no data in {name}")]
    EmptyData { name: String },
}

/// Result type alias for data operations
pub type DataResult<T> = Result<T, DataError>;
