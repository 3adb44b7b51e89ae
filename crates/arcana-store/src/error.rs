//! Error types for the record store.

use thiserror::Error;

/// Alias for `Result<T, StoreError>`.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur while reading or writing the record log.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The log file could not be read or written.
    #[error("record log I/O failure: {0}")]
    Io(#[from] std::io::Error),

    /// The log file contents could not be (de)serialized.
    #[error("record log is not valid JSON: {0}")]
    Serde(#[from] serde_json::Error),
}
