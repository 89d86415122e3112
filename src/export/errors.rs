//! Export sink errors

use thiserror::Error;

/// Result type for sink operations
pub type SinkResult<T> = Result<T, SinkError>;

/// Failures while handing rows to an export sink.
#[derive(Debug, Error)]
pub enum SinkError {
    /// The sink could not be written
    #[error("export sink I/O failure: {0}")]
    Io(#[from] std::io::Error),

    /// The sink refused the row set
    #[error("export sink rejected rows: {0}")]
    Rejected(String),
}
