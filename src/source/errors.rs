//! Record source errors

use thiserror::Error;

/// Result type for source operations
pub type SourceResult<T> = Result<T, SourceError>;

/// Failures while fetching or decoding the upstream batch.
///
/// These never cross into the engine; `load_or_empty` degrades them to
/// an empty batch at the seam.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The upstream request failed
    #[error("upstream fetch failed: {0}")]
    Fetch(String),

    /// The upstream response was not a JSON array of records
    #[error("undecodable record batch: {0}")]
    Decode(#[from] serde_json::Error),
}
