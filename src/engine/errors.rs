//! Recap engine error types
//!
//! Both errors are synchronous, local and recoverable: the caller fixes
//! its input and retries. Upstream fetch failures never reach the engine;
//! they surface as an empty batch (see the source seam).

use thiserror::Error;

/// Result type for engine operations
pub type RecapResult<T> = Result<T, RecapError>;

/// Recap engine errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecapError {
    /// A record in the raw batch has no resolvable subject name.
    #[error("record {index} has no resolvable subject name at '{path}': {reason}")]
    InvalidRecord {
        /// Position of the offending record in the raw batch
        index: usize,
        /// Declared subject path
        path: String,
        /// What failed to resolve
        reason: String,
    },

    /// A requested page lies outside the valid range.
    ///
    /// The engine never clamps; clamping is a visible UI-layer decision.
    /// A zero page size admits no valid page and is reported the same way.
    #[error("page {requested} out of range (valid pages: 1..={total_pages})")]
    PageOutOfRange {
        /// Requested page number
        requested: usize,
        /// Number of valid pages for the current filtered set
        total_pages: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_record_display() {
        let err = RecapError::InvalidRecord {
            index: 3,
            path: "user.name".into(),
            reason: "field missing".into(),
        };
        let display = format!("{}", err);
        assert!(display.contains("record 3"));
        assert!(display.contains("user.name"));
    }

    #[test]
    fn test_page_out_of_range_display() {
        let err = RecapError::PageOutOfRange {
            requested: 4,
            total_pages: 3,
        };
        assert_eq!(
            format!("{}", err),
            "page 4 out of range (valid pages: 1..=3)"
        );
    }
}
