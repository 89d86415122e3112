//! Result types for the recap pipeline

use serde::Serialize;
use serde_json::Value;

use crate::record::GroupKey;

/// One row of the canonical grouped set.
///
/// Represents either a merged group of raw records or a singleton
/// pass-through record whose grouping key did not resolve.
#[derive(Debug, Clone, Serialize)]
pub struct RecapRow {
    /// Normalized grouping key; `None` for singleton pass-through rows
    pub key: Option<GroupKey>,
    /// Resolved subject display name
    pub subject: String,
    /// Merged record body (a full copy, never a reference into the input)
    pub body: Value,
}

impl RecapRow {
    /// Returns the subject name.
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Returns the record body.
    pub fn body(&self) -> &Value {
        &self.body
    }
}

/// One page of the filtered, sorted recap.
#[derive(Debug, Clone, Serialize)]
pub struct Page {
    /// Rows in display order
    pub records: Vec<RecapRow>,
    /// 1-based page number
    pub page_number: usize,
    /// Window size the page was cut with
    pub page_size: usize,
    /// Length of the filtered (post-group, pre-page) set
    pub total_matches: usize,
    /// Number of valid pages; 1 even when the filtered set is empty
    pub total_pages: usize,
}

impl Page {
    /// Returns true if the page holds no rows.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the number of rows on this page.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns an iterator over the rows.
    pub fn iter(&self) -> impl Iterator<Item = &RecapRow> {
        self.records.iter()
    }

    /// Returns the pager window centered on this page (see
    /// [`visible_page_numbers`](crate::engine::visible_page_numbers)).
    pub fn visible_page_numbers(&self, window: usize) -> Vec<usize> {
        super::pager::visible_page_numbers(self.page_number, self.total_pages, window)
    }
}
