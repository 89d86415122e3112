//! The recap engine
//!
//! Owns the canonical grouped record set for one screen and answers
//! queries over it. Pipeline, in strict order:
//!
//! 1. Group/accumulate the raw batch (at construction or refresh)
//! 2. Filter the grouped set (declared filters AND free-text search)
//! 3. Sort the filtered set (stable projection)
//! 4. Cut the requested page window
//!
//! Same batch + same query = same page. Filtering, sorting and paging
//! are pure projections; the canonical set is never reordered in place.

use serde_json::Value;
use tracing::debug;

use crate::record::RecapProfile;
use crate::source::RecordSource;

use super::errors::RecapResult;
use super::query::RecapQuery;
use super::result::{Page, RecapRow};
use super::{filters, grouping, pager, sorter};

/// Grouped, filterable, sortable, pageable view over one screen's records.
#[derive(Debug)]
pub struct RecapEngine {
    profile: RecapProfile,
    rows: Vec<RecapRow>,
}

impl RecapEngine {
    /// Builds the engine from a raw batch.
    ///
    /// Fails with [`RecapError::InvalidRecord`](super::RecapError) if any
    /// record lacks a resolvable subject name.
    pub fn new(records: Vec<Value>, profile: RecapProfile) -> RecapResult<Self> {
        let rows = grouping::build_rows(&records, &profile)?;
        Ok(Self { profile, rows })
    }

    /// Builds the engine from a record source.
    ///
    /// A failed fetch becomes an empty batch; see
    /// [`load_or_empty`](crate::source::load_or_empty).
    pub fn from_source<S: RecordSource>(source: &mut S, profile: RecapProfile) -> RecapResult<Self> {
        Self::new(crate::source::load_or_empty(source), profile)
    }

    /// Replaces the canonical set with a fresh raw batch.
    ///
    /// Caller query state is unaffected; it lives outside the engine.
    pub fn replace_records(&mut self, records: Vec<Value>) -> RecapResult<()> {
        self.rows = grouping::build_rows(&records, &self.profile)?;
        Ok(())
    }

    /// Refetches from a source and replaces the canonical set.
    pub fn refresh_from_source<S: RecordSource>(&mut self, source: &mut S) -> RecapResult<()> {
        self.replace_records(crate::source::load_or_empty(source))
    }

    /// Returns the declared profile.
    pub fn profile(&self) -> &RecapProfile {
        &self.profile
    }

    /// Returns the canonical grouped rows in canonical order.
    pub fn rows(&self) -> &[RecapRow] {
        &self.rows
    }

    /// Returns the length of the filtered (post-group, pre-page) set.
    pub fn total_matches(&self, query: &RecapQuery) -> usize {
        self.filtered(query).len()
    }

    /// Returns the number of valid pages under the query's page size.
    pub fn total_pages(&self, query: &RecapQuery) -> RecapResult<usize> {
        let (_, total_pages) = pager::window(1, query.page_size(), self.total_matches(query))?;
        Ok(total_pages)
    }

    /// Runs the filter -> sort -> page pipeline and returns one page.
    ///
    /// Rejects with [`RecapError::PageOutOfRange`](super::RecapError) if
    /// the query's page number lies outside the valid range for the
    /// current filtered set.
    pub fn page(&self, query: &RecapQuery) -> RecapResult<Page> {
        let projection = self.filtered_sorted(query);
        let total_matches = projection.len();
        let (range, total_pages) =
            pager::window(query.page_number(), query.page_size(), total_matches)?;

        Ok(Page {
            records: projection[range].iter().map(|row| (*row).clone()).collect(),
            page_number: query.page_number(),
            page_size: query.page_size(),
            total_matches,
            total_pages,
        })
    }

    /// Returns the full filtered+sorted set as plain records, ignoring
    /// the query's page state.
    ///
    /// Export always reflects current filters and sort, never just the
    /// visible page.
    pub fn materialize_for_export(&self, query: &RecapQuery) -> Vec<Value> {
        let rows: Vec<Value> = self
            .filtered_sorted(query)
            .into_iter()
            .map(|row| row.body.clone())
            .collect();
        debug!(rows = rows.len(), "materialized rows for export");
        rows
    }

    fn filtered(&self, query: &RecapQuery) -> Vec<&RecapRow> {
        self.rows
            .iter()
            .filter(|row| filters::row_matches(row, &self.profile, query))
            .collect()
    }

    fn filtered_sorted(&self, query: &RecapQuery) -> Vec<&RecapRow> {
        let mut projection = self.filtered(query);
        if let Some(sort) = query.sort() {
            sorter::apply(&mut projection, sort);
        }
        projection
    }
}
