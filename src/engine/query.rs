//! Caller-owned view state
//!
//! Filter selections, free-text search, sort and page state belong to the
//! UI, not to the record set: a query value survives a record-set refresh
//! untouched. The engine only ever reads it.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::record::FieldPath;

use super::result::RecapRow;

/// Sort direction; toggling is a pure state flip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// Returns the opposite direction.
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// What a sort orders by.
#[derive(Clone)]
pub enum SortKey {
    /// Case-insensitive subject-name ordering
    Subject,
    /// JSON value ordering on a named field (null < bool < number < string)
    Field(FieldPath),
    /// Caller-supplied comparator. Panics inside it propagate unchanged.
    Custom(Arc<dyn Fn(&RecapRow, &RecapRow) -> Ordering + Send + Sync>),
}

impl SortKey {
    /// Compares two rows under this key, ignoring direction.
    pub fn compare(&self, a: &RecapRow, b: &RecapRow) -> Ordering {
        match self {
            SortKey::Subject => a
                .subject
                .to_lowercase()
                .cmp(&b.subject.to_lowercase()),
            SortKey::Field(path) => {
                super::sorter::compare_values(path.get(&a.body), path.get(&b.body))
            }
            SortKey::Custom(comparator) => comparator(a, b),
        }
    }
}

impl fmt::Debug for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortKey::Subject => f.write_str("Subject"),
            SortKey::Field(path) => write!(f, "Field({})", path),
            SortKey::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// A requested ordering of the filtered set.
#[derive(Debug, Clone)]
pub struct SortSpec {
    /// Sort key
    pub key: SortKey,
    /// Sort direction
    pub direction: SortDirection,
}

impl SortSpec {
    /// Ascending subject-name sort (the default column on every screen).
    pub fn subject() -> Self {
        Self {
            key: SortKey::Subject,
            direction: SortDirection::Asc,
        }
    }

    /// Ascending sort on a named field.
    pub fn field(path: impl Into<FieldPath>) -> Self {
        Self {
            key: SortKey::Field(path.into()),
            direction: SortDirection::Asc,
        }
    }

    /// Ascending sort with a caller-supplied comparator.
    pub fn custom<F>(comparator: F) -> Self
    where
        F: Fn(&RecapRow, &RecapRow) -> Ordering + Send + Sync + 'static,
    {
        Self {
            key: SortKey::Custom(Arc::new(comparator)),
            direction: SortDirection::Asc,
        }
    }

    /// Returns the same sort descending.
    pub fn descending(mut self) -> Self {
        self.direction = SortDirection::Desc;
        self
    }

    /// Returns the same sort with the direction flipped.
    pub fn toggled(&self) -> Self {
        Self {
            key: self.key.clone(),
            direction: self.direction.toggled(),
        }
    }
}

/// Caller-owned UI state for one recap screen.
#[derive(Debug, Clone)]
pub struct RecapQuery {
    selections: BTreeMap<String, String>,
    search: String,
    sort: Option<SortSpec>,
    page_number: usize,
    page_size: usize,
}

impl Default for RecapQuery {
    fn default() -> Self {
        Self {
            selections: BTreeMap::new(),
            search: String::new(),
            sort: None,
            // Every upstream screen renders ten rows per page
            page_number: 1,
            page_size: 10,
        }
    }
}

impl RecapQuery {
    /// Creates a query with no selections, page 1, page size 10.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a filter selection (builder form).
    pub fn with_selection(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.select(name, value);
        self
    }

    /// Sets the free-text subject query (builder form).
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Sets the sort (builder form).
    pub fn with_sort(mut self, sort: SortSpec) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Sets the page number (builder form).
    pub fn with_page_number(mut self, page_number: usize) -> Self {
        self.page_number = page_number;
        self
    }

    /// Sets the page size (builder form).
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Sets a filter selection; the empty string unsets it.
    pub fn select(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let value = value.into();
        if value.is_empty() {
            self.selections.remove(&name.into());
        } else {
            self.selections.insert(name.into(), value);
        }
    }

    /// Replaces the free-text subject query.
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
    }

    /// Replaces the sort.
    pub fn set_sort(&mut self, sort: Option<SortSpec>) {
        self.sort = sort;
    }

    /// Flips the current sort direction, if a sort is set.
    pub fn toggle_sort_direction(&mut self) {
        if let Some(sort) = &self.sort {
            self.sort = Some(sort.toggled());
        }
    }

    /// Moves to another page.
    pub fn set_page_number(&mut self, page_number: usize) {
        self.page_number = page_number;
    }

    /// Returns the selection for a filter; empty string means unset.
    pub fn selection(&self, name: &str) -> &str {
        self.selections.get(name).map(String::as_str).unwrap_or("")
    }

    /// Returns the free-text subject query.
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Returns the requested sort.
    pub fn sort(&self) -> Option<&SortSpec> {
        self.sort.as_ref()
    }

    /// Returns the 1-based page number.
    pub fn page_number(&self) -> usize {
        self.page_number
    }

    /// Returns the page size.
    pub fn page_size(&self) -> usize {
        self.page_size
    }
}
