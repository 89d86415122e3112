//! Recap table profiles
//!
//! A profile declares, for one recap table, where to read the subject
//! name, which field identifies a subject for grouping, which numeric
//! fields accumulate across merged records, and which named filters the
//! screen exposes.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use serde_json::Value;

use super::path::FieldPath;

/// Decides whether a record's field value matches a selected filter value.
///
/// Selections come from UI controls and are always strings; the unset
/// sentinel (empty string) is handled before the matcher runs.
#[derive(Clone)]
pub enum Matcher {
    /// Scalar rendering of the field must equal the selection exactly.
    /// No coercion beyond rendering numbers and booleans as strings.
    Equals,
    /// Case-insensitive substring containment of the selection.
    Contains,
    /// Field holds a date; the selection is a `YYYY-MM` calendar month.
    Month,
    /// Caller-supplied predicate. Panics inside it propagate unchanged.
    Custom(Arc<dyn Fn(&Value, &str) -> bool + Send + Sync>),
}

impl Matcher {
    /// Applies the matcher to a resolved field value.
    pub fn matches(&self, field: &Value, selected: &str) -> bool {
        match self {
            Matcher::Equals => scalar_rendering(field)
                .map(|rendered| rendered == selected)
                .unwrap_or(false),
            Matcher::Contains => field
                .as_str()
                .map(|s| crate::engine::contains_ci(s, selected))
                .unwrap_or(false),
            Matcher::Month => match (field_month(field), selected_month(selected)) {
                (Some(a), Some(b)) => a == b,
                _ => false,
            },
            Matcher::Custom(predicate) => predicate(field, selected),
        }
    }
}

impl fmt::Debug for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Matcher::Equals => f.write_str("Equals"),
            Matcher::Contains => f.write_str("Contains"),
            Matcher::Month => f.write_str("Month"),
            Matcher::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Renders a scalar field for exact comparison against a UI selection.
fn scalar_rendering(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Extracts (year, month) from a date-bearing field value.
///
/// Accepts RFC 3339 timestamps and the two plain formats the upstream API
/// emits (`YYYY-MM-DD` and `YYYY-MM-DD HH:MM:SS`).
fn field_month(value: &Value) -> Option<(i32, u32)> {
    let s = value.as_str()?;
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some((dt.year(), dt.month()));
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
        return Some((dt.year(), dt.month()));
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some((d.year(), d.month()));
    }
    None
}

/// Parses a `YYYY-MM` selection into (year, month).
fn selected_month(selected: &str) -> Option<(i32, u32)> {
    let first_of_month = format!("{}-01", selected);
    let d = NaiveDate::parse_from_str(&first_of_month, "%Y-%m-%d").ok()?;
    Some((d.year(), d.month()))
}

/// A named filter over one record field.
#[derive(Debug, Clone)]
pub struct FilterSpec {
    name: String,
    field: FieldPath,
    matcher: Matcher,
}

impl FilterSpec {
    /// Exact-equality filter (dropdown selections).
    pub fn equals(name: impl Into<String>, field: impl Into<FieldPath>) -> Self {
        Self {
            name: name.into(),
            field: field.into(),
            matcher: Matcher::Equals,
        }
    }

    /// Case-insensitive substring filter.
    pub fn contains(name: impl Into<String>, field: impl Into<FieldPath>) -> Self {
        Self {
            name: name.into(),
            field: field.into(),
            matcher: Matcher::Contains,
        }
    }

    /// Calendar-month filter over a date field.
    pub fn month(name: impl Into<String>, field: impl Into<FieldPath>) -> Self {
        Self {
            name: name.into(),
            field: field.into(),
            matcher: Matcher::Month,
        }
    }

    /// Filter with a caller-supplied predicate.
    pub fn custom<F>(name: impl Into<String>, field: impl Into<FieldPath>, predicate: F) -> Self
    where
        F: Fn(&Value, &str) -> bool + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            field: field.into(),
            matcher: Matcher::Custom(Arc::new(predicate)),
        }
    }

    /// Returns the filter name used to address selections.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the extractor path.
    pub fn field(&self) -> &FieldPath {
        &self.field
    }

    /// Returns the matcher.
    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }
}

/// Declared facets for one recap table.
#[derive(Debug, Clone)]
pub struct RecapProfile {
    subject: FieldPath,
    group_key: Option<FieldPath>,
    additive: Vec<FieldPath>,
    filters: Vec<FilterSpec>,
}

impl RecapProfile {
    /// Creates a profile with the given subject-name path.
    pub fn new(subject: impl Into<FieldPath>) -> Self {
        Self {
            subject: subject.into(),
            group_key: None,
            additive: Vec::new(),
            filters: Vec::new(),
        }
    }

    /// Enables grouping by the field at `path`.
    pub fn with_group_key(mut self, path: impl Into<FieldPath>) -> Self {
        self.group_key = Some(path.into());
        self
    }

    /// Declares a numeric field summed across merged records.
    pub fn with_additive_field(mut self, path: impl Into<FieldPath>) -> Self {
        self.additive.push(path.into());
        self
    }

    /// Declares a named filter.
    pub fn with_filter(mut self, filter: FilterSpec) -> Self {
        self.filters.push(filter);
        self
    }

    /// Returns the subject-name path.
    pub fn subject(&self) -> &FieldPath {
        &self.subject
    }

    /// Returns the grouping key path, if grouping is enabled.
    pub fn group_key(&self) -> Option<&FieldPath> {
        self.group_key.as_ref()
    }

    /// Returns the additive field paths.
    pub fn additive(&self) -> &[FieldPath] {
        &self.additive
    }

    /// Returns the declared filters.
    pub fn filters(&self) -> &[FilterSpec] {
        &self.filters
    }
}
