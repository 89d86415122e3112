//! Grouping and accumulation
//!
//! Partitions raw records by their resolved grouping key. The first
//! record seen for a key seeds the group's representative (a full copy of
//! the record); each later record in the group has the declared additive
//! fields summed into that copy while every other field keeps its
//! first-seen value. Records whose key does not resolve pass through as
//! singletons, never merged, never dropped.
//!
//! Grouping is idempotent: every key occurs once in the output, so
//! regrouping the output reproduces it.

use std::collections::HashMap;

use serde_json::{Number, Value};
use tracing::debug;

use crate::record::{FieldPath, GroupKey, RecapProfile};

use super::errors::{RecapError, RecapResult};
use super::result::RecapRow;

/// Builds the canonical grouped row set from a raw batch.
///
/// Fails with [`RecapError::InvalidRecord`] if any record lacks a
/// resolvable subject name. Output order is canonical: ascending
/// case-insensitive subject name, ties in first-seen input order.
pub(crate) fn build_rows(records: &[Value], profile: &RecapProfile) -> RecapResult<Vec<RecapRow>> {
    let mut rows: Vec<RecapRow> = Vec::new();
    let mut by_key: HashMap<GroupKey, usize> = HashMap::new();
    let mut singletons = 0usize;

    for (index, record) in records.iter().enumerate() {
        let subject = resolve_subject(record, profile, index)?;
        let key = profile
            .group_key()
            .and_then(|path| path.get(record))
            .and_then(GroupKey::from_value);

        match key {
            Some(key) => {
                if let Some(&at) = by_key.get(&key) {
                    accumulate(&mut rows[at].body, record, profile.additive());
                } else {
                    by_key.insert(key.clone(), rows.len());
                    rows.push(RecapRow {
                        key: Some(key),
                        subject,
                        body: record.clone(),
                    });
                }
            }
            None => {
                singletons += 1;
                rows.push(RecapRow {
                    key: None,
                    subject,
                    body: record.clone(),
                });
            }
        }
    }

    // Canonical order before any caller-requested sort; stable, so equal
    // names keep first-seen order
    rows.sort_by(|a, b| a.subject.to_lowercase().cmp(&b.subject.to_lowercase()));

    debug!(
        raw = records.len(),
        rows = rows.len(),
        singletons,
        "canonical recap rows rebuilt"
    );
    Ok(rows)
}

/// Resolves the subject name or reports the record as invalid.
fn resolve_subject(record: &Value, profile: &RecapProfile, index: usize) -> RecapResult<String> {
    let path = profile.subject();
    match path.get(record) {
        Some(Value::String(name)) => Ok(name.clone()),
        Some(other) => Err(RecapError::InvalidRecord {
            index,
            path: path.as_str().to_string(),
            reason: format!("expected a string, found {}", type_name(other)),
        }),
        None => Err(RecapError::InvalidRecord {
            index,
            path: path.as_str().to_string(),
            reason: "field missing".to_string(),
        }),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// A numeric operand read out of a record.
#[derive(Clone, Copy)]
enum Num {
    Int(i64),
    Float(f64),
}

fn number_at(path: &FieldPath, record: &Value) -> Option<Num> {
    let value = path.get(record)?;
    match value.as_i64() {
        Some(i) => Some(Num::Int(i)),
        None => value.as_f64().map(Num::Float),
    }
}

/// Sums the declared additive fields of `incoming` into the group
/// representative. Integer sums stay integers; any float operand promotes
/// the sum to float. Fields missing on either side count as zero.
fn accumulate(representative: &mut Value, incoming: &Value, additive: &[FieldPath]) {
    for path in additive {
        let Some(addend) = number_at(path, incoming) else {
            continue;
        };
        let sum = match (number_at(path, representative), addend) {
            (None, operand) => operand,
            (Some(Num::Int(a)), Num::Int(b)) => Num::Int(a + b),
            (Some(a), b) => Num::Float(as_f64(a) + as_f64(b)),
        };
        let value = match sum {
            Num::Int(i) => Value::Number(Number::from(i)),
            Num::Float(f) => match Number::from_f64(f) {
                Some(n) => Value::Number(n),
                // Non-finite sum; leave the representative untouched
                None => continue,
            },
        };
        path.set(representative, value);
    }
}

fn as_f64(num: Num) -> f64 {
    match num {
        Num::Int(i) => i as f64,
        Num::Float(f) => f,
    }
}
