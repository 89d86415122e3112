//! Sort projection for the recap pipeline
//!
//! Ordering is a projection over the filtered set, never a mutation of
//! the canonical grouped set: every projection starts from canonical
//! order, so toggling the direction is reversible and equal keys keep
//! their canonical relative order. The sort must be stable; an unstable
//! sort is a correctness bug here, not an optimization choice.

use std::cmp::Ordering;

use serde_json::Value;

use super::query::{SortDirection, SortSpec};
use super::result::RecapRow;

/// Orders a filtered projection in place according to the sort spec.
pub(crate) fn apply(rows: &mut [&RecapRow], spec: &SortSpec) {
    // slice::sort_by is stable; ties keep canonical order
    rows.sort_by(|a, b| {
        let ordering = spec.key.compare(a, b);
        match spec.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
}

/// Compares two optional JSON values for sorting.
///
/// Missing fields order first; present values order by type
/// (null < bool < number < string < array < object), then naturally
/// within the type. Arrays and objects compare equal among themselves.
pub(crate) fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a_val), Some(b_val)) => {
            let rank = |v: &Value| -> u8 {
                match v {
                    Value::Null => 0,
                    Value::Bool(_) => 1,
                    Value::Number(_) => 2,
                    Value::String(_) => 3,
                    Value::Array(_) => 4,
                    Value::Object(_) => 5,
                }
            };

            let a_rank = rank(a_val);
            let b_rank = rank(b_val);
            if a_rank != b_rank {
                return a_rank.cmp(&b_rank);
            }

            match (a_val, b_val) {
                (Value::Bool(a_b), Value::Bool(b_b)) => a_b.cmp(b_b),
                (Value::Number(a_n), Value::Number(b_n)) => {
                    let a_f = a_n.as_f64().unwrap_or(0.0);
                    let b_f = b_n.as_f64().unwrap_or(0.0);
                    a_f.partial_cmp(&b_f).unwrap_or(Ordering::Equal)
                }
                (Value::String(a_s), Value::String(b_s)) => a_s.cmp(b_s),
                _ => Ordering::Equal,
            }
        }
    }
}
