//! Normalized grouping keys

use serde::Serialize;
use serde_json::Value;

/// A normalized scalar grouping key.
///
/// Records sharing a key describe the same logical subject and are merged.
/// Only scalars make usable keys; `null`, missing fields, arrays and
/// objects normalize to "no key", and such records pass through the
/// grouping stage as singletons instead of being dropped.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum GroupKey {
    Str(String),
    Int(i64),
    Bool(bool),
}

impl GroupKey {
    /// Normalizes a resolved field value into a key, if it can be one.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(GroupKey::Str(s.clone())),
            Value::Number(n) => match n.as_i64() {
                Some(i) => Some(GroupKey::Int(i)),
                // Non-integer numeric ids are keyed by their rendering
                None => Some(GroupKey::Str(n.to_string())),
            },
            Value::Bool(b) => Some(GroupKey::Bool(*b)),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }
}

impl std::fmt::Display for GroupKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GroupKey::Str(s) => f.write_str(s),
            GroupKey::Int(i) => write!(f, "{}", i),
            GroupKey::Bool(b) => write!(f, "{}", b),
        }
    }
}
