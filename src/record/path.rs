//! Dotted field paths into JSON records

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A dot-separated path into a JSON object (`user.name`).
///
/// Upstream records embed the subject as a sub-object, so every declared
/// facet resolves through a path rather than a bare field name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldPath(String);

impl FieldPath {
    /// Creates a path from a dotted string.
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// Returns the dotted string form.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Resolves the path against a record.
    ///
    /// Returns `None` if any segment is missing or a non-object is
    /// traversed; missing fields are a no-match, never an error.
    pub fn get<'a>(&self, record: &'a Value) -> Option<&'a Value> {
        self.0
            .split('.')
            .try_fold(record, |value, segment| value.get(segment))
    }

    /// Writes `new` at the path, creating the leaf field if absent.
    ///
    /// Intermediate segments must already exist as objects; returns false
    /// otherwise. Only the grouping accumulator writes through paths, and
    /// only into representative copies it owns.
    pub fn set(&self, record: &mut Value, new: Value) -> bool {
        let mut segments = self.0.split('.').peekable();
        let mut cursor = record;

        while let Some(segment) = segments.next() {
            if segments.peek().is_none() {
                match cursor.as_object_mut() {
                    Some(map) => {
                        map.insert(segment.to_string(), new);
                        return true;
                    }
                    None => return false,
                }
            }
            cursor = match cursor.get_mut(segment) {
                Some(next) => next,
                None => return false,
            };
        }
        false
    }
}

impl From<&str> for FieldPath {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl std::fmt::Display for FieldPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_top_level_get() {
        let record = json!({"hb": 11.2});
        assert_eq!(FieldPath::new("hb").get(&record), Some(&json!(11.2)));
    }

    #[test]
    fn test_nested_get() {
        let record = json!({"user": {"name": "Siti", "kelurahan": "Semanggi"}});
        assert_eq!(
            FieldPath::new("user.name").get(&record),
            Some(&json!("Siti"))
        );
    }

    #[test]
    fn test_missing_segment_is_none() {
        let record = json!({"user": {"name": "Siti"}});
        assert_eq!(FieldPath::new("user.age").get(&record), None);
        assert_eq!(FieldPath::new("spouse.name").get(&record), None);
    }

    #[test]
    fn test_traversing_non_object_is_none() {
        let record = json!({"user": "Siti"});
        assert_eq!(FieldPath::new("user.name").get(&record), None);
    }

    #[test]
    fn test_set_existing_leaf() {
        let mut record = json!({"user": {"ttd": 30}});
        assert!(FieldPath::new("user.ttd").set(&mut record, json!(85)));
        assert_eq!(record, json!({"user": {"ttd": 85}}));
    }

    #[test]
    fn test_set_creates_missing_leaf() {
        let mut record = json!({"user": {}});
        assert!(FieldPath::new("user.ttd").set(&mut record, json!(10)));
        assert_eq!(record, json!({"user": {"ttd": 10}}));
    }

    #[test]
    fn test_set_missing_parent_fails() {
        let mut record = json!({"name": "Siti"});
        assert!(!FieldPath::new("user.ttd").set(&mut record, json!(10)));
        assert_eq!(record, json!({"name": "Siti"}));
    }
}
