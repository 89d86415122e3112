//! Filter application for the recap pipeline
//!
//! Reduces the canonical grouped set to rows matching EVERY declared
//! filter (AND semantics). Unset selections are no-ops, so region,
//! sub-region, month and free-text search compose independently exactly
//! as the screens combine them.

use crate::record::RecapProfile;

use super::highlight::contains_ci;
use super::query::RecapQuery;
use super::result::RecapRow;

/// Checks if a row survives every filter in the query.
///
/// The free-text subject filter is always present: case-insensitive
/// substring containment of the query in the subject name, with the empty
/// query matching all. Declared filters run against the row body; a
/// missing field never matches a set selection.
pub(crate) fn row_matches(row: &RecapRow, profile: &RecapProfile, query: &RecapQuery) -> bool {
    if !query.search().is_empty() && !contains_ci(&row.subject, query.search()) {
        return false;
    }

    profile.filters().iter().all(|spec| {
        let selected = query.selection(spec.name());
        if selected.is_empty() {
            return true;
        }
        match spec.field().get(&row.body) {
            Some(field) => spec.matcher().matches(field, selected),
            None => false,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::FilterSpec;
    use serde_json::json;

    fn profile() -> RecapProfile {
        RecapProfile::new("user.name")
            .with_filter(FilterSpec::equals("kelurahan", "user.kelurahan"))
            .with_filter(FilterSpec::month("month", "created_at"))
    }

    fn row(name: &str, kelurahan: &str, created_at: &str) -> RecapRow {
        RecapRow {
            key: None,
            subject: name.to_string(),
            body: json!({
                "user": {"name": name, "kelurahan": kelurahan},
                "created_at": created_at,
            }),
        }
    }

    #[test]
    fn test_unset_selections_match_all() {
        let row = row("Siti", "Semanggi", "2024-03-10");
        assert!(row_matches(&row, &profile(), &RecapQuery::new()));
    }

    #[test]
    fn test_filters_combine_with_and() {
        let row = row("Siti", "Semanggi", "2024-03-10");

        let both_match = RecapQuery::new()
            .with_selection("kelurahan", "Semanggi")
            .with_selection("month", "2024-03");
        assert!(row_matches(&row, &profile(), &both_match));

        let one_fails = RecapQuery::new()
            .with_selection("kelurahan", "Semanggi")
            .with_selection("month", "2024-04");
        assert!(!row_matches(&row, &profile(), &one_fails));
    }

    #[test]
    fn test_free_text_subject_filter() {
        let row = row("Siti Aminah", "Semanggi", "2024-03-10");

        let hit = RecapQuery::new().with_search("aminah");
        assert!(row_matches(&row, &profile(), &hit));

        let miss = RecapQuery::new().with_search("dewi");
        assert!(!row_matches(&row, &profile(), &miss));
    }

    #[test]
    fn test_missing_field_never_matches_set_selection() {
        let row = RecapRow {
            key: None,
            subject: "Siti".into(),
            body: json!({"user": {"name": "Siti"}}),
        };
        let query = RecapQuery::new().with_selection("kelurahan", "Semanggi");
        assert!(!row_matches(&row, &profile(), &query));
    }

    #[test]
    fn test_unknown_selection_name_is_ignored() {
        // A selection no declared filter owns cannot exclude anything.
        let row = row("Siti", "Semanggi", "2024-03-10");
        let query = RecapQuery::new().with_selection("puskesmas", "Pajang");
        assert!(row_matches(&row, &profile(), &query));
    }
}
