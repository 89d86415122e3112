//! Ready-made profiles for the upstream recap screens
//!
//! The admin/petugas portals and dashboards all render the same four
//! record shapes with different filter selections; each shape is declared
//! once here instead of once per screen. Field names follow the upstream
//! API: records embed the subject as a `user` sub-object, regions are
//! `kelurahan`/`puskesmas`, and TTD consumption accumulates in
//! `total_jumlah_ttd_dikonsumsi`.

use crate::record::{FilterSpec, RecapProfile};

/// Hemoglobin recap: one row per pregnant user, latest-reading fields
/// kept as delivered (no accumulation).
pub fn hb_recap() -> RecapProfile {
    RecapProfile::new("user.name")
        .with_group_key("user_id")
        .with_filter(FilterSpec::equals("kelurahan", "user.kelurahan"))
        .with_filter(FilterSpec::equals("puskesmas", "user.puskesmas"))
        .with_filter(FilterSpec::month("month", "created_at"))
}

/// Iron-tablet recap: consumption counts summed per user.
pub fn ttd_recap() -> RecapProfile {
    RecapProfile::new("user.name")
        .with_group_key("user_id")
        .with_additive_field("total_jumlah_ttd_dikonsumsi")
        .with_filter(FilterSpec::equals("kelurahan", "user.kelurahan"))
        .with_filter(FilterSpec::equals("puskesmas", "user.puskesmas"))
        .with_filter(FilterSpec::month("month", "created_at"))
}

/// 90-day iron-tablet program recap. Same shape as [`ttd_recap`]; the
/// upstream endpoint already restricts the batch to the 90-day program,
/// so only the declared facets are shared, not the data.
pub fn ttd90_recap() -> RecapProfile {
    ttd_recap()
}

/// Meal-journal recap: logged meal counts summed per user.
pub fn meal_journal_recap() -> RecapProfile {
    RecapProfile::new("user.name")
        .with_group_key("user_id")
        .with_additive_field("jumlah_makan")
        .with_filter(FilterSpec::equals("kelurahan", "user.kelurahan"))
        .with_filter(FilterSpec::equals("puskesmas", "user.puskesmas"))
        .with_filter(FilterSpec::month("month", "created_at"))
}
