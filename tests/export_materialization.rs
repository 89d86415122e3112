//! Export Materialization Tests
//!
//! - Export receives the full filtered+sorted set, never just the page
//! - The handoff reflects the query's filters and sort at call time

use std::fs::File;
use std::io::{BufRead, BufReader, Write};

use rekap::engine::{RecapEngine, RecapQuery, SortSpec};
use rekap::export::{export_with, ExportSink, SinkResult};
use rekap::record::{FilterSpec, RecapProfile};
use serde_json::{json, Value};

// =============================================================================
// Helper Functions
// =============================================================================

fn profile() -> RecapProfile {
    RecapProfile::new("user.name")
        .with_group_key("user_id")
        .with_additive_field("total_jumlah_ttd_dikonsumsi")
        .with_filter(FilterSpec::equals("kelurahan", "user.kelurahan"))
}

/// 50 subjects; exactly 12 of them in kelurahan Semanggi.
fn batch() -> Vec<Value> {
    (1..=50i64)
        .map(|i| {
            let kelurahan = if i <= 12 { "Semanggi" } else { "Pajang" };
            json!({
                "user_id": i,
                "user": {"name": format!("Ibu {:03}", i), "kelurahan": kelurahan},
                "total_jumlah_ttd_dikonsumsi": i,
            })
        })
        .collect()
}

/// Minimal CSV sink, the shape the spreadsheet generator consumes.
struct CsvSink {
    file: File,
}

impl ExportSink for CsvSink {
    fn write_rows(&mut self, rows: &[Value]) -> SinkResult<()> {
        writeln!(self.file, "nama,jumlah_ttd")?;
        for row in rows {
            writeln!(
                self.file,
                "{},{}",
                row["user"]["name"].as_str().unwrap_or(""),
                row["total_jumlah_ttd_dikonsumsi"]
            )?;
        }
        Ok(())
    }
}

// =============================================================================
// Materialization
// =============================================================================

/// A region filter reducing 50 -> 12 exports exactly those 12 rows,
/// whatever page is on screen.
#[test]
fn test_export_reflects_filters_not_page() {
    let engine = RecapEngine::new(batch(), profile()).unwrap();

    for page_number in [1, 2] {
        let query = RecapQuery::new()
            .with_selection("kelurahan", "Semanggi")
            .with_page_size(10)
            .with_page_number(page_number);

        let rows = engine.materialize_for_export(&query);
        assert_eq!(rows.len(), 12);
    }
}

/// Export order follows the query's sort.
#[test]
fn test_export_follows_sort() {
    let engine = RecapEngine::new(batch(), profile()).unwrap();
    let query = RecapQuery::new()
        .with_selection("kelurahan", "Semanggi")
        .with_sort(SortSpec::field("total_jumlah_ttd_dikonsumsi").descending());

    let rows = engine.materialize_for_export(&query);
    assert_eq!(rows[0]["total_jumlah_ttd_dikonsumsi"], json!(12));
    assert_eq!(rows[11]["total_jumlah_ttd_dikonsumsi"], json!(1));
}

/// An unfiltered export returns the whole canonical set.
#[test]
fn test_unfiltered_export_is_whole_set() {
    let engine = RecapEngine::new(batch(), profile()).unwrap();
    assert_eq!(engine.materialize_for_export(&RecapQuery::new()).len(), 50);
}

// =============================================================================
// Sink Handoff
// =============================================================================

/// The CSV sink receives one line per filtered row plus the header.
#[test]
fn test_csv_sink_round_trip() {
    let engine = RecapEngine::new(batch(), profile()).unwrap();
    let query = RecapQuery::new()
        .with_selection("kelurahan", "Semanggi")
        .with_page_number(2)
        .with_page_size(10);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rekap_ttd.csv");

    let mut sink = CsvSink {
        file: File::create(&path).unwrap(),
    };
    export_with(&engine, &query, &mut sink).unwrap();

    let lines: Vec<String> = BufReader::new(File::open(&path).unwrap())
        .lines()
        .map(Result::unwrap)
        .collect();

    assert_eq!(lines.len(), 13);
    assert_eq!(lines[0], "nama,jumlah_ttd");
    assert!(lines[1].starts_with("Ibu 001,"));
}
