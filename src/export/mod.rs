//! Export sink seam
//!
//! Spreadsheet generation is a black box downstream; this seam only
//! guarantees what it receives: the full filtered+sorted record set,
//! never just the visible page.

mod errors;

use serde_json::Value;
use tracing::debug;

use crate::engine::{RecapEngine, RecapQuery};

pub use errors::{SinkError, SinkResult};

/// Receives the materialized row set for file generation.
pub trait ExportSink {
    /// Writes the full filtered+sorted rows. No format contract imposed.
    fn write_rows(&mut self, rows: &[Value]) -> SinkResult<()>;
}

/// Materializes the engine's current filtered+sorted set into a sink.
pub fn export_with<S: ExportSink>(
    engine: &RecapEngine,
    query: &RecapQuery,
    sink: &mut S,
) -> SinkResult<()> {
    let rows = engine.materialize_for_export(query);
    debug!(rows = rows.len(), "handing materialized rows to export sink");
    sink.write_rows(&rows)
}
