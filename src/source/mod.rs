//! Record source seam
//!
//! The upstream API delivers one JSON array of records per screen load;
//! the fetch itself (HTTP, auth, retries) lives outside this crate. The
//! engine is only ever handed a materialized batch, and a failed fetch
//! reaches it as an empty batch, never as an error.

mod errors;

use serde_json::Value;
use tracing::warn;

pub use errors::{SourceError, SourceResult};

/// Supplies the raw record batch for one screen load.
///
/// One synchronous `fetch` per load; a superseded fetch is simply
/// discarded by the caller and the engine rebuilt from the newer batch.
pub trait RecordSource {
    /// Fetches the complete raw batch.
    fn fetch(&mut self) -> SourceResult<Vec<Value>>;
}

/// In-memory source over an already-materialized batch.
pub struct VecSource {
    records: Vec<Value>,
}

impl VecSource {
    /// Wraps a batch the caller already holds.
    pub fn new(records: Vec<Value>) -> Self {
        Self { records }
    }
}

impl RecordSource for VecSource {
    fn fetch(&mut self) -> SourceResult<Vec<Value>> {
        Ok(self.records.clone())
    }
}

/// Fetches a batch, degrading a failure to the empty batch.
///
/// This is the boundary rule: upstream failures are the source's
/// concern; the engine sees "no data" and renders a valid zero-result
/// recap.
pub fn load_or_empty<S: RecordSource>(source: &mut S) -> Vec<Value> {
    match source.fetch() {
        Ok(records) => records,
        Err(err) => {
            warn!(error = %err, "record fetch failed, rendering empty recap");
            Vec::new()
        }
    }
}
