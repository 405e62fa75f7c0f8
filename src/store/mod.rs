//! RecordStore - append-only log of opaque accounting records.
//!
//! Records are arbitrary JSON values held as one JSON array. The store
//! supports ensure/append/read/clear plus a never-failing status query;
//! records are meant to be ephemeral and are wiped when the hosting process
//! shuts down (see `service::lifecycle` under the `http` feature).

mod error;
mod file;
mod in_memory;

pub use error::StoreError;
pub use file::FileRecordStore;
pub use in_memory::InMemoryRecordStore;

use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Payload `action` value that makes `append` clear the store instead.
/// Sent by the frontend's `sendBeacon` on page unload.
const CLEAR_ACTION: &str = "clear";

/// Append-only record log.
///
/// `append` is a whole-array read-modify-write; implementations serialize
/// calls within the process, but writers in other processes sharing the
/// same backing file still race (last full-array snapshot wins).
pub trait RecordStore: Send + Sync {
    /// Create the backing storage holding `[]` iff it does not exist yet.
    /// Idempotent; never wipes existing records.
    fn ensure(&self) -> Result<(), StoreError>;

    /// Push one record at the tail, preserving prior order.
    ///
    /// A record shaped `{"action": "clear"}` short-circuits to `clear` and
    /// appends nothing.
    fn append(&self, record: Value) -> Result<(), StoreError>;

    /// Return every record in append order. A fresh store reads as empty.
    fn read_all(&self) -> Result<Vec<Value>, StoreError>;

    /// Reset the store to an empty array. Idempotent.
    fn clear(&self) -> Result<(), StoreError>;

    /// Summarize the store for a status probe. Never fails: read or parse
    /// errors come back as `StoreStatus::Error`.
    fn status(&self) -> StoreStatus {
        match self.read_all() {
            Ok(records) => StoreStatus::Running {
                timestamp: now_millis(),
                record_count: records.len(),
            },
            Err(e) => StoreStatus::Error {
                timestamp: now_millis(),
                error: e.to_string(),
            },
        }
    }
}

/// Whether `record` is the special clear payload rather than data to append.
pub(crate) fn is_clear_action(record: &Value) -> bool {
    record.get("action").and_then(Value::as_str) == Some(CLEAR_ACTION)
}

/// Result of a status probe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum StoreStatus {
    #[serde(rename_all = "camelCase")]
    Running { timestamp: u64, record_count: usize },
    Error { timestamp: u64, error: String },
}

impl StoreStatus {
    pub fn is_running(&self) -> bool {
        matches!(self, StoreStatus::Running { .. })
    }
}

/// Milliseconds since the Unix epoch.
fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
