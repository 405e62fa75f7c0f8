//! InMemoryRecordStore - Vec-backed record store for tests and development.

use std::sync::{Arc, RwLock};

use serde_json::Value;

use super::{is_clear_action, RecordStore, StoreError};

/// In-memory record store. Clone-friendly via Arc; clones share storage.
#[derive(Clone, Default)]
pub struct InMemoryRecordStore {
    records: Arc<RwLock<Vec<Value>>>,
}

impl InMemoryRecordStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        InMemoryRecordStore::default()
    }
}

impl RecordStore for InMemoryRecordStore {
    fn ensure(&self) -> Result<(), StoreError> {
        // Storage exists from construction; nothing to create.
        Ok(())
    }

    fn append(&self, record: Value) -> Result<(), StoreError> {
        let mut records = self
            .records
            .write()
            .map_err(|_| StoreError::LockPoisoned("append"))?;
        if is_clear_action(&record) {
            records.clear();
        } else {
            records.push(record);
        }
        Ok(())
    }

    fn read_all(&self) -> Result<Vec<Value>, StoreError> {
        let records = self
            .records
            .read()
            .map_err(|_| StoreError::LockPoisoned("read_all"))?;
        Ok(records.clone())
    }

    fn clear(&self) -> Result<(), StoreError> {
        let mut records = self
            .records
            .write()
            .map_err(|_| StoreError::LockPoisoned("clear"))?;
        records.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn append_and_read_round_trip() {
        let store = InMemoryRecordStore::new();
        store.append(json!({ "seq": 1 })).unwrap();
        store.append(json!({ "seq": 2 })).unwrap();

        let records = store.read_all().unwrap();
        assert_eq!(records, vec![json!({ "seq": 1 }), json!({ "seq": 2 })]);
    }

    #[test]
    fn clear_action_payload_clears() {
        let store = InMemoryRecordStore::new();
        store.append(json!({ "seq": 1 })).unwrap();
        store.append(json!({ "action": "clear" })).unwrap();
        assert!(store.read_all().unwrap().is_empty());
    }

    #[test]
    fn clones_share_storage() {
        let store = InMemoryRecordStore::new();
        let clone = store.clone();
        store.append(json!({ "seq": 1 })).unwrap();
        assert_eq!(clone.read_all().unwrap().len(), 1);
    }

    #[test]
    fn status_counts_records() {
        let store = InMemoryRecordStore::new();
        store.append(json!({ "seq": 1 })).unwrap();
        let status = store.status();
        assert!(status.is_running());
        match status {
            super::super::StoreStatus::Running { record_count, .. } => {
                assert_eq!(record_count, 1)
            }
            other => panic!("expected running status, got: {:?}", other),
        }
    }
}
