//! FileRecordStore - record log persisted as a single JSON-array file.
//!
//! Every operation is a synchronous whole-file read or write. A mutex
//! around the read-modify-write cycle serializes callers within this
//! process; writers in other processes sharing the file are not serialized
//! and can lose an intervening append (last full-array snapshot wins).

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde_json::Value;

use super::{is_clear_action, RecordStore, StoreError};

/// JSON-file-backed record store.
pub struct FileRecordStore {
    path: PathBuf,
    // Guards the whole read-modify-write cycle, not individual fs calls.
    guard: Mutex<()>,
}

impl FileRecordStore {
    /// Create a store backed by the file at `path`. The file itself is not
    /// touched until the first operation.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileRecordStore {
            path: path.into(),
            guard: Mutex::new(()),
        }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock(&self, operation: &'static str) -> Result<std::sync::MutexGuard<'_, ()>, StoreError> {
        self.guard
            .lock()
            .map_err(|_| StoreError::LockPoisoned(operation))
    }

    /// Caller must hold the guard.
    fn ensure_file(&self) -> Result<(), StoreError> {
        if self.path.exists() {
            return Ok(());
        }
        self.reset_file()
    }

    /// Caller must hold the guard. Creates parent directories as needed and
    /// leaves the file holding the compact empty array.
    fn reset_file(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, b"[]")?;
        Ok(())
    }

    /// Caller must hold the guard.
    fn read_records(&self) -> Result<Vec<Value>, StoreError> {
        self.ensure_file()?;
        let content = fs::read_to_string(&self.path)?;
        let records = serde_json::from_str(&content)?;
        Ok(records)
    }

    /// Caller must hold the guard. Full-array overwrite, pretty-printed to
    /// keep the file hand-inspectable.
    fn write_records(&self, records: &[Value]) -> Result<(), StoreError> {
        let content = serde_json::to_vec_pretty(records)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

impl RecordStore for FileRecordStore {
    fn ensure(&self) -> Result<(), StoreError> {
        let _guard = self.lock("ensure")?;
        self.ensure_file()
    }

    fn append(&self, record: Value) -> Result<(), StoreError> {
        let _guard = self.lock("append")?;
        if is_clear_action(&record) {
            return self.reset_file();
        }
        let mut records = self.read_records()?;
        records.push(record);
        self.write_records(&records)
    }

    fn read_all(&self) -> Result<Vec<Value>, StoreError> {
        let _guard = self.lock("read_all")?;
        self.read_records()
    }

    fn clear(&self) -> Result<(), StoreError> {
        let _guard = self.lock("clear")?;
        self.reset_file()
    }
}
