//! In-memory backend for tests

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use super::traits::{KeyValueStore, StorageError, StorageResult};

/// `KeyValueStore` backed by a map, counting writes
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
    writes: Cell<usize>,
    read_only: Cell<bool>,
}

impl MemoryStore {
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::default();
        store.entries.borrow_mut().insert(key.to_string(), value.to_string());
        store
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    pub fn write_count(&self) -> usize {
        self.writes.get()
    }

    /// Make every subsequent write fail like a full quota
    pub fn set_read_only(&self, read_only: bool) {
        self.read_only.set(read_only);
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.raw(key))
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        if self.read_only.get() {
            return Err(StorageError::Write("quota exceeded".to_string()));
        }
        self.writes.set(self.writes.get() + 1);
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}
