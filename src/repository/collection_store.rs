//! Collection Storage Adapter
//!
//! Reads and writes the whole item collection as one JSON array under one key.

use crate::models::Item;
use super::traits::{KeyValueStore, StorageError, StorageResult};

/// Suffix of the key holding an unreadable blob moved aside by `load`
const CORRUPT_SUFFIX: &str = ".corrupt";

pub struct CollectionStore<S> {
    backend: S,
    key: String,
}

impl<S: KeyValueStore> CollectionStore<S> {
    pub fn new(backend: S, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    /// Load the full collection.
    ///
    /// A missing key is an empty collection. A value that does not parse is
    /// copied to `<key>.corrupt` and also treated as empty.
    pub fn load(&self) -> StorageResult<Vec<Item>> {
        let Some(raw) = self.backend.get(&self.key)? else {
            return Ok(Vec::new());
        };
        match serde_json::from_str::<Vec<Item>>(&raw) {
            Ok(items) => Ok(items),
            Err(e) => {
                log::warn!("[STORE] Stored value under '{}' is malformed ({}), starting empty", self.key, e);
                self.quarantine(&raw);
                Ok(Vec::new())
            }
        }
    }

    /// Replace the stored collection with `items`
    pub fn save(&self, items: &[Item]) -> StorageResult<()> {
        let json = serde_json::to_string(items).map_err(|e| StorageError::Serialize(e.to_string()))?;
        self.backend.set(&self.key, &json)
    }

    fn quarantine(&self, raw: &str) {
        let backup_key = format!("{}{}", self.key, CORRUPT_SUFFIX);
        match self.backend.set(&backup_key, raw) {
            Ok(()) => log::warn!("[STORE] Unreadable value kept under '{}'", backup_key),
            Err(e) => log::error!("[STORE] Could not back up unreadable value: {}", e),
        }
    }
}
