//! Item Repository
//!
//! Every operation loads the full collection, applies one change, and saves the
//! full collection again. Operations that change nothing do not write.

use crate::models::Item;
use super::collection_store::CollectionStore;
use super::traits::{KeyValueStore, StorageResult};

/// Current time in milliseconds since the Unix epoch
#[cfg(target_arch = "wasm32")]
fn now_millis() -> u64 {
    js_sys::Date::now() as u64
}

/// Current time in milliseconds since the Unix epoch
#[cfg(not(target_arch = "wasm32"))]
fn now_millis() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}

/// Pick a timestamp id not used by any item, counting up from `now`
pub fn next_id(items: &[Item], now: u64) -> String {
    let mut candidate = now;
    loop {
        let id = candidate.to_string();
        if !items.iter().any(|item| item.id == id) {
            return id;
        }
        candidate += 1;
    }
}

pub struct ItemRepository<S> {
    store: CollectionStore<S>,
    clock: fn() -> u64,
}

impl<S: KeyValueStore> ItemRepository<S> {
    pub fn new(backend: S, key: impl Into<String>) -> Self {
        Self {
            store: CollectionStore::new(backend, key),
            clock: now_millis,
        }
    }

    /// Replace the id clock
    #[cfg(test)]
    pub fn with_clock(mut self, clock: fn() -> u64) -> Self {
        self.clock = clock;
        self
    }

    pub fn list(&self) -> StorageResult<Vec<Item>> {
        self.store.load()
    }

    pub fn find_by_id(&self, id: &str) -> StorageResult<Option<Item>> {
        Ok(self.store.load()?.into_iter().find(|item| item.id == id))
    }

    /// Append a new pending item. Blank text is ignored and returns `None`.
    pub fn add(&self, text: &str) -> StorageResult<Option<Item>> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(None);
        }
        let mut items = self.store.load()?;
        let item = Item::new(next_id(&items, (self.clock)()), text);
        items.push(item.clone());
        self.store.save(&items)?;
        log::info!("[REPO] Added item {}", item.id);
        Ok(Some(item))
    }

    /// Flip the completion flag. Returns `false` if the id is unknown.
    pub fn toggle_completion(&self, id: &str) -> StorageResult<bool> {
        let mut items = self.store.load()?;
        let Some(item) = items.iter_mut().find(|item| item.id == id) else {
            return Ok(false);
        };
        item.completed = !item.completed;
        let completed = item.completed;
        self.store.save(&items)?;
        log::debug!("[REPO] Item {} completed={}", id, completed);
        Ok(true)
    }

    /// Remove the item with `id`. Returns `false` if nothing matched.
    pub fn remove(&self, id: &str) -> StorageResult<bool> {
        let mut items = self.store.load()?;
        let before = items.len();
        items.retain(|item| item.id != id);
        if items.len() == before {
            return Ok(false);
        }
        self.store.save(&items)?;
        log::info!("[REPO] Removed item {}", id);
        Ok(true)
    }

    /// Store the trimmed text. Unchanged, blank, or unknown-id updates are no-ops.
    pub fn update_text(&self, id: &str, new_text: &str) -> StorageResult<bool> {
        let new_text = new_text.trim();
        if new_text.is_empty() {
            return Ok(false);
        }
        let mut items = self.store.load()?;
        let Some(item) = items.iter_mut().find(|item| item.id == id) else {
            return Ok(false);
        };
        if item.text == new_text {
            return Ok(false);
        }
        item.text = new_text.to_string();
        self.store.save(&items)?;
        log::info!("[REPO] Updated text of item {}", id);
        Ok(true)
    }
}
