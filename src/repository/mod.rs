//! Repository Layer
//!
//! Storage adapter and item repository over a single key-value slot.

mod traits;
mod local_store;
mod collection_store;
mod item_repo;
#[cfg(test)]
mod memory_store;

pub use traits::{KeyValueStore, StorageError, StorageResult};
pub use local_store::BrowserStore;
pub use item_repo::ItemRepository;
#[cfg(test)]
pub use collection_store::CollectionStore;
#[cfg(test)]
pub use item_repo::next_id;
#[cfg(test)]
pub use memory_store::MemoryStore;
