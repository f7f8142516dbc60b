//! Browser localStorage backend

use super::traits::{KeyValueStore, StorageError, StorageResult};

/// `KeyValueStore` over `window.localStorage`.
///
/// Holds no handle; the storage object is looked up on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStore;

impl BrowserStore {
    fn storage() -> StorageResult<web_sys::Storage> {
        let window = web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window".to_string()))?;
        window
            .local_storage()
            .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))?
            .ok_or_else(|| StorageError::Unavailable("localStorage is disabled".to_string()))
    }
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| StorageError::Read(format!("{:?}", e)))
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Write(format!("{:?}", e)))
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_missing_key_reads_none() {
        assert_eq!(BrowserStore.get("todo-cards-test-missing").unwrap(), None);
    }

    #[wasm_bindgen_test]
    fn test_set_then_get() {
        let key = "todo-cards-test-roundtrip";
        BrowserStore.set(key, r#"[{"id":"1","text":"a","completed":false}]"#).unwrap();
        assert_eq!(
            BrowserStore.get(key).unwrap().as_deref(),
            Some(r#"[{"id":"1","text":"a","completed":false}]"#)
        );
    }
}
