//! `window.localStorage` behind the `KeyValueStore` seam.

use la_core::{CoreError, KeyValueStore};
use wasm_bindgen::JsValue;
use web_sys::Storage;

/// Holds `None` when the browser refuses storage (privacy mode, sandboxed
/// iframe); every call then reports `StorageUnavailable`.
pub struct LocalStore {
    storage: Option<Storage>,
}

impl LocalStore {
    pub fn open() -> Self {
        Self {
            storage: web_sys::window().and_then(|w| w.local_storage().ok().flatten()),
        }
    }

    pub fn is_available(&self) -> bool {
        self.storage.is_some()
    }

    fn storage(&self) -> Result<&Storage, CoreError> {
        self.storage.as_ref().ok_or(CoreError::StorageUnavailable)
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Result<Option<String>, CoreError> {
        self.storage()?
            .get_item(key)
            .map_err(|e| CoreError::StorageRead(describe(&e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CoreError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| CoreError::StorageWrite(describe(&e)))
    }
}

fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}
