//! Browser token storage backed by `window.localStorage`.
//!
//! Only available with the `browser` feature on `wasm32`. The storage handle is
//! looked up on every call so the type stays `Send + Sync` (WASM is
//! single-threaded; nothing JS-side is held across calls).

use wasm_bindgen::JsValue;
use web_sys::Storage;

use super::TokenStorage;
use crate::error::StorageError;

#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserStorage;

impl BrowserStorage {
    pub fn new() -> Self {
        Self
    }

    fn local_storage() -> Result<Storage, StorageError> {
        let window = web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window".to_string()))?;
        window
            .local_storage()
            .map_err(|e| StorageError::Denied(extract_js_error(&e)))?
            .ok_or_else(|| StorageError::Unavailable("localStorage is disabled".to_string()))
    }
}

impl TokenStorage for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::local_storage()?
            .get_item(key)
            .map_err(|e| StorageError::Denied(extract_js_error(&e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::local_storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Unavailable(extract_js_error(&e)))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        Self::local_storage()?
            .remove_item(key)
            .map_err(|e| StorageError::Unavailable(extract_js_error(&e)))
    }
}

fn extract_js_error(e: &JsValue) -> String {
    e.as_string().unwrap_or_else(|| format!("{:?}", e))
}
