//! Session store — the persisted bearer token.
//!
//! ## Failure Policy
//!
//! Session continuity is best-effort. The underlying [`TokenStorage`] may be
//! denied or unavailable (private browsing, read-only home directory, quota),
//! and the store never raises to its callers:
//!
//! - a failed **read** degrades to "no token" (the user sees the login form),
//! - a failed **write** or **remove** degrades to "store skipped" (the token is
//!   not persisted; the current request flow continues).
//!
//! Every degradation is logged at `warn` with the storage error, never the token.
//!
//! The token is read fresh for every request: [`SessionStore`] holds no cache
//! of its own, so whatever was last written to storage is what gets sent.

pub mod memory;

#[cfg(not(target_arch = "wasm32"))]
pub mod file;

#[cfg(all(feature = "browser", target_arch = "wasm32"))]
pub mod browser;

use std::sync::Arc;

use crate::error::StorageError;
use crate::network::TOKEN_STORAGE_KEY;

pub use memory::MemoryStorage;

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStorage;

#[cfg(all(feature = "browser", target_arch = "wasm32"))]
pub use browser::BrowserStorage;

/// String key/value persistence capability (browser `localStorage`, a file, memory).
pub trait TokenStorage: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Owner of the auth token. Cloning shares the same storage.
#[derive(Clone)]
pub struct SessionStore {
    storage: Arc<dyn TokenStorage>,
    key: String,
}

impl SessionStore {
    pub fn new(storage: Arc<dyn TokenStorage>) -> Self {
        Self::with_key(storage, TOKEN_STORAGE_KEY)
    }

    pub fn with_key(storage: Arc<dyn TokenStorage>, key: &str) -> Self {
        Self {
            storage,
            key: key.to_string(),
        }
    }

    /// A session backed by process memory only.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStorage::new()))
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// The stored token, or an empty string when there is no session.
    ///
    /// Storage failures degrade to the empty string.
    pub fn get_token(&self) -> String {
        match self.storage.get(&self.key) {
            Ok(token) => token.unwrap_or_default(),
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "token read failed, treating as logged out");
                String::new()
            }
        }
    }

    pub fn has_token(&self) -> bool {
        !self.get_token().is_empty()
    }

    /// Persist `token`, or clear the stored token when `token` is empty.
    ///
    /// Storage failures are logged and skipped.
    pub fn set_token(&self, token: &str) {
        let result = if token.is_empty() {
            self.storage.remove(&self.key)
        } else {
            self.storage.set(&self.key, token)
        };
        if let Err(e) = result {
            tracing::warn!(key = %self.key, error = %e, "token write skipped");
        }
    }

    pub fn clear(&self) {
        self.set_token("");
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenStorage;

    impl TokenStorage for BrokenStorage {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Denied("SecurityError".into()))
        }
        fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable("quota exceeded".into()))
        }
        fn remove(&self, _key: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable("quota exceeded".into()))
        }
    }

    #[test]
    fn test_latest_set_wins() {
        let session = SessionStore::in_memory();
        assert_eq!(session.get_token(), "");
        session.set_token("abc");
        assert_eq!(session.get_token(), "abc");
        session.set_token("def");
        assert_eq!(session.get_token(), "def");
    }

    #[test]
    fn test_empty_set_clears() {
        let session = SessionStore::in_memory();
        session.set_token("abc");
        session.set_token("");
        assert_eq!(session.get_token(), "");
        assert!(!session.has_token());

        session.set_token("again");
        session.clear();
        assert!(!session.has_token());
    }

    #[test]
    fn test_storage_failures_are_swallowed() {
        let session = SessionStore::new(Arc::new(BrokenStorage));
        session.set_token("abc");
        session.clear();
        assert_eq!(session.get_token(), "");
    }

    #[test]
    fn test_clones_share_storage() {
        let a = SessionStore::in_memory();
        let b = a.clone();
        a.set_token("shared");
        assert_eq!(b.get_token(), "shared");
    }

    #[test]
    fn test_custom_key() {
        let storage = Arc::new(MemoryStorage::new());
        let session = SessionStore::with_key(storage.clone(), "other_token");
        session.set_token("t");
        assert_eq!(storage.get("other_token").unwrap().as_deref(), Some("t"));
        assert_eq!(storage.get(TOKEN_STORAGE_KEY).unwrap(), None);
    }
}
