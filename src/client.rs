//! High-level client — `GameClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`; the auth
//! flow lives in `auth/client.rs`. This module keeps the builder, the shared
//! state every clone sees, and the startup sequence.

use crate::auth::client::Auth;
use crate::auth::AuthState;
use crate::domain::inventory::client::Inventory;
use crate::domain::inventory::InventoryState;
use crate::domain::profile::client::Profiles;
use crate::domain::profile::Profile;
use crate::domain::shop::client::Shop;
use crate::error::SdkError;
use crate::http::GameHttp;
use crate::network::{DEFAULT_TIMEOUT, TOKEN_STORAGE_KEY};
use crate::render::{NoopRenderer, Renderer, StatusLine};
use crate::session::{SessionStore, TokenStorage};

use async_lock::RwLock;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::auth::client::Auth as AuthClient;
pub use crate::domain::inventory::client::Inventory as InventoryClient;
pub use crate::domain::profile::client::Profiles as ProfileClient;
pub use crate::domain::shop::client::Shop as ShopClient;

/// The primary entry point for the Stratdots client.
///
/// Provides nested sub-client accessors: `client.auth()`, `client.shop()`, etc.
/// Clones share the session, auth state, displayed data and purchase guard.
pub struct GameClient {
    pub(crate) http: GameHttp,
    pub(crate) renderer: Arc<dyn Renderer>,
    pub(crate) auth_state: Arc<RwLock<AuthState>>,
    /// Profile currently on display.
    pub(crate) profile: Arc<RwLock<Option<Profile>>>,
    /// Inventory currently on display.
    pub(crate) inventory: Arc<RwLock<Option<InventoryState>>>,
    /// Set while a buy request (and its inventory refresh) is in flight.
    pub(crate) purchase_in_flight: Arc<AtomicBool>,
}

impl GameClient {
    pub fn builder() -> GameClientBuilder {
        GameClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn auth(&self) -> Auth<'_> {
        Auth { client: self }
    }

    pub fn profile(&self) -> Profiles<'_> {
        Profiles { client: self }
    }

    pub fn inventory(&self) -> Inventory<'_> {
        Inventory { client: self }
    }

    pub fn shop(&self) -> Shop<'_> {
        Shop { client: self }
    }

    pub fn session(&self) -> &SessionStore {
        self.http.session()
    }

    pub fn http(&self) -> &GameHttp {
        &self.http
    }

    /// Page-load sequence: silent login, then the independent loads.
    ///
    /// When the stored session is accepted, inventory and shop load
    /// concurrently. Logged-out visitors still get the (public) shop. Load
    /// failures are already on the status line and are only logged here.
    pub async fn start(&self) -> AuthState {
        let state = self.auth().silent_login().await;

        if state.is_logged_in() {
            let (inventory, shop) = (self.inventory(), self.shop());
            let (inventory, shop) =
                futures_util::future::join(inventory.load(), shop.load()).await;
            if let Err(e) = inventory {
                tracing::debug!(error = %e, "startup inventory load failed");
            }
            if let Err(e) = shop {
                tracing::debug!(error = %e, "startup shop load failed");
            }
        } else if let Err(e) = self.shop().load().await {
            tracing::debug!(error = %e, "startup shop load failed");
        }

        state
    }

    pub(crate) fn status(&self, line: StatusLine) {
        self.renderer.status(&line);
    }
}

impl Clone for GameClient {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
            renderer: self.renderer.clone(),
            auth_state: self.auth_state.clone(),
            profile: self.profile.clone(),
            inventory: self.inventory.clone(),
            purchase_in_flight: self.purchase_in_flight.clone(),
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct GameClientBuilder {
    api_base: Option<String>,
    timeout: Option<Duration>,
    storage: Option<Arc<dyn TokenStorage>>,
    storage_key: String,
    renderer: Option<Arc<dyn Renderer>>,
}

impl Default for GameClientBuilder {
    fn default() -> Self {
        Self {
            api_base: None,
            timeout: Some(DEFAULT_TIMEOUT),
            storage: None,
            storage_key: TOKEN_STORAGE_KEY.to_string(),
            renderer: None,
        }
    }
}

impl GameClientBuilder {
    pub fn api_base(mut self, url: &str) -> Self {
        self.api_base = Some(url.to_string());
        self
    }

    /// Read the API base from `STRATDOTS_API_BASE` (environment variable on
    /// native, `window` global in the browser). Leaves it unset if absent.
    pub fn api_base_from_env(mut self) -> Self {
        if let Some(url) = api_base_from_environment() {
            self.api_base = Some(url);
        }
        self
    }

    /// Request timeout (native only; the browser applies its own).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn no_timeout(mut self) -> Self {
        self.timeout = None;
        self
    }

    pub fn storage(mut self, storage: Arc<dyn TokenStorage>) -> Self {
        self.storage = Some(storage);
        self
    }

    pub fn storage_key(mut self, key: &str) -> Self {
        self.storage_key = key.to_string();
        self
    }

    pub fn renderer(mut self, renderer: Arc<dyn Renderer>) -> Self {
        self.renderer = Some(renderer);
        self
    }

    /// Build the client. A missing API base is not an error here: every
    /// request will fail with a configuration error instead.
    pub fn build(self) -> Result<GameClient, SdkError> {
        let storage = self.storage.unwrap_or_else(default_storage);
        let session = SessionStore::with_key(storage, &self.storage_key);
        let http = GameHttp::new(self.api_base.as_deref(), session, self.timeout)?;

        Ok(GameClient {
            http,
            renderer: self
                .renderer
                .unwrap_or_else(|| Arc::new(NoopRenderer) as Arc<dyn Renderer>),
            auth_state: Arc::new(RwLock::new(AuthState::LoggedOut)),
            profile: Arc::new(RwLock::new(None)),
            inventory: Arc::new(RwLock::new(None)),
            purchase_in_flight: Arc::new(AtomicBool::new(false)),
        })
    }
}

#[cfg(all(feature = "browser", target_arch = "wasm32"))]
fn default_storage() -> Arc<dyn TokenStorage> {
    Arc::new(crate::session::BrowserStorage::new())
}

#[cfg(not(all(feature = "browser", target_arch = "wasm32")))]
fn default_storage() -> Arc<dyn TokenStorage> {
    Arc::new(crate::session::MemoryStorage::new())
}

#[cfg(all(feature = "browser", target_arch = "wasm32"))]
fn api_base_from_environment() -> Option<String> {
    let window = web_sys::window()?;
    let global: &wasm_bindgen::JsValue = window.as_ref();
    js_sys::Reflect::get(global, &wasm_bindgen::JsValue::from_str(crate::network::API_BASE_VAR))
        .ok()?
        .as_string()
        .filter(|s| !s.is_empty())
}

#[cfg(not(target_arch = "wasm32"))]
fn api_base_from_environment() -> Option<String> {
    std::env::var(crate::network::API_BASE_VAR)
        .ok()
        .filter(|s| !s.is_empty())
}

#[cfg(all(not(feature = "browser"), target_arch = "wasm32"))]
fn api_base_from_environment() -> Option<String> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HttpError;
    use crate::session::MemoryStorage;

    #[test]
    fn test_builder_defaults() {
        let client = GameClient::builder().build().unwrap();
        assert_eq!(client.http().base_url(), None);
        assert_eq!(client.session().key(), TOKEN_STORAGE_KEY);
        assert_eq!(client.session().get_token(), "");
    }

    #[test]
    fn test_builder_uses_given_storage_and_key() {
        let storage = Arc::new(MemoryStorage::with_entry("custom", "tok"));
        let client = GameClient::builder()
            .api_base("http://localhost:9/")
            .storage(storage)
            .storage_key("custom")
            .build()
            .unwrap();
        assert_eq!(client.http().base_url(), Some("http://localhost:9"));
        assert_eq!(client.session().get_token(), "tok");
    }

    #[tokio::test]
    async fn test_missing_api_base_surfaces_config_error() {
        let client = tokio_test::assert_ok!(GameClient::builder().build());
        let err = tokio_test::assert_err!(client.shop().get().await);
        assert!(matches!(err, SdkError::Http(HttpError::Config(_))));
    }

    #[test]
    fn test_start_without_api_base_stays_logged_out() {
        let storage = Arc::new(MemoryStorage::with_entry(TOKEN_STORAGE_KEY, "tok"));
        let client = GameClient::builder().storage(storage).build().unwrap();

        let state = tokio_test::block_on(client.start());

        assert_eq!(state, AuthState::LoggedOut);
        assert!(!client.session().has_token());
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let client = GameClient::builder().build().unwrap();
        let other = client.clone();
        *client.auth_state.write().await = AuthState::LoggedIn {
            username: "ada".into(),
        };
        assert!(other.auth().is_logged_in().await);
    }
}
