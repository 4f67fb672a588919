//! Network and storage constants for the Stratdots client.

use std::time::Duration;

/// Environment variable (native) / `window` global (browser) holding the API base URL.
pub const API_BASE_VAR: &str = "STRATDOTS_API_BASE";

/// Storage key under which the bearer token is persisted.
pub const TOKEN_STORAGE_KEY: &str = "stratdots_token";

/// Default request timeout for native builds.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

// ── API paths ────────────────────────────────────────────────────────────────

pub const LOGIN_PATH: &str = "/api/login";
pub const REGISTER_PATH: &str = "/api/register";
pub const LOGOUT_PATH: &str = "/api/logout";
pub const PROFILE_PATH: &str = "/api/profile";
pub const INVENTORY_PATH: &str = "/api/inventory";
pub const SHOP_ITEMS_PATH: &str = "/api/shop/items";
pub const SHOP_BUY_PATH: &str = "/api/shop/buy";
