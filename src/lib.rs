//! # Stratdots Client
//!
//! A Rust client for the Stratdots game-account API supporting both native and
//! WASM targets.
//!
//! ## Architecture
//!
//! The client is organized in layers:
//!
//! 1. **Core** — Domain types, view models, errors (always available, WASM-safe)
//! 2. **Session** — The persisted bearer token behind a `TokenStorage` capability
//! 3. **HTTP API** — `GameHttp`, the single request pipeline
//! 4. **High-Level Client** — `GameClient` with auth, profile, inventory and shop sub-clients
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use stratdots_client::prelude::*;
//!
//! let client = GameClient::builder()
//!     .api_base("https://api.stratdots.example")
//!     .renderer(Arc::new(HtmlRenderer::new()))
//!     .build()?;
//!
//! client.start().await;
//! client.auth().login("ada", "hunter2").await?;
//! client.shop().buy("skin_neon").await?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes used across all domains.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions, sub-clients.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// API paths, storage key and defaults.
pub mod network;

/// View models and the renderer boundary.
pub mod render;

// ── Layer 2: Session ─────────────────────────────────────────────────────────

/// Token persistence with best-effort storage access.
pub mod session;

/// Authentication: credentials, auth state, login/logout.
pub mod auth;

// ── Layer 3: HTTP API ────────────────────────────────────────────────────────

/// The request pipeline.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 4: High-Level Client ───────────────────────────────────────────────

/// `GameClient` — the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::ItemId;

    // Domain types
    pub use crate::domain::inventory::InventoryState;
    pub use crate::domain::profile::Profile;
    pub use crate::domain::shop::{PurchaseOutcome, ShopCatalog, ShopItem};

    // Errors
    pub use crate::error::{ApiError, HttpError, SdkError, StorageError};

    // Auth
    pub use crate::auth::{AuthState, Credentials};

    // Session
    pub use crate::session::{MemoryStorage, SessionStore, TokenStorage};
    #[cfg(not(target_arch = "wasm32"))]
    pub use crate::session::FileStorage;
    #[cfg(all(feature = "browser", target_arch = "wasm32"))]
    pub use crate::session::BrowserStorage;

    // Rendering
    pub use crate::render::{
        HtmlDocument, HtmlRenderer, InventoryView, NoopRenderer, ProfileView, Renderer,
        ShopView, StatusKind, StatusLine,
    };

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{
        AuthClient, GameClient, GameClientBuilder, InventoryClient, ProfileClient, ShopClient,
    };
    #[cfg(feature = "http")]
    pub use crate::http::{GameHttp, RequestOptions};
}
