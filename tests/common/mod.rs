//! Shared fixtures: a mock API server and a client wired to an in-memory
//! session and an `HtmlRenderer`.

#![allow(dead_code)]

use std::sync::Arc;

use serde_json::{json, Value};
use stratdots_client::network::TOKEN_STORAGE_KEY;
use stratdots_client::prelude::*;
use wiremock::{MockServer, Request};

pub struct Harness {
    pub server: MockServer,
    pub client: GameClient,
    pub html: Arc<HtmlRenderer>,
}

impl Harness {
    /// Client pointed at a fresh mock server, with `token` pre-stored if given.
    pub async fn new(token: Option<&str>) -> Self {
        let server = MockServer::start().await;
        let storage = match token {
            Some(t) => MemoryStorage::with_entry(TOKEN_STORAGE_KEY, t),
            None => MemoryStorage::new(),
        };
        let html = Arc::new(HtmlRenderer::new());
        let client = GameClient::builder()
            .api_base(&server.uri())
            .storage(Arc::new(storage))
            .renderer(html.clone())
            .build()
            .expect("client should build");
        Self {
            server,
            client,
            html,
        }
    }

    pub fn doc(&self) -> HtmlDocument {
        self.html.snapshot()
    }

    pub async fn requests(&self) -> Vec<Request> {
        self.server.received_requests().await.unwrap_or_default()
    }

    pub async fn requests_to(&self, path: &str) -> Vec<Request> {
        self.requests()
            .await
            .into_iter()
            .filter(|r| r.url.path() == path)
            .collect()
    }
}

pub fn authorization(request: &Request) -> Option<String> {
    request
        .headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

pub fn profile_json(username: &str, coins: i64) -> Value {
    json!({
        "username": username,
        "xp": 120,
        "level": 3,
        "coins": coins,
        "achievements": {"first_win": true, "perfect_round": false}
    })
}
