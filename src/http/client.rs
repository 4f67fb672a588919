//! Low-level HTTP client — `GameHttp`.
//!
//! This is the only place that builds headers, parses response bodies and
//! classifies errors. Sub-clients call [`GameHttp::get`] / [`GameHttp::post`]
//! (typed) or [`GameHttp::send`] (raw JSON payload).
//!
//! Pipeline per request:
//! 1. Resolve the API base, failing with [`HttpError::Config`] when unset.
//! 2. `Content-Type: application/json` + caller headers (caller wins), then the
//!    bearer token from the [`SessionStore`] if one is stored. Callers can never
//!    set `Authorization` themselves.
//! 3. `204 No Content` → `{"ok": true}`, body ignored.
//! 4. Body parsed as JSON; unparseable bodies become "no payload".
//! 5. Non-2xx → [`HttpError::Api`]; 2xx → the payload (`null` when absent).
//!
//! One attempt per call. There is no retry layer.

use crate::error::{ApiError, HttpError, SdkError};
use crate::session::SessionStore;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

/// Per-request options: method, pre-serialized body, extra headers.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub method: Method,
    pub body: Option<String>,
    pub headers: HeaderMap,
}

impl RequestOptions {
    pub fn get() -> Self {
        Self::default()
    }

    pub fn post_json<B: Serialize + ?Sized>(body: &B) -> Result<Self, serde_json::Error> {
        Ok(Self {
            method: Method::POST,
            body: Some(serde_json::to_string(body)?),
            headers: HeaderMap::new(),
        })
    }

    pub fn header(mut self, name: reqwest::header::HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }
}

/// Low-level HTTP client for the Stratdots REST API.
#[derive(Clone)]
pub struct GameHttp {
    base_url: Option<String>,
    client: Client,
    session: SessionStore,
}

impl GameHttp {
    /// `base_url` may be absent; every request then fails with
    /// [`HttpError::Config`] instead of construction failing.
    pub fn new(
        base_url: Option<&str>,
        session: SessionStore,
        timeout: Option<Duration>,
    ) -> Result<Self, HttpError> {
        #[allow(unused_mut)]
        let mut builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        {
            if let Some(timeout) = timeout {
                builder = builder.timeout(timeout);
            }
            builder = builder.pool_max_idle_per_host(10);
        }
        #[cfg(target_arch = "wasm32")]
        let _ = timeout;

        let client = builder
            .build()
            .map_err(|e| HttpError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            base_url: base_url
                .map(|b| b.trim().trim_end_matches('/').to_string())
                .filter(|b| !b.is_empty()),
            client,
            session,
        })
    }

    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    // ── Typed helpers ────────────────────────────────────────────────────

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, SdkError> {
        let payload = self.send(path, RequestOptions::get()).await?;
        decode(payload)
    }

    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, SdkError> {
        let payload = self.send(path, RequestOptions::post_json(body)?).await?;
        decode(payload)
    }

    // ── Pipeline ─────────────────────────────────────────────────────────

    /// Send one request and normalize the outcome.
    pub async fn send(&self, path: &str, options: RequestOptions) -> Result<Value, HttpError> {
        let base = self
            .base_url
            .as_deref()
            .ok_or_else(|| HttpError::Config("API base not configured".to_string()))?;
        let url = format!("{}{}", base, path);
        let headers = self.build_headers(&options.headers)?;

        let mut req = self
            .client
            .request(options.method.clone(), &url)
            .headers(headers);
        if let Some(body) = options.body {
            req = req.body(body);
        }

        let resp = req.send().await?;
        let status = resp.status();
        tracing::debug!(
            method = %options.method,
            path,
            status = status.as_u16(),
            "api response"
        );

        if status == StatusCode::NO_CONTENT {
            return Ok(serde_json::json!({ "ok": true }));
        }

        let payload = match resp.bytes().await {
            Ok(bytes) => serde_json::from_slice::<Value>(&bytes).ok(),
            Err(e) => {
                tracing::debug!(path, error = %e, "failed to read response body");
                None
            }
        };

        if !status.is_success() {
            return Err(ApiError::new(status.as_u16(), payload).into());
        }

        Ok(payload.unwrap_or(Value::Null))
    }

    fn build_headers(&self, extra: &HeaderMap) -> Result<HeaderMap, HttpError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        for name in extra.keys() {
            headers.remove(name);
        }
        for (name, value) in extra.iter() {
            if name != AUTHORIZATION {
                headers.append(name.clone(), value.clone());
            }
        }

        // Read at send time: the token may have changed since the last request.
        let token = self.session.get_token();
        if !token.is_empty() {
            let mut value = HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|_| HttpError::Transport("Stored token is not a valid header value".to_string()))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        Ok(headers)
    }
}

/// Decode a normalized payload into a wire type. `null` decodes as `{}` so
/// tolerant wire structs fall back to their defaults.
fn decode<T: DeserializeOwned>(payload: Value) -> Result<T, SdkError> {
    let payload = if payload.is_null() {
        Value::Object(serde_json::Map::new())
    } else {
        payload
    };
    Ok(serde_json::from_value(payload)?)
}

impl std::fmt::Debug for GameHttp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameHttp")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}
