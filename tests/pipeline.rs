//! Integration tests for the request pipeline (`GameHttp`).
//!
//! Every test runs against a local `wiremock` server; no network access needed.

mod common;

use common::{authorization, Harness};
use serde_json::{json, Value};
use stratdots_client::prelude::*;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_no_token_sends_no_authorization_header() {
    let h = Harness::new(None).await;
    Mock::given(method("GET"))
        .and(path("/api/shop/items"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": []})))
        .expect(1)
        .mount(&h.server)
        .await;

    h.client
        .http()
        .send("/api/shop/items", RequestOptions::get())
        .await
        .unwrap();

    let requests = h.requests().await;
    assert_eq!(requests.len(), 1);
    assert_eq!(authorization(&requests[0]), None);
    assert_eq!(
        requests[0].headers.get("content-type").unwrap(),
        "application/json"
    );
}

#[tokio::test]
async fn test_stored_token_is_sent_as_bearer() {
    let h = Harness::new(Some("tok-1")).await;
    Mock::given(method("GET"))
        .and(path("/api/inventory"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"coins": 1})))
        .mount(&h.server)
        .await;

    h.client
        .http()
        .send("/api/inventory", RequestOptions::get())
        .await
        .unwrap();

    let requests = h.requests().await;
    assert_eq!(authorization(&requests[0]).as_deref(), Some("Bearer tok-1"));
}

#[tokio::test]
async fn test_token_is_read_per_request() {
    let h = Harness::new(None).await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&h.server)
        .await;

    h.client.http().send("/api/profile", RequestOptions::get()).await.unwrap();
    h.client.session().set_token("fresh");
    h.client.http().send("/api/profile", RequestOptions::get()).await.unwrap();
    h.client.session().clear();
    h.client.http().send("/api/profile", RequestOptions::get()).await.unwrap();

    let auth: Vec<_> = h.requests().await.iter().map(authorization).collect();
    assert_eq!(auth, [None, Some("Bearer fresh".to_string()), None]);
}

#[tokio::test]
async fn test_no_content_is_canonical_ok() {
    let h = Harness::new(None).await;
    Mock::given(method("POST"))
        .and(path("/api/logout"))
        .respond_with(ResponseTemplate::new(204).set_body_string("{\"ignored\": true}"))
        .mount(&h.server)
        .await;

    let payload = h
        .client
        .http()
        .send(
            "/api/logout",
            RequestOptions::post_json(&json!({"token": ""})).unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(payload, json!({"ok": true}));
}

#[tokio::test]
async fn test_error_field_becomes_message() {
    let h = Harness::new(None).await;
    Mock::given(method("POST"))
        .and(path("/api/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"error": "bad password"})))
        .mount(&h.server)
        .await;

    let err = h
        .client
        .http()
        .send(
            "/api/login",
            RequestOptions::post_json(&json!({"username": "a", "password": "b"})).unwrap(),
        )
        .await
        .unwrap_err();

    match err {
        HttpError::Api(api) => {
            assert_eq!(api.message, "bad password");
            assert_eq!(api.http_status, 401);
            assert_eq!(api.payload, Some(json!({"error": "bad password"})));
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unparseable_error_body_uses_status() {
    let h = Harness::new(None).await;
    Mock::given(method("GET"))
        .and(path("/api/inventory"))
        .respond_with(ResponseTemplate::new(401).set_body_string("<html>denied</html>"))
        .mount(&h.server)
        .await;

    let err = h
        .client
        .http()
        .send("/api/inventory", RequestOptions::get())
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "HTTP 401");
    match err {
        HttpError::Api(api) => {
            assert!(api.payload.is_none());
            assert!(api.is_unauthorized());
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_success_without_json_is_null() {
    let h = Harness::new(None).await;
    Mock::given(method("POST"))
        .and(path("/api/shop/buy"))
        .respond_with(ResponseTemplate::new(200).set_body_string("OK"))
        .mount(&h.server)
        .await;

    let payload = h
        .client
        .http()
        .send(
            "/api/shop/buy",
            RequestOptions::post_json(&json!({"itemId": "x"})).unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(payload, Value::Null);
}

#[tokio::test]
async fn test_unreachable_server_is_transport_error() {
    // Port 1 is reserved; nothing listens there.
    let client = GameClient::builder()
        .api_base("http://127.0.0.1:1")
        .build()
        .unwrap();

    let err = client
        .http()
        .send("/api/shop/items", RequestOptions::get())
        .await
        .unwrap_err();

    assert!(matches!(err, HttpError::Transport(_)), "got {err:?}");
}
