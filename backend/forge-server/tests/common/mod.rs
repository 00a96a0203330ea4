#![allow(dead_code)]

//! Test infrastructure for forge-server API tests

use forge_server::{AppState, HttpSink, IdentitySink, build_router};

use std::sync::Arc;

use axum::{
    body::Body,
    http::{HeaderMap, Method, Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

pub const TOKEN_SHA256: &str = "9f86d081884c7d659a2feaa0c55ad015a3bf4f1b2b0b822cd15d6c15b0f00a08";

/// An address nothing is listening on
pub fn unused_local_addr() -> std::net::SocketAddr {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap()
}

/// AppState whose sink is an HTTP webhook at `url`
pub fn state_with_sink(url: String) -> AppState {
    AppState::new(Some(Arc::new(HttpSink::new(url)) as Arc<dyn IdentitySink>))
}

pub fn state_without_sink() -> AppState {
    AppState::new(None)
}

pub fn valid_submission() -> Value {
    json!({
        "schema_version": "v1",
        "captured_at_utc": "2026-01-01T12:00:00.000Z",
        "consent": true,
        "identity": {
            "email": "  Node@Example.COM ",
            "handle": " null ",
            "token_sha256": TOKEN_SHA256
        }
    })
}

/// Send one request through a fresh router
pub async fn send(
    state: AppState,
    method: Method,
    uri: &str,
    body: impl Into<Body>,
) -> (StatusCode, HeaderMap, Value) {
    let response = build_router(state)
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .header("content-type", "application/json")
                .body(body.into())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };

    (status, headers, json)
}

pub async fn post_identity(
    state: AppState,
    body: impl Into<Body>,
) -> (StatusCode, HeaderMap, Value) {
    send(state, Method::POST, "/api/identity", body).await
}
