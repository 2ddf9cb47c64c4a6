#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt; // for oneshot

use webservice::api::{apply_layers, create_router, AppState};
use webservice::storage::{CharacterStore, MemoryStore, NullStore};

/// Router over the store that retains nothing
pub fn stub_app() -> Router {
    app_with(Arc::new(NullStore))
}

/// Router over a fresh in-memory store
pub fn memory_app() -> Router {
    app_with(Arc::new(MemoryStore::new()))
}

pub fn app_with(store: Arc<dyn CharacterStore>) -> Router {
    apply_layers(create_router(AppState::new(store)), false)
}

pub fn aragorn() -> Value {
    json!({
        "id": "60d5ecb74b24c72b8c8b4567",
        "name": "Aragorn",
        "race": "Human",
        "class": "Fighter",
        "level": 5,
        "createdAt": "2025-11-09T08:00:00Z",
        "updatedAt": "2025-11-09T08:00:00Z"
    })
}

/// Send a request with an optional JSON body and decode the JSON reply.
///
/// An empty reply decodes to `Value::Null`.
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let (content_type, body) = match body {
        Some(value) => (Some("application/json"), value.to_string()),
        None => (None, String::new()),
    };
    send_raw(app, method, uri, content_type, body).await
}

pub async fn send_raw(
    app: &Router,
    method: &str,
    uri: &str,
    content_type: Option<&str>,
    body: impl Into<String>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(content_type) = content_type {
        builder = builder.header("content-type", content_type);
    }

    let response = app
        .clone()
        .oneshot(builder.body(Body::from(body.into())).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|err| {
            panic!(
                "response is not JSON ({err}): status={} body={}",
                status,
                String::from_utf8_lossy(&bytes)
            )
        })
    };

    (status, value)
}
