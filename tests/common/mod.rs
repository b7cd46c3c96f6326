//! Common test utilities

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::util::ServiceExt;

use bank_management::api::{self, AppState};
use bank_management::domain::AccountId;
use bank_management::store::InMemoryAccountStore;

/// Account that exists in every test store
pub const EXISTING_ACCOUNT: &str = "1001";

/// Build the full application over an in-memory store
pub async fn setup_app() -> (Router, InMemoryAccountStore) {
    let store = InMemoryAccountStore::new();
    store.open_account(AccountId::new(EXISTING_ACCOUNT)).await;
    let app = api::build_router(AppState::new(Arc::new(store.clone())));
    (app, store)
}

/// POST a JSON body and return status and parsed response
#[allow(dead_code)]
pub async fn post_json(app: &Router, uri: &str, body: &Value) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(body).unwrap()))
        .unwrap();

    let response = app.clone().oneshot(req).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}
