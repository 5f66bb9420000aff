//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use arsroller_api::state::{AppState, SharedRng};
use arsroller_test_support::SequenceRng;

/// Botch dice limit used across integration tests.
pub const MAX_BOTCH_DICE: u32 = 20;

/// Build the full app router with an empty `SequenceRng`, for requests that
/// must not draw any dice.
pub fn build_test_app() -> Router {
    build_test_app_with_rng(SequenceRng::new(vec![]))
}

/// Build the full app router with a custom `SequenceRng` for tests that need
/// deterministic dice rolls.
pub fn build_test_app_with_rng(rng: SequenceRng) -> Router {
    let rng: SharedRng = Arc::new(Mutex::new(rng));
    arsroller_api::build_app(AppState::new(rng, MAX_BOTCH_DICE))
}

/// Send a POST request with a JSON body and return the response.
pub async fn post_json(
    app: Router,
    uri: &str,
    body: &serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap();

    send(app, request).await
}

/// Send a GET request and return the response.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    send(app, request).await
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}
