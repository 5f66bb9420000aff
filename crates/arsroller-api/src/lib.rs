//! Arsroller API — HTTP surface for the Ars Magica die roller.
//!
//! Exposes the registered roll commands over JSON and renders each result
//! as the Markdown reply a chat client would post.

use axum::Router;

pub mod config;
pub mod error;
pub mod reply;
pub mod routes;
pub mod state;

/// Builds the application router without middleware layers.
pub fn build_app(state: state::AppState) -> Router {
    Router::new()
        .merge(routes::health::router())
        .nest("/api/v1/rolls", routes::rolls::router())
        .with_state(state)
}
