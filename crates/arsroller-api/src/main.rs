//! Arsroller API server entry point.

use std::error::Error;

use arsroller_api::config::ServerConfig;
use arsroller_api::error::AppError;
use arsroller_api::state::AppState;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    tracing::info!("Starting Ars Magica die roller API server");

    // Read configuration from environment.
    let config = ServerConfig::from_env()?;
    if let Some(seed) = config.seed {
        tracing::info!(seed, "using seeded die source");
    }

    // Build application state.
    let app_state = AppState::from_config(&config);

    // Build router.
    // TODO: Replace CorsLayer::permissive() with restricted origins for production.
    let app = arsroller_api::build_app(app_state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    // Start server.
    let addr = config.socket_addr()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(AppError::Server)?;

    axum::serve(listener, app).await.map_err(AppError::Server)?;

    Ok(())
}
