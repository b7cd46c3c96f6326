//! API module
//!
//! HTTP API endpoints and middleware.

pub mod middleware;
pub mod routes;

use axum::{middleware as axum_middleware, routing::get, Router};
use tower_http::trace::TraceLayer;

pub use routes::{create_router, AppState};

/// Build the application router
pub fn build_router(state: AppState) -> Router {
    // Note: Axum layers are applied in reverse order (last added = first executed)
    // Order: context -> logging -> handler
    let api_router = create_router()
        .layer(axum_middleware::from_fn(middleware::logging_middleware))
        .layer(axum_middleware::from_fn(middleware::context_middleware));

    Router::new()
        .route("/health", get(health_check))
        .nest("/api/v1", api_router)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
