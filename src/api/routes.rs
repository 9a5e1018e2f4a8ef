//! API Routes
//!
//! Configures the Axum router with all lookup server endpoints.

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    daily_handler, health_handler, id_handler, slug_handler, stats_handler, title_handler,
    AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Middleware
/// - CORS: Allows any origin for GET
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/problems/slug/:slug", get(slug_handler))
        .route("/problems/id/:id", get(id_handler))
        .route("/problems/title/:title", get(title_handler))
        .route("/problems/daily", get(daily_handler))
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
