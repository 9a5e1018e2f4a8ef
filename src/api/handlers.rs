//! API Handlers
//!
//! HTTP request handlers for each lookup server endpoint.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::client::CatalogClient;
use crate::error::Result;
use crate::models::{HealthResponse, Problem, StatsResponse};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Shared catalog client
    pub client: Arc<CatalogClient>,
}

impl AppState {
    pub fn new(client: CatalogClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

/// Handler for GET /problems/slug/:slug
pub async fn slug_handler(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Problem>> {
    let problem = state.client.resolve_by_slug(&slug).await?;
    Ok(Json(problem))
}

/// Handler for GET /problems/id/:id
pub async fn id_handler(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<Problem>> {
    let problem = state.client.resolve_by_id(id).await?;
    Ok(Json(problem))
}

/// Handler for GET /problems/title/:title
pub async fn title_handler(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> Result<Json<Problem>> {
    let problem = state.client.resolve_by_title(&title).await?;
    Ok(Json(problem))
}

/// Handler for GET /problems/daily
pub async fn daily_handler(State(state): State<AppState>) -> Result<Json<Problem>> {
    let problem = state.client.resolve_daily().await?;
    Ok(Json(problem))
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let stats = state.client.cache_stats().await;
    let running = state.client.is_running().await;

    Json(StatsResponse::new(&stats, running))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::test_support::{landing_response, problem_response, Route, ScriptedTransport};

    async fn state_with_token() -> AppState {
        let transport = Arc::new(ScriptedTransport::new());
        transport.respond(Route::Landing, landing_response("tok"));
        transport.respond(Route::ProblemBySlug, problem_response(1, "Two Sum", "two-sum"));

        let client = CatalogClient::with_transport(Config::default(), transport);
        client.refresh_token().await.unwrap();
        AppState::new(client)
    }

    #[tokio::test]
    async fn test_slug_handler() {
        let state = state_with_token().await;

        let response = slug_handler(State(state), Path("two-sum".to_string()))
            .await
            .unwrap();
        assert_eq!(response.id, 1);
        assert_eq!(response.title, "Two Sum");
    }

    #[tokio::test]
    async fn test_title_handler_uninitialized() {
        let state = state_with_token().await;

        let result = title_handler(State(state), Path("Two Sum".to_string())).await;
        assert!(result.unwrap_err().is_system());
    }

    #[tokio::test]
    async fn test_stats_handler() {
        let state = state_with_token().await;
        let fetched = slug_handler(State(state.clone()), Path("two-sum".to_string()))
            .await
            .unwrap();
        assert_eq!(fetched.title_slug, "two-sum");

        let response = stats_handler(State(state)).await;
        assert_eq!(response.misses, 1);
        assert_eq!(response.total_entries, 1);
        assert!(!response.running);
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.status, "healthy");
    }
}
