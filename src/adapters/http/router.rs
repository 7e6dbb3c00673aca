//! Top-level router: every area's routes plus the shared middleware.

use axum::{http::HeaderValue, routing::get, Json, Router};
use serde_json::{json, Value};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

use super::client::client_routes;
use super::dashboard::dashboard_routes;
use super::export::export_routes;
use super::initiative::initiative_routes;
use super::mentorship::mentorship_routes;
use super::portal::portal_routes;
use super::state::AppState;

/// GET /health - Liveness probe
async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Every API route, without middleware.
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(client_routes(state.clone()))
        .merge(initiative_routes(state.clone()))
        .merge(mentorship_routes(state.clone()))
        .merge(portal_routes(state.clone()))
        .merge(export_routes(state.clone()))
        .merge(dashboard_routes(state))
}

/// The served application: routes plus tracing, CORS and a request timeout.
pub fn app(state: AppState, server: &ServerConfig) -> Router {
    api_router(state)
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(cors_layer(&server.allowed_origins()))
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        return CorsLayer::permissive();
    }
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "Ignoring unparseable CORS origin");
                None
            }
        })
        .collect();
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods(Any)
        .allow_headers(Any)
}
