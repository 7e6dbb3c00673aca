//! HTTP routes for dashboard endpoints.

use axum::routing::get;
use axum::Router;

use crate::adapters::http::state::AppState;

use super::handlers::get_dashboard_stats;

/// Creates the dashboard router.
pub fn dashboard_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/dashboard", get(get_dashboard_stats))
        .with_state(state)
}
