//! HTTP routes for export endpoints.

use axum::{routing::post, Router};

use crate::adapters::http::state::AppState;

use super::handlers::export_clients;

/// Creates the export router.
pub fn export_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/export/clients", post(export_clients))
        .with_state(state)
}
