//! HTTP routes for client endpoints.

use axum::{routing::get, Router};

use crate::adapters::http::state::AppState;

use super::handlers::{create_client, delete_client, get_client, list_clients, update_client};

/// Creates the client router.
pub fn client_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/clients", get(list_clients).post(create_client))
        .route(
            "/api/clients/:id",
            get(get_client).put(update_client).delete(delete_client),
        )
        .with_state(state)
}
