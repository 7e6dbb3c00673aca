//! HTTP routes for initiative endpoints.

use axum::{routing::get, Router};

use crate::adapters::http::state::AppState;

use super::handlers::{
    create_initiative, delete_initiative, get_initiative, list_categories, list_initiatives,
    update_initiative,
};

/// Creates the initiative router.
pub fn initiative_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/initiative-categories", get(list_categories))
        .route("/api/initiatives", get(list_initiatives).post(create_initiative))
        .route(
            "/api/initiatives/:id",
            get(get_initiative)
                .put(update_initiative)
                .delete(delete_initiative),
        )
        .with_state(state)
}
