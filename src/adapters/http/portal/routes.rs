//! HTTP routes for client-portal endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use crate::adapters::http::state::AppState;

use super::handlers::{
    add_chat_message, add_document, add_meeting, add_podcast, add_scope_item,
    add_timeline_event, create_service, delete_service, get_podcast, get_service,
    list_podcasts, list_services, update_service,
};

/// Creates the client-portal router.
pub fn portal_routes(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/client-portal/services",
            get(list_services).post(create_service),
        )
        .route(
            "/api/client-portal/services/:id",
            get(get_service).put(update_service).delete(delete_service),
        )
        .route("/api/client-portal/services/:id/chat", post(add_chat_message))
        .route("/api/client-portal/services/:id/meetings", post(add_meeting))
        .route("/api/client-portal/services/:id/documents", post(add_document))
        .route("/api/client-portal/services/:id/scope", post(add_scope_item))
        .route(
            "/api/client-portal/services/:id/timeline",
            post(add_timeline_event),
        )
        .route(
            "/api/client-portal/podcasts",
            get(list_podcasts).post(add_podcast),
        )
        .route("/api/client-portal/podcasts/:id", get(get_podcast))
        .with_state(state)
}
