//! HTTP routes for mentorship endpoints.

use axum::{routing::get, Router};

use crate::adapters::http::state::AppState;

use super::handlers::{
    create_mentorship, delete_mentorship, get_mentorship, list_mentorships, update_mentorship,
};

/// Creates the mentorship router.
pub fn mentorship_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/mentorships", get(list_mentorships).post(create_mentorship))
        .route(
            "/api/mentorships/:id",
            get(get_mentorship)
                .put(update_mentorship)
                .delete(delete_mentorship),
        )
        .with_state(state)
}
