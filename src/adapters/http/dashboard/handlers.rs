//! HTTP handlers for dashboard endpoints.

use axum::{extract::State, Json};

use crate::adapters::http::error::ApiError;
use crate::adapters::http::state::AppState;
use crate::application::handlers::dashboard::DashboardStats;

/// GET /api/dashboard - Headline counts
pub async fn get_dashboard_stats(
    State(state): State<AppState>,
) -> Result<Json<DashboardStats>, ApiError> {
    let stats = state
        .dashboard_stats_handler()
        .handle()
        .await
        .map_err(|e| state.reject(e))?;
    Ok(Json(stats))
}
