//! HTTP handlers for initiative endpoints.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{path_id, ApiError, SuccessResponse};
use crate::adapters::http::extract::ApiJson;
use crate::adapters::http::params::blank_as_none;
use crate::adapters::http::state::AppState;
use crate::application::handlers::initiative::{
    DeleteInitiativeCommand, GetInitiativeQuery, ListInitiativesQuery,
};
use crate::domain::foundation::InitiativeId;
use crate::domain::initiative::InitiativeCategory;

use super::dto::{CreateInitiativeRequest, ListInitiativesParams, UpdateInitiativeRequest};

const RESOURCE: &str = "Initiative";

/// GET /api/initiative-categories - The closed category list
pub async fn list_categories() -> Json<Vec<&'static str>> {
    Json(InitiativeCategory::labels())
}

/// GET /api/initiatives - List initiatives, highest priority first
pub async fn list_initiatives(
    State(state): State<AppState>,
    Query(params): Query<ListInitiativesParams>,
) -> Result<Response, ApiError> {
    let query = ListInitiativesQuery {
        category: blank_as_none(params.category),
        status: blank_as_none(params.status),
    };
    let initiatives = state
        .list_initiatives_handler()
        .handle(query)
        .await
        .map_err(|e| state.reject(e))?;
    Ok(Json(initiatives).into_response())
}

/// GET /api/initiatives/:id
pub async fn get_initiative(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let initiative_id: InitiativeId = path_id(RESOURCE, &id)?;
    let initiative = state
        .get_initiative_handler()
        .handle(GetInitiativeQuery { initiative_id })
        .await
        .map_err(|e| state.reject(e))?
        .ok_or_else(|| ApiError::not_found(RESOURCE, id))?;
    Ok(Json(initiative).into_response())
}

/// POST /api/initiatives
pub async fn create_initiative(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CreateInitiativeRequest>,
) -> Result<Response, ApiError> {
    let initiative = state
        .create_initiative_handler()
        .handle(req.into())
        .await
        .map_err(|e| state.reject(e))?;
    Ok((StatusCode::CREATED, Json(initiative)).into_response())
}

/// PUT /api/initiatives/:id
pub async fn update_initiative(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(req): ApiJson<UpdateInitiativeRequest>,
) -> Result<Response, ApiError> {
    let initiative_id: InitiativeId = path_id(RESOURCE, &id)?;
    let initiative = state
        .update_initiative_handler()
        .handle(req.into_command(initiative_id))
        .await
        .map_err(|e| state.reject(e))?
        .ok_or_else(|| ApiError::not_found(RESOURCE, id))?;
    Ok(Json(initiative).into_response())
}

/// DELETE /api/initiatives/:id
pub async fn delete_initiative(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let initiative_id: InitiativeId = path_id(RESOURCE, &id)?;
    let deleted = state
        .delete_initiative_handler()
        .handle(DeleteInitiativeCommand { initiative_id })
        .await
        .map_err(|e| state.reject(e))?;
    if !deleted {
        return Err(ApiError::not_found(RESOURCE, id));
    }
    Ok(Json(SuccessResponse::ok()).into_response())
}
