//! HTTP handlers for mentorship endpoints.
//!
//! Every mentorship leaves this layer with its `client_name` resolved.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{path_id, ApiError, SuccessResponse};
use crate::adapters::http::extract::ApiJson;
use crate::adapters::http::state::AppState;
use crate::application::handlers::mentorship::{DeleteMentorshipCommand, GetMentorshipQuery};
use crate::domain::foundation::MentorshipId;

use super::dto::{CreateMentorshipRequest, ListMentorshipsParams, UpdateMentorshipRequest};

const RESOURCE: &str = "Mentorship";

/// GET /api/mentorships - Newest first
pub async fn list_mentorships(
    State(state): State<AppState>,
    Query(params): Query<ListMentorshipsParams>,
) -> Result<Response, ApiError> {
    let mentorships = state
        .list_mentorships_handler()
        .handle(params.into())
        .await
        .map_err(|e| state.reject(e))?;
    Ok(Json(mentorships).into_response())
}

/// GET /api/mentorships/:id
pub async fn get_mentorship(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let mentorship_id: MentorshipId = path_id(RESOURCE, &id)?;
    let view = state
        .get_mentorship_handler()
        .handle(GetMentorshipQuery { mentorship_id })
        .await
        .map_err(|e| state.reject(e))?
        .ok_or_else(|| ApiError::not_found(RESOURCE, id))?;
    Ok(Json(view).into_response())
}

/// POST /api/mentorships
pub async fn create_mentorship(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CreateMentorshipRequest>,
) -> Result<Response, ApiError> {
    let view = state
        .create_mentorship_handler()
        .handle(req.into())
        .await
        .map_err(|e| state.reject(e))?;
    Ok((StatusCode::CREATED, Json(view)).into_response())
}

/// PUT /api/mentorships/:id
pub async fn update_mentorship(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(req): ApiJson<UpdateMentorshipRequest>,
) -> Result<Response, ApiError> {
    let mentorship_id: MentorshipId = path_id(RESOURCE, &id)?;
    let view = state
        .update_mentorship_handler()
        .handle(req.into_command(mentorship_id))
        .await
        .map_err(|e| state.reject(e))?
        .ok_or_else(|| ApiError::not_found(RESOURCE, id))?;
    Ok(Json(view).into_response())
}

/// DELETE /api/mentorships/:id
pub async fn delete_mentorship(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let mentorship_id: MentorshipId = path_id(RESOURCE, &id)?;
    let deleted = state
        .delete_mentorship_handler()
        .handle(DeleteMentorshipCommand { mentorship_id })
        .await
        .map_err(|e| state.reject(e))?;
    if !deleted {
        return Err(ApiError::not_found(RESOURCE, id));
    }
    Ok(Json(SuccessResponse::ok()).into_response())
}
