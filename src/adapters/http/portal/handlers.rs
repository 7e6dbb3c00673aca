//! HTTP handlers for client-portal endpoints.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{path_id, ApiError, SuccessResponse};
use crate::adapters::http::extract::ApiJson;
use crate::adapters::http::state::AppState;
use crate::application::handlers::portal::{
    DeleteServiceCommand, GetPodcastQuery, GetServiceQuery,
};
use crate::domain::foundation::{EpisodeId, ServiceId};

use super::dto::{
    AddChatMessageRequest, AddDocumentRequest, AddMeetingRequest, AddPodcastRequest,
    AddScopeItemRequest, AddTimelineEventRequest, CreateServiceRequest, ListServicesParams,
    UpdateServiceRequest,
};

const SERVICE: &str = "Service";
const EPISODE: &str = "Podcast episode";

// ════════════════════════════════════════════════════════════════════════════
// Services
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/client-portal/services - Most recently updated first
pub async fn list_services(
    State(state): State<AppState>,
    Query(params): Query<ListServicesParams>,
) -> Result<Response, ApiError> {
    let services = state
        .list_services_handler()
        .handle(params.into())
        .await
        .map_err(|e| state.reject(e))?;
    Ok(Json(services).into_response())
}

/// GET /api/client-portal/services/:id
pub async fn get_service(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let service_id: ServiceId = path_id(SERVICE, &id)?;
    let service = state
        .get_service_handler()
        .handle(GetServiceQuery { service_id })
        .await
        .map_err(|e| state.reject(e))?
        .ok_or_else(|| ApiError::not_found(SERVICE, id))?;
    Ok(Json(service).into_response())
}

/// POST /api/client-portal/services
pub async fn create_service(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CreateServiceRequest>,
) -> Result<Response, ApiError> {
    let service = state
        .create_service_handler()
        .handle(req.into())
        .await
        .map_err(|e| state.reject(e))?;
    Ok((StatusCode::CREATED, Json(service)).into_response())
}

/// PUT /api/client-portal/services/:id
pub async fn update_service(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(req): ApiJson<UpdateServiceRequest>,
) -> Result<Response, ApiError> {
    let service_id: ServiceId = path_id(SERVICE, &id)?;
    let service = state
        .update_service_handler()
        .handle(req.into_command(service_id))
        .await
        .map_err(|e| state.reject(e))?
        .ok_or_else(|| ApiError::not_found(SERVICE, id))?;
    Ok(Json(service).into_response())
}

/// DELETE /api/client-portal/services/:id
pub async fn delete_service(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let service_id: ServiceId = path_id(SERVICE, &id)?;
    let deleted = state
        .delete_service_handler()
        .handle(DeleteServiceCommand { service_id })
        .await
        .map_err(|e| state.reject(e))?;
    if !deleted {
        return Err(ApiError::not_found(SERVICE, id));
    }
    Ok(Json(SuccessResponse::ok()).into_response())
}

// ════════════════════════════════════════════════════════════════════════════
// Service records
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/client-portal/services/:id/chat
pub async fn add_chat_message(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(req): ApiJson<AddChatMessageRequest>,
) -> Result<Response, ApiError> {
    let service_id: ServiceId = path_id(SERVICE, &id)?;
    let message = state
        .add_chat_message_handler()
        .handle(req.into_command(service_id))
        .await
        .map_err(|e| state.reject(e))?
        .ok_or_else(|| ApiError::not_found(SERVICE, id))?;
    Ok((StatusCode::CREATED, Json(message)).into_response())
}

/// POST /api/client-portal/services/:id/meetings
pub async fn add_meeting(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(req): ApiJson<AddMeetingRequest>,
) -> Result<Response, ApiError> {
    let service_id: ServiceId = path_id(SERVICE, &id)?;
    let meeting = state
        .add_meeting_handler()
        .handle(req.into_command(service_id))
        .await
        .map_err(|e| state.reject(e))?
        .ok_or_else(|| ApiError::not_found(SERVICE, id))?;
    Ok((StatusCode::CREATED, Json(meeting)).into_response())
}

/// POST /api/client-portal/services/:id/documents
pub async fn add_document(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(req): ApiJson<AddDocumentRequest>,
) -> Result<Response, ApiError> {
    let service_id: ServiceId = path_id(SERVICE, &id)?;
    let document = state
        .add_document_handler()
        .handle(req.into_command(service_id))
        .await
        .map_err(|e| state.reject(e))?
        .ok_or_else(|| ApiError::not_found(SERVICE, id))?;
    Ok((StatusCode::CREATED, Json(document)).into_response())
}

/// POST /api/client-portal/services/:id/scope
pub async fn add_scope_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(req): ApiJson<AddScopeItemRequest>,
) -> Result<Response, ApiError> {
    let service_id: ServiceId = path_id(SERVICE, &id)?;
    let item = state
        .add_scope_item_handler()
        .handle(req.into_command(service_id))
        .await
        .map_err(|e| state.reject(e))?
        .ok_or_else(|| ApiError::not_found(SERVICE, id))?;
    Ok((StatusCode::CREATED, Json(item)).into_response())
}

/// POST /api/client-portal/services/:id/timeline
pub async fn add_timeline_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(req): ApiJson<AddTimelineEventRequest>,
) -> Result<Response, ApiError> {
    let service_id: ServiceId = path_id(SERVICE, &id)?;
    let event = state
        .add_timeline_event_handler()
        .handle(req.into_command(service_id))
        .await
        .map_err(|e| state.reject(e))?
        .ok_or_else(|| ApiError::not_found(SERVICE, id))?;
    Ok((StatusCode::CREATED, Json(event)).into_response())
}

// ════════════════════════════════════════════════════════════════════════════
// Podcasts
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/client-portal/podcasts - Newest date first
pub async fn list_podcasts(State(state): State<AppState>) -> Result<Response, ApiError> {
    let episodes = state
        .list_podcasts_handler()
        .handle()
        .await
        .map_err(|e| state.reject(e))?;
    Ok(Json(episodes).into_response())
}

/// GET /api/client-portal/podcasts/:id
pub async fn get_podcast(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let episode_id: EpisodeId = path_id(EPISODE, &id)?;
    let episode = state
        .get_podcast_handler()
        .handle(GetPodcastQuery { episode_id })
        .await
        .map_err(|e| state.reject(e))?
        .ok_or_else(|| ApiError::not_found(EPISODE, id))?;
    Ok(Json(episode).into_response())
}

/// POST /api/client-portal/podcasts
pub async fn add_podcast(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<AddPodcastRequest>,
) -> Result<Response, ApiError> {
    let episode = state
        .add_podcast_handler()
        .handle(req.into())
        .await
        .map_err(|e| state.reject(e))?;
    Ok((StatusCode::CREATED, Json(episode)).into_response())
}
