//! HTTP handlers for client endpoints.

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
use crate::application::handlers::client::{
    DeleteClientCommand, GetClientQuery, ListClientsQuery,
};
use crate::domain::foundation::ClientId;

use super::dto::{CreateClientRequest, ListClientsParams, UpdateClientRequest};

const RESOURCE: &str = "Client";

/// GET /api/clients - List clients, optionally by status
pub async fn list_clients(
    State(state): State<AppState>,
    Query(params): Query<ListClientsParams>,
) -> Result<Response, ApiError> {
    let query = ListClientsQuery {
        status: blank_as_none(params.status),
    };
    let clients = state
        .list_clients_handler()
        .handle(query)
        .await
        .map_err(|e| state.reject(e))?;
    Ok(Json(clients).into_response())
}

/// GET /api/clients/:id - Get one client
pub async fn get_client(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let client_id: ClientId = path_id(RESOURCE, &id)?;
    let client = state
        .get_client_handler()
        .handle(GetClientQuery { client_id })
        .await
        .map_err(|e| state.reject(e))?
        .ok_or_else(|| ApiError::not_found(RESOURCE, id))?;
    Ok(Json(client).into_response())
}

/// POST /api/clients - Create a client
pub async fn create_client(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CreateClientRequest>,
) -> Result<Response, ApiError> {
    let client = state
        .create_client_handler()
        .handle(req.into())
        .await
        .map_err(|e| state.reject(e))?;
    Ok((StatusCode::CREATED, Json(client)).into_response())
}

/// PUT /api/clients/:id - Update a client
pub async fn update_client(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(req): ApiJson<UpdateClientRequest>,
) -> Result<Response, ApiError> {
    let client_id: ClientId = path_id(RESOURCE, &id)?;
    let client = state
        .update_client_handler()
        .handle(req.into_command(client_id))
        .await
        .map_err(|e| state.reject(e))?
        .ok_or_else(|| ApiError::not_found(RESOURCE, id))?;
    Ok(Json(client).into_response())
}

/// DELETE /api/clients/:id - Delete a client
pub async fn delete_client(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let client_id: ClientId = path_id(RESOURCE, &id)?;
    let deleted = state
        .delete_client_handler()
        .handle(DeleteClientCommand { client_id })
        .await
        .map_err(|e| state.reject(e))?;
    if !deleted {
        return Err(ApiError::not_found(RESOURCE, id));
    }
    Ok(Json(SuccessResponse::ok()).into_response())
}
