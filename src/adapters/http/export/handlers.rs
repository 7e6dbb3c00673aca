//! HTTP handlers for export endpoints.

use axum::{
    body::Bytes,
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};

use crate::adapters::http::error::ApiError;
use crate::adapters::http::state::AppState;
use crate::domain::foundation::DomainError;

use super::dto::ExportRequest;

/// POST /api/export/clients - Download every client as CSV or JSON
///
/// An empty or missing body exports CSV.
pub async fn export_clients(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let req: ExportRequest = if body.iter().all(u8::is_ascii_whitespace) {
        ExportRequest::default()
    } else {
        serde_json::from_slice(&body).map_err(|err| {
            state.reject(DomainError::validation("body", format!("Invalid JSON: {}", err)))
        })?
    };

    let file = state
        .export_clients_handler()
        .handle(req.into())
        .await
        .map_err(|e| state.reject(e))?;

    let disposition = format!("attachment; filename=\"{}\"", file.filename);
    Ok((
        [
            (header::CONTENT_TYPE, file.content_type),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        file.content,
    )
        .into_response())
}
