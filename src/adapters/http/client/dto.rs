//! HTTP DTOs for client endpoints.
//!
//! Required fields are optional here so that a missing field is reported
//! by validation (400) rather than by JSON extraction.

use serde::Deserialize;

use crate::application::handlers::client::{CreateClientCommand, UpdateClientCommand};
use crate::domain::foundation::ClientId;

/// Request to create a client.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CreateClientRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub status: Option<String>,
    pub notes: Option<String>,
}

impl From<CreateClientRequest> for CreateClientCommand {
    fn from(req: CreateClientRequest) -> Self {
        Self {
            name: req.name.unwrap_or_default(),
            email: req.email.unwrap_or_default(),
            phone: req.phone.unwrap_or_default(),
            status: req.status,
            notes: req.notes.unwrap_or_default(),
        }
    }
}

/// Partial update. Absent fields are left alone.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpdateClientRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub status: Option<String>,
    pub notes: Option<String>,
}

impl UpdateClientRequest {
    pub fn into_command(self, client_id: ClientId) -> UpdateClientCommand {
        UpdateClientCommand {
            name: self.name,
            email: self.email,
            phone: self.phone,
            status: self.status,
            notes: self.notes,
            ..UpdateClientCommand::new(client_id)
        }
    }
}

/// Query parameters for listing clients.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListClientsParams {
    pub status: Option<String>,
}
