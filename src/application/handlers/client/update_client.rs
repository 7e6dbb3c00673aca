//! UpdateClientHandler - Command handler for partial client updates.

use std::sync::Arc;

use crate::application::CommandGate;
use crate::domain::client::Client;
use crate::domain::foundation::{ClientId, ClientStatus, DomainError, InputPolicy};
use crate::ports::ClientRepository;

/// Partial update. `None` leaves a field untouched; it never clears it.
#[derive(Debug, Clone)]
pub struct UpdateClientCommand {
    pub client_id: ClientId,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub status: Option<String>,
    pub notes: Option<String>,
}

impl UpdateClientCommand {
    pub fn new(client_id: ClientId) -> Self {
        Self {
            client_id,
            name: None,
            email: None,
            phone: None,
            status: None,
            notes: None,
        }
    }
}

/// Handler for client updates. Returns `None` for unknown ids.
pub struct UpdateClientHandler {
    clients: Arc<dyn ClientRepository>,
    gate: CommandGate,
    policy: InputPolicy,
}

impl UpdateClientHandler {
    pub fn new(clients: Arc<dyn ClientRepository>, gate: CommandGate, policy: InputPolicy) -> Self {
        Self {
            clients,
            gate,
            policy,
        }
    }

    pub async fn handle(&self, cmd: UpdateClientCommand) -> Result<Option<Client>, DomainError> {
        let status = match cmd.status.as_deref() {
            Some(label) => self.policy.status_on_update::<ClientStatus>(label)?,
            None => None,
        };

        let _guard = self.gate.enter().await;
        let Some(mut client) = self.clients.find_by_id(cmd.client_id).await? else {
            return Ok(None);
        };

        if let Some(name) = cmd.name {
            client.set_name(name);
        }
        if let Some(email) = cmd.email {
            client.set_email(email);
        }
        if let Some(phone) = cmd.phone {
            client.set_phone(phone);
        }
        if let Some(status) = status {
            client.set_status(status);
        }
        if let Some(notes) = cmd.notes {
            client.set_notes(notes);
        }
        client.touch();

        self.clients.update(&client).await?;
        tracing::info!(client_id = %client.id(), "Client updated");
        Ok(Some(client))
    }
}
