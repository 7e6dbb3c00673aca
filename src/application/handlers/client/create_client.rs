//! CreateClientHandler - Command handler for registering clients.

use std::sync::Arc;

use crate::application::CommandGate;
use crate::domain::client::{Client, NewClient};
use crate::domain::foundation::{ClientStatus, DomainError, InputPolicy};
use crate::ports::ClientRepository;

/// Command to register a client.
#[derive(Debug, Clone, Default)]
pub struct CreateClientCommand {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub status: Option<String>,
    pub notes: String,
}

/// Handler for registering clients.
pub struct CreateClientHandler {
    clients: Arc<dyn ClientRepository>,
    gate: CommandGate,
    policy: InputPolicy,
}

impl CreateClientHandler {
    pub fn new(clients: Arc<dyn ClientRepository>, gate: CommandGate, policy: InputPolicy) -> Self {
        Self {
            clients,
            gate,
            policy,
        }
    }

    pub async fn handle(&self, cmd: CreateClientCommand) -> Result<Client, DomainError> {
        let status = self
            .policy
            .status_on_create::<ClientStatus>(cmd.status.as_deref())?;
        let input = NewClient::new(cmd.name, cmd.email, cmd.phone, status, cmd.notes)?;

        let _guard = self.gate.enter().await;
        let client = self
            .clients
            .insert_with(Box::new(move |id| Client::new(id, input)))
            .await?;

        tracing::info!(client_id = %client.id(), "Client created");
        Ok(client)
    }
}
