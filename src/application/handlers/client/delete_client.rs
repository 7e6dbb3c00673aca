//! DeleteClientHandler - Command handler for removing clients.

use std::sync::Arc;

use crate::application::CommandGate;
use crate::domain::foundation::{ClientId, DomainError};
use crate::ports::ClientRepository;

/// Command to remove a client.
#[derive(Debug, Clone)]
pub struct DeleteClientCommand {
    pub client_id: ClientId,
}

/// Handler for client removal.
///
/// Mentorships and services that reference the client are left in place.
pub struct DeleteClientHandler {
    clients: Arc<dyn ClientRepository>,
    gate: CommandGate,
}

impl DeleteClientHandler {
    pub fn new(clients: Arc<dyn ClientRepository>, gate: CommandGate) -> Self {
        Self { clients, gate }
    }

    /// Returns whether a client existed and was removed.
    pub async fn handle(&self, cmd: DeleteClientCommand) -> Result<bool, DomainError> {
        let _guard = self.gate.enter().await;
        let removed = self.clients.delete(cmd.client_id).await?;
        if removed {
            tracing::info!(client_id = %cmd.client_id, "Client deleted");
        }
        Ok(removed)
    }
}
