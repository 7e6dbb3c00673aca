//! DeleteServiceHandler - Command handler for removing portal services.

use std::sync::Arc;

use crate::application::CommandGate;
use crate::domain::foundation::{DomainError, ServiceId};
use crate::ports::ClientServiceRepository;

/// Command to remove a service with everything it owns.
#[derive(Debug, Clone)]
pub struct DeleteServiceCommand {
    pub service_id: ServiceId,
}

pub struct DeleteServiceHandler {
    services: Arc<dyn ClientServiceRepository>,
    gate: CommandGate,
}

impl DeleteServiceHandler {
    pub fn new(services: Arc<dyn ClientServiceRepository>, gate: CommandGate) -> Self {
        Self { services, gate }
    }

    pub async fn handle(&self, cmd: DeleteServiceCommand) -> Result<bool, DomainError> {
        let _guard = self.gate.enter().await;
        let removed = self.services.delete(cmd.service_id).await?;
        if removed {
            tracing::info!(service_id = %cmd.service_id, "Service deleted");
        }
        Ok(removed)
    }
}
