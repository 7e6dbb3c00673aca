//! AddScopeItemHandler - Command handler for agreed deliverables.

use std::sync::Arc;

use crate::application::CommandGate;
use crate::domain::foundation::{DomainError, ServiceId};
use crate::domain::portal::{ClientService, ScopeItem};
use crate::ports::ClientServiceRepository;

use super::append::append_record;

/// Command to add a scope item to a service.
#[derive(Debug, Clone)]
pub struct AddScopeItemCommand {
    pub service_id: ServiceId,
    pub title: String,
    pub description: String,
}

pub struct AddScopeItemHandler {
    services: Arc<dyn ClientServiceRepository>,
    gate: CommandGate,
}

impl AddScopeItemHandler {
    pub fn new(services: Arc<dyn ClientServiceRepository>, gate: CommandGate) -> Self {
        Self { services, gate }
    }

    pub async fn handle(&self, cmd: AddScopeItemCommand) -> Result<Option<ScopeItem>, DomainError> {
        let item = ScopeItem::new(cmd.title, cmd.description)?;
        let added = append_record(
            self.services.as_ref(),
            &self.gate,
            cmd.service_id,
            item,
            ClientService::add_scope_item,
        )
        .await?;
        if added.is_some() {
            tracing::info!(service_id = %cmd.service_id, "Scope item added");
        }
        Ok(added)
    }
}
