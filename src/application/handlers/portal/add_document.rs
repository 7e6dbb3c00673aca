//! AddDocumentHandler - Command handler for sharing documents on a service.

use std::sync::Arc;

use crate::application::CommandGate;
use crate::domain::foundation::{DomainError, ServiceId};
use crate::domain::portal::{ClientService, Document};
use crate::ports::ClientServiceRepository;

use super::append::append_record;

/// Command to attach a document record to a service.
#[derive(Debug, Clone)]
pub struct AddDocumentCommand {
    pub service_id: ServiceId,
    pub kind: String,
    pub name: String,
    pub file_path: Option<String>,
}

pub struct AddDocumentHandler {
    services: Arc<dyn ClientServiceRepository>,
    gate: CommandGate,
}

impl AddDocumentHandler {
    pub fn new(services: Arc<dyn ClientServiceRepository>, gate: CommandGate) -> Self {
        Self { services, gate }
    }

    pub async fn handle(&self, cmd: AddDocumentCommand) -> Result<Option<Document>, DomainError> {
        let document = Document::new(cmd.kind, cmd.name, cmd.file_path)?;
        let added = append_record(
            self.services.as_ref(),
            &self.gate,
            cmd.service_id,
            document,
            ClientService::add_document,
        )
        .await?;
        if added.is_some() {
            tracing::info!(service_id = %cmd.service_id, "Document added");
        }
        Ok(added)
    }
}
