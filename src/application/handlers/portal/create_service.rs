//! CreateServiceHandler - Command handler for opening a portal service.

use std::sync::Arc;

use crate::application::CommandGate;
use crate::domain::foundation::{ClientId, DomainError, InputPolicy, RawId, ValidationError};
use crate::domain::portal::{ClientService, NewClientService, ServiceStatus};
use crate::ports::ClientServiceRepository;

/// Command to open a service for a client.
#[derive(Debug, Clone, Default)]
pub struct CreateServiceCommand {
    pub title: String,
    pub client_id: Option<RawId>,
    pub status: Option<String>,
    pub description: String,
}

/// Handler for opening services.
///
/// The client id must be a well-formed integer but is not checked against
/// the client store.
pub struct CreateServiceHandler {
    services: Arc<dyn ClientServiceRepository>,
    gate: CommandGate,
    policy: InputPolicy,
}

impl CreateServiceHandler {
    pub fn new(
        services: Arc<dyn ClientServiceRepository>,
        gate: CommandGate,
        policy: InputPolicy,
    ) -> Self {
        Self {
            services,
            gate,
            policy,
        }
    }

    pub async fn handle(&self, cmd: CreateServiceCommand) -> Result<ClientService, DomainError> {
        let client_id: ClientId = cmd
            .client_id
            .as_ref()
            .ok_or_else(|| ValidationError::empty_field("client_id"))?
            .parse("client_id")?;
        let status = match cmd.status.as_deref() {
            Some(label) => ServiceStatus::accept(label, self.policy)?,
            None => ServiceStatus::default(),
        };
        let input = NewClientService::new(cmd.title, client_id, status, cmd.description)?;

        let _guard = self.gate.enter().await;
        let service = self
            .services
            .insert_with(Box::new(move |id| ClientService::new(id, input)))
            .await?;

        tracing::info!(service_id = %service.id(), %client_id, "Service created");
        Ok(service)
    }
}
