//! UpdateServiceHandler - Command handler for partial service updates.

use std::sync::Arc;

use crate::application::CommandGate;
use crate::domain::foundation::{DomainError, InputPolicy, ServiceId};
use crate::domain::portal::{ClientService, ServiceStatus};
use crate::ports::ClientServiceRepository;

/// Partial update. A status, even an unchanged one, adds a timeline event.
/// Price applies only when `price` and `installments` are both present.
#[derive(Debug, Clone)]
pub struct UpdateServiceCommand {
    pub service_id: ServiceId,
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub price: Option<String>,
    pub installments: Option<u32>,
}

impl UpdateServiceCommand {
    pub fn new(service_id: ServiceId) -> Self {
        Self {
            service_id,
            title: None,
            description: None,
            status: None,
            price: None,
            installments: None,
        }
    }
}

/// Handler for service updates. Returns `None` for unknown ids.
pub struct UpdateServiceHandler {
    services: Arc<dyn ClientServiceRepository>,
    gate: CommandGate,
    policy: InputPolicy,
}

impl UpdateServiceHandler {
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

    pub async fn handle(
        &self,
        cmd: UpdateServiceCommand,
    ) -> Result<Option<ClientService>, DomainError> {
        let status = match cmd.status.as_deref() {
            Some(label) => Some(ServiceStatus::accept(label, self.policy)?),
            None => None,
        };

        let _guard = self.gate.enter().await;
        let Some(mut service) = self.services.find_by_id(cmd.service_id).await? else {
            return Ok(None);
        };

        if let Some(title) = cmd.title {
            service.set_title(title);
        }
        if let Some(description) = cmd.description {
            service.set_description(description);
        }
        if let Some(status) = status {
            service.update_status(status);
        }
        match (cmd.price, cmd.installments) {
            (Some(price), Some(installments)) => service.set_price(price, installments),
            (None, None) => {}
            _ => tracing::debug!(
                service_id = %cmd.service_id,
                "Ignoring price change without both price and installments"
            ),
        }
        service.touch();

        self.services.update(&service).await?;
        tracing::info!(service_id = %service.id(), status = %service.status(), "Service updated");
        Ok(Some(service))
    }
}
