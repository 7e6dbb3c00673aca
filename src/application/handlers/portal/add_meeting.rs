//! AddMeetingHandler - Command handler for scheduling service meetings.

use std::sync::Arc;

use crate::application::CommandGate;
use crate::domain::foundation::{DomainError, ServiceId};
use crate::domain::portal::{ClientService, Meeting};
use crate::ports::ClientServiceRepository;

use super::append::append_record;

/// Command to add a meeting to a service.
#[derive(Debug, Clone)]
pub struct AddMeetingCommand {
    pub service_id: ServiceId,
    pub date: String,
    pub topic: String,
    pub notes: Option<String>,
}

pub struct AddMeetingHandler {
    services: Arc<dyn ClientServiceRepository>,
    gate: CommandGate,
}

impl AddMeetingHandler {
    pub fn new(services: Arc<dyn ClientServiceRepository>, gate: CommandGate) -> Self {
        Self { services, gate }
    }

    pub async fn handle(&self, cmd: AddMeetingCommand) -> Result<Option<Meeting>, DomainError> {
        let meeting = Meeting::new(cmd.date, cmd.topic, cmd.notes)?;
        let added = append_record(
            self.services.as_ref(),
            &self.gate,
            cmd.service_id,
            meeting,
            ClientService::add_meeting,
        )
        .await?;
        if added.is_some() {
            tracing::info!(service_id = %cmd.service_id, "Meeting added");
        }
        Ok(added)
    }
}
