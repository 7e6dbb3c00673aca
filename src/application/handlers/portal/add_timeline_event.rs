//! AddTimelineEventHandler - Command handler for manual timeline milestones.

use std::sync::Arc;

use crate::application::CommandGate;
use crate::domain::foundation::{DomainError, InputPolicy, ServiceId, Timestamp, ValidationError};
use crate::domain::portal::{ClientService, TimelineEvent};
use crate::ports::ClientServiceRepository;

use super::append::append_record;

/// Command to add a timeline event. `date` is ISO-8601; absent means now.
#[derive(Debug, Clone)]
pub struct AddTimelineEventCommand {
    pub service_id: ServiceId,
    pub title: String,
    pub description: String,
    pub date: Option<String>,
}

/// Handler for timeline events. An unparseable date falls back to now
/// under the lenient policy.
pub struct AddTimelineEventHandler {
    services: Arc<dyn ClientServiceRepository>,
    gate: CommandGate,
    policy: InputPolicy,
}

impl AddTimelineEventHandler {
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
        cmd: AddTimelineEventCommand,
    ) -> Result<Option<TimelineEvent>, DomainError> {
        let date = match cmd.date.as_deref() {
            Some(raw) => self.policy.absorb(
                Timestamp::parse_iso(raw)
                    .ok_or_else(|| ValidationError::invalid_format("date", "expected ISO-8601")),
            )?,
            None => None,
        };
        let event = TimelineEvent::new(cmd.title, cmd.description, date)?;
        let added = append_record(
            self.services.as_ref(),
            &self.gate,
            cmd.service_id,
            event,
            ClientService::add_timeline_event,
        )
        .await?;
        if added.is_some() {
            tracing::info!(service_id = %cmd.service_id, "Timeline event added");
        }
        Ok(added)
    }
}
