//! UpdateInitiativeHandler - Command handler for partial initiative updates.

use std::sync::Arc;

use crate::application::CommandGate;
use crate::domain::foundation::{
    DomainError, InitiativeId, InitiativeStatus, InputPolicy, PriorityInput,
};
use crate::domain::initiative::{Initiative, InitiativeCategory};
use crate::ports::InitiativeRepository;

/// Partial update. `None` leaves a field untouched.
#[derive(Debug, Clone)]
pub struct UpdateInitiativeCommand {
    pub initiative_id: InitiativeId,
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub status: Option<String>,
    pub priority: Option<PriorityInput>,
}

impl UpdateInitiativeCommand {
    pub fn new(initiative_id: InitiativeId) -> Self {
        Self {
            initiative_id,
            title: None,
            description: None,
            category: None,
            status: None,
            priority: None,
        }
    }
}

/// Handler for initiative updates. Returns `None` for unknown ids.
///
/// Under the lenient policy an invalid category, status or priority is
/// skipped and the stored value kept.
pub struct UpdateInitiativeHandler {
    initiatives: Arc<dyn InitiativeRepository>,
    gate: CommandGate,
    policy: InputPolicy,
}

impl UpdateInitiativeHandler {
    pub fn new(
        initiatives: Arc<dyn InitiativeRepository>,
        gate: CommandGate,
        policy: InputPolicy,
    ) -> Self {
        Self {
            initiatives,
            gate,
            policy,
        }
    }

    pub async fn handle(
        &self,
        cmd: UpdateInitiativeCommand,
    ) -> Result<Option<Initiative>, DomainError> {
        let category = match cmd.category.as_deref() {
            Some(label) => self.policy.absorb(InitiativeCategory::parse(label))?,
            None => None,
        };
        let status = match cmd.status.as_deref() {
            Some(label) => self.policy.status_on_update::<InitiativeStatus>(label)?,
            None => None,
        };
        let priority = match cmd.priority.as_ref() {
            Some(raw) => self.policy.priority_on_update(raw)?,
            None => None,
        };

        let _guard = self.gate.enter().await;
        let Some(mut initiative) = self.initiatives.find_by_id(cmd.initiative_id).await? else {
            return Ok(None);
        };

        if let Some(title) = cmd.title {
            initiative.set_title(title);
        }
        if let Some(description) = cmd.description {
            initiative.set_description(description);
        }
        if let Some(category) = category {
            initiative.set_category(category);
        }
        if let Some(status) = status {
            initiative.set_status(status);
        }
        if let Some(priority) = priority {
            initiative.set_priority(priority);
        }
        initiative.touch();

        self.initiatives.update(&initiative).await?;
        tracing::info!(initiative_id = %initiative.id(), "Initiative updated");
        Ok(Some(initiative))
    }
}
