//! CreateInitiativeHandler - Command handler for new initiatives.

use std::sync::Arc;

use crate::application::CommandGate;
use crate::domain::foundation::{
    DomainError, InitiativeStatus, InputPolicy, PriorityInput, ValidationError,
};
use crate::domain::initiative::{Initiative, InitiativeCategory, NewInitiative};
use crate::ports::InitiativeRepository;

/// Command to create an initiative.
#[derive(Debug, Clone, Default)]
pub struct CreateInitiativeCommand {
    pub title: String,
    pub description: String,
    pub category: String,
    pub status: Option<String>,
    pub priority: Option<PriorityInput>,
}

/// Handler for creating initiatives.
///
/// The category must come from the closed list under either policy. Under
/// the lenient policy a bad priority becomes 3 and an unknown status
/// becomes `pending`.
pub struct CreateInitiativeHandler {
    initiatives: Arc<dyn InitiativeRepository>,
    gate: CommandGate,
    policy: InputPolicy,
}

impl CreateInitiativeHandler {
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

    pub async fn handle(&self, cmd: CreateInitiativeCommand) -> Result<Initiative, DomainError> {
        for (field, value) in [("title", &cmd.title), ("description", &cmd.description)] {
            if value.trim().is_empty() {
                return Err(ValidationError::empty_field(field).into());
            }
        }
        let category = InitiativeCategory::parse(&cmd.category)?;
        let status = self
            .policy
            .status_on_create::<InitiativeStatus>(cmd.status.as_deref())?;
        let priority = self.policy.priority_on_create(cmd.priority.as_ref())?;
        let input = NewInitiative::new(cmd.title, cmd.description, category, status, priority)?;

        let _guard = self.gate.enter().await;
        let initiative = self
            .initiatives
            .insert_with(Box::new(move |id| Initiative::new(id, input)))
            .await?;

        tracing::info!(
            initiative_id = %initiative.id(),
            priority = %initiative.priority(),
            "Initiative created"
        );
        Ok(initiative)
    }
}
