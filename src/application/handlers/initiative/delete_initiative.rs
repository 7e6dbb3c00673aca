//! DeleteInitiativeHandler - Command handler for removing initiatives.

use std::sync::Arc;

use crate::application::CommandGate;
use crate::domain::foundation::{DomainError, InitiativeId};
use crate::ports::InitiativeRepository;

/// Command to remove an initiative.
#[derive(Debug, Clone)]
pub struct DeleteInitiativeCommand {
    pub initiative_id: InitiativeId,
}

pub struct DeleteInitiativeHandler {
    initiatives: Arc<dyn InitiativeRepository>,
    gate: CommandGate,
}

impl DeleteInitiativeHandler {
    pub fn new(initiatives: Arc<dyn InitiativeRepository>, gate: CommandGate) -> Self {
        Self { initiatives, gate }
    }

    /// Returns whether an initiative existed and was removed.
    pub async fn handle(&self, cmd: DeleteInitiativeCommand) -> Result<bool, DomainError> {
        let _guard = self.gate.enter().await;
        let removed = self.initiatives.delete(cmd.initiative_id).await?;
        if removed {
            tracing::info!(initiative_id = %cmd.initiative_id, "Initiative deleted");
        }
        Ok(removed)
    }
}
