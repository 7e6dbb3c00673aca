//! DeleteMentorshipHandler - Command handler for removing mentorships.

use std::sync::Arc;

use crate::application::CommandGate;
use crate::domain::foundation::{DomainError, MentorshipId};
use crate::ports::MentorshipRepository;

/// Command to remove a mentorship.
#[derive(Debug, Clone)]
pub struct DeleteMentorshipCommand {
    pub mentorship_id: MentorshipId,
}

/// Removes a mentorship. The client's status is left as it is.
pub struct DeleteMentorshipHandler {
    mentorships: Arc<dyn MentorshipRepository>,
    gate: CommandGate,
}

impl DeleteMentorshipHandler {
    pub fn new(mentorships: Arc<dyn MentorshipRepository>, gate: CommandGate) -> Self {
        Self { mentorships, gate }
    }

    pub async fn handle(&self, cmd: DeleteMentorshipCommand) -> Result<bool, DomainError> {
        let _guard = self.gate.enter().await;
        let removed = self.mentorships.delete(cmd.mentorship_id).await?;
        if removed {
            tracing::info!(mentorship_id = %cmd.mentorship_id, "Mentorship deleted");
        }
        Ok(removed)
    }
}
