//! UpdateMentorshipHandler - Command handler for partial mentorship updates.

use serde_json::Value;
use std::sync::Arc;

use crate::application::CommandGate;
use crate::domain::foundation::{
    ClientId, DomainError, EngagementStatus, InputPolicy, MentorshipId, RawId, ValidationError,
};
use crate::domain::mentorship::MentorshipView;
use crate::ports::{ClientRepository, MentorshipRepository};

use super::ClientLifecycle;

/// Partial update. `None` leaves a field untouched; meetings and documents
/// replace the stored lists wholesale when present.
#[derive(Debug, Clone)]
pub struct UpdateMentorshipCommand {
    pub mentorship_id: MentorshipId,
    pub client_id: Option<RawId>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub meetings: Option<Vec<Value>>,
    pub documents: Option<Vec<Value>>,
}

impl UpdateMentorshipCommand {
    pub fn new(mentorship_id: MentorshipId) -> Self {
        Self {
            mentorship_id,
            client_id: None,
            title: None,
            description: None,
            status: None,
            meetings: None,
            documents: None,
        }
    }
}

/// Handler for mentorship updates. Returns `None` for unknown ids.
///
/// Reassigning to a client that does not exist is skipped under the
/// lenient policy. Moving to `completed` completes the referenced client.
pub struct UpdateMentorshipHandler {
    mentorships: Arc<dyn MentorshipRepository>,
    clients: Arc<dyn ClientRepository>,
    lifecycle: ClientLifecycle,
    gate: CommandGate,
    policy: InputPolicy,
}

impl UpdateMentorshipHandler {
    pub fn new(
        mentorships: Arc<dyn MentorshipRepository>,
        clients: Arc<dyn ClientRepository>,
        gate: CommandGate,
        policy: InputPolicy,
    ) -> Self {
        Self {
            mentorships,
            lifecycle: ClientLifecycle::new(clients.clone()),
            clients,
            gate,
            policy,
        }
    }

    pub async fn handle(
        &self,
        cmd: UpdateMentorshipCommand,
    ) -> Result<Option<MentorshipView>, DomainError> {
        let status = match cmd.status.as_deref() {
            Some(label) => self.policy.status_on_update::<EngagementStatus>(label)?,
            None => None,
        };

        let _guard = self.gate.enter().await;
        let Some(mut mentorship) = self.mentorships.find_by_id(cmd.mentorship_id).await? else {
            return Ok(None);
        };

        if let Some(raw) = cmd.client_id.as_ref() {
            if let Some(client_id) = self.policy.absorb(self.existing_client(raw).await?)? {
                mentorship.reassign(client_id);
            }
        }
        if let Some(title) = cmd.title {
            mentorship.set_title(title);
        }
        if let Some(description) = cmd.description {
            mentorship.set_description(description);
        }
        if let Some(status) = status {
            mentorship.set_status(status);
        }
        if let Some(meetings) = cmd.meetings {
            mentorship.replace_meetings(meetings);
        }
        if let Some(documents) = cmd.documents {
            mentorship.replace_documents(documents);
        }
        mentorship.touch();

        self.mentorships.update(&mentorship).await?;
        tracing::info!(mentorship_id = %mentorship.id(), "Mentorship updated");

        if status == Some(EngagementStatus::Completed) {
            self.lifecycle
                .mentorship_completed(mentorship.client_id())
                .await?;
        }

        let client = self.clients.find_by_id(mentorship.client_id()).await?;
        Ok(Some(MentorshipView::resolve(mentorship, client.as_ref())))
    }

    /// Resolves a reassignment target. The outer error is infrastructure;
    /// the inner one is bad input for the policy to judge.
    async fn existing_client(
        &self,
        raw: &RawId,
    ) -> Result<Result<ClientId, ValidationError>, DomainError> {
        let client_id: ClientId = match raw.parse("client_id") {
            Ok(id) => id,
            Err(err) => return Ok(Err(err)),
        };
        if self.clients.exists(client_id).await? {
            Ok(Ok(client_id))
        } else {
            Ok(Err(ValidationError::unknown_reference("client_id", client_id)))
        }
    }
}
