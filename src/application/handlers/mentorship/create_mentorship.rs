//! CreateMentorshipHandler - Command handler for opening mentorships.

use std::sync::Arc;

use crate::application::CommandGate;
use crate::domain::foundation::{
    ClientId, DomainError, EngagementStatus, InputPolicy, RawId, ValidationError,
};
use crate::domain::mentorship::{Mentorship, MentorshipView, NewMentorship};
use crate::ports::{ClientRepository, MentorshipRepository};

use super::ClientLifecycle;

/// Command to open a mentorship for an existing client.
#[derive(Debug, Clone, Default)]
pub struct CreateMentorshipCommand {
    pub client_id: Option<RawId>,
    pub title: String,
    pub description: String,
    pub status: Option<String>,
}

/// Handler for opening mentorships.
///
/// # Errors
///
/// - `EmptyField` if client_id, title or description is missing
/// - `InvalidFormat` if client_id is not an integer
/// - `ValidationFailed` if no client has that id
pub struct CreateMentorshipHandler {
    mentorships: Arc<dyn MentorshipRepository>,
    clients: Arc<dyn ClientRepository>,
    lifecycle: ClientLifecycle,
    gate: CommandGate,
    policy: InputPolicy,
}

impl CreateMentorshipHandler {
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

    pub async fn handle(&self, cmd: CreateMentorshipCommand) -> Result<MentorshipView, DomainError> {
        let client_id: ClientId = cmd
            .client_id
            .as_ref()
            .ok_or_else(|| ValidationError::empty_field("client_id"))?
            .parse("client_id")?;
        let status = self
            .policy
            .status_on_create::<EngagementStatus>(cmd.status.as_deref())?;
        let input = NewMentorship::new(client_id, cmd.title, cmd.description, status)?;

        let _guard = self.gate.enter().await;
        let Some(client) = self.clients.find_by_id(client_id).await? else {
            return Err(ValidationError::unknown_reference("client_id", client_id).into());
        };

        let mentorship = self
            .mentorships
            .insert_with(Box::new(move |id| Mentorship::new(id, input)))
            .await?;
        tracing::info!(
            mentorship_id = %mentorship.id(),
            %client_id,
            "Mentorship created"
        );

        self.lifecycle.mentorship_started(client_id).await?;

        Ok(MentorshipView::resolve(mentorship, Some(&client)))
    }
}
