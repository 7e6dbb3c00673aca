//! AddChatMessageHandler - Command handler for portal chat messages.

use std::sync::Arc;

use crate::application::CommandGate;
use crate::domain::foundation::{DomainError, ServiceId};
use crate::domain::portal::{ChatMessage, ClientService};
use crate::ports::ClientServiceRepository;

use super::append::append_record;

/// Command to post a chat message on a service.
#[derive(Debug, Clone)]
pub struct AddChatMessageCommand {
    pub service_id: ServiceId,
    pub sender: String,
    pub message: String,
}

pub struct AddChatMessageHandler {
    services: Arc<dyn ClientServiceRepository>,
    gate: CommandGate,
}

impl AddChatMessageHandler {
    pub fn new(services: Arc<dyn ClientServiceRepository>, gate: CommandGate) -> Self {
        Self { services, gate }
    }

    /// # Errors
    ///
    /// - `EmptyField` if sender or message is blank
    pub async fn handle(&self, cmd: AddChatMessageCommand) -> Result<Option<ChatMessage>, DomainError> {
        let message = ChatMessage::new(cmd.sender, cmd.message)?;
        let added = append_record(
            self.services.as_ref(),
            &self.gate,
            cmd.service_id,
            message,
            ClientService::add_chat_message,
        )
        .await?;
        if added.is_some() {
            tracing::info!(service_id = %cmd.service_id, "Chat message added");
        }
        Ok(added)
    }
}
