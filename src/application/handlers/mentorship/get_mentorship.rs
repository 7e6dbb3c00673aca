//! GetMentorshipHandler - Query handler for one mentorship with its client name.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, MentorshipId};
use crate::domain::mentorship::MentorshipView;
use crate::ports::{ClientRepository, MentorshipRepository};

/// Query for one mentorship by id.
#[derive(Debug, Clone)]
pub struct GetMentorshipQuery {
    pub mentorship_id: MentorshipId,
}

pub struct GetMentorshipHandler {
    mentorships: Arc<dyn MentorshipRepository>,
    clients: Arc<dyn ClientRepository>,
}

impl GetMentorshipHandler {
    pub fn new(
        mentorships: Arc<dyn MentorshipRepository>,
        clients: Arc<dyn ClientRepository>,
    ) -> Self {
        Self {
            mentorships,
            clients,
        }
    }

    pub async fn handle(
        &self,
        query: GetMentorshipQuery,
    ) -> Result<Option<MentorshipView>, DomainError> {
        let Some(mentorship) = self.mentorships.find_by_id(query.mentorship_id).await? else {
            return Ok(None);
        };
        let client = self.clients.find_by_id(mentorship.client_id()).await?;
        Ok(Some(MentorshipView::resolve(mentorship, client.as_ref())))
    }
}
