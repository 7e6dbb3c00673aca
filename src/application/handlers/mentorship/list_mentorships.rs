//! ListMentorshipsHandler - Query handler for mentorships, newest first.

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::foundation::{DomainError, EngagementStatus, RawId, StatusLabel};
use crate::domain::mentorship::MentorshipView;
use crate::ports::{ClientRepository, MentorshipFilter, MentorshipRepository};

/// Query for mentorships. Present filters are AND-combined.
#[derive(Debug, Clone, Default)]
pub struct ListMentorshipsQuery {
    pub client_id: Option<RawId>,
    pub status: Option<String>,
}

/// Handler for listing mentorships with their client names.
///
/// Ordered by `created_at` descending; a status outside the engagement
/// funnel matches nothing. A malformed client id is a validation error.
pub struct ListMentorshipsHandler {
    mentorships: Arc<dyn MentorshipRepository>,
    clients: Arc<dyn ClientRepository>,
}

impl ListMentorshipsHandler {
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
        query: ListMentorshipsQuery,
    ) -> Result<Vec<MentorshipView>, DomainError> {
        let mut filter = MentorshipFilter::default();
        if let Some(raw) = query.client_id.as_ref() {
            filter.client_id = Some(raw.parse("client_id")?);
        }
        if let Some(label) = query.status.as_deref() {
            match EngagementStatus::parse(label) {
                Some(status) => filter.status = Some(status),
                None => return Ok(Vec::new()),
            }
        }

        let mut mentorships = self.mentorships.find_matching(filter).await?;
        mentorships.sort_by(|a, b| b.created_at().cmp(a.created_at()));

        let clients: HashMap<_, _> = self
            .clients
            .find_all()
            .await?
            .into_iter()
            .map(|c| (c.id(), c))
            .collect();

        Ok(mentorships
            .into_iter()
            .map(|m| {
                let client = clients.get(&m.client_id());
                MentorshipView::resolve(m, client)
            })
            .collect())
    }
}
