//! Mentorship repository port.

use async_trait::async_trait;

use crate::domain::foundation::{
    ClientId, DomainError, EngagementStatus, MentorshipId, Repository,
};
use crate::domain::mentorship::Mentorship;

/// Filter for mentorship listings. Present fields are AND-combined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MentorshipFilter {
    pub client_id: Option<ClientId>,
    pub status: Option<EngagementStatus>,
}

impl MentorshipFilter {
    pub fn matches(&self, mentorship: &Mentorship) -> bool {
        self.client_id.map_or(true, |id| mentorship.client_id() == id)
            && self.status.map_or(true, |s| mentorship.status() == s)
    }
}

/// Repository port for Mentorship aggregates.
///
/// Mentorships reference clients by id only; deleting a client leaves its
/// mentorships in place.
#[async_trait]
pub trait MentorshipRepository: Repository<Mentorship, MentorshipId> {
    /// Returns mentorships matching the filter, unordered.
    async fn find_matching(&self, filter: MentorshipFilter)
        -> Result<Vec<Mentorship>, DomainError>;
}
