//! GetDashboardStatsHandler - Query handler for the admin dashboard counters.
//!
//! Counts clients by status, open mentorships and pending initiatives.

use serde::Serialize;
use std::sync::Arc;

use crate::domain::foundation::{
    ClientStatus, DomainError, EngagementStatus, InitiativeStatus,
};
use crate::ports::{ClientRepository, InitiativeRepository, MentorshipRepository};

/// Counters shown on the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub total_clients: usize,
    pub prospect_clients: usize,
    pub active_clients: usize,
    pub total_mentorships: usize,
    /// Mentorships in `in_progress`.
    pub active_mentorships: usize,
    pub total_initiatives: usize,
    pub pending_initiatives: usize,
}

/// Handler computing [`DashboardStats`] from the repositories.
pub struct GetDashboardStatsHandler {
    clients: Arc<dyn ClientRepository>,
    mentorships: Arc<dyn MentorshipRepository>,
    initiatives: Arc<dyn InitiativeRepository>,
}

impl GetDashboardStatsHandler {
    pub fn new(
        clients: Arc<dyn ClientRepository>,
        mentorships: Arc<dyn MentorshipRepository>,
        initiatives: Arc<dyn InitiativeRepository>,
    ) -> Self {
        Self {
            clients,
            mentorships,
            initiatives,
        }
    }

    pub async fn handle(&self) -> Result<DashboardStats, DomainError> {
        let clients = self.clients.find_all().await?;
        let mentorships = self.mentorships.find_all().await?;
        let initiatives = self.initiatives.find_all().await?;

        let count_clients =
            |status: ClientStatus| clients.iter().filter(|c| c.status() == status).count();

        Ok(DashboardStats {
            total_clients: clients.len(),
            prospect_clients: count_clients(ClientStatus::Prospect),
            active_clients: count_clients(ClientStatus::Active),
            total_mentorships: mentorships.len(),
            active_mentorships: mentorships
                .iter()
                .filter(|m| m.status() == EngagementStatus::InProgress)
                .count(),
            total_initiatives: initiatives.len(),
            pending_initiatives: initiatives
                .iter()
                .filter(|i| i.status() == InitiativeStatus::Pending)
                .count(),
        })
    }
}
