//! Client status changes driven by the mentorship lifecycle.

use std::sync::Arc;

use crate::domain::foundation::{ClientId, DomainError};
use crate::ports::ClientRepository;

/// Applies the client-side effects of mentorship events.
///
/// Callers must already hold the command gate so the client cannot be
/// deleted between the mentorship write and this follow-up.
pub struct ClientLifecycle {
    clients: Arc<dyn ClientRepository>,
}

impl ClientLifecycle {
    pub fn new(clients: Arc<dyn ClientRepository>) -> Self {
        Self { clients }
    }

    /// A mentorship was opened: a prospect becomes active.
    ///
    /// Returns whether the client changed.
    pub async fn mentorship_started(&self, client_id: ClientId) -> Result<bool, DomainError> {
        let Some(mut client) = self.clients.find_by_id(client_id).await? else {
            return Ok(false);
        };
        if !client.activate_if_prospect() {
            return Ok(false);
        }
        self.clients.update(&client).await?;
        tracing::info!(%client_id, "Client activated by new mentorship");
        Ok(true)
    }

    /// A mentorship reached `completed`: the client is completed too.
    ///
    /// A client that no longer exists is skipped.
    pub async fn mentorship_completed(&self, client_id: ClientId) -> Result<bool, DomainError> {
        let Some(mut client) = self.clients.find_by_id(client_id).await? else {
            tracing::debug!(%client_id, "Completed mentorship references a missing client");
            return Ok(false);
        };
        client.mark_completed();
        self.clients.update(&client).await?;
        tracing::info!(%client_id, "Client completed by mentorship");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryRepository;
    use crate::domain::client::{Client, NewClient};
    use crate::domain::foundation::{ClientStatus, Repository};

    async fn repo_with(status: ClientStatus) -> (Arc<InMemoryRepository<Client>>, ClientId) {
        let repo = Arc::new(InMemoryRepository::<Client>::new());
        let input = NewClient::new("Eva", "eva@x.com", "1", status, "").unwrap();
        let client = repo
            .insert_with(Box::new(move |id| Client::new(id, input)))
            .await
            .unwrap();
        (repo, client.id())
    }

    #[tokio::test]
    async fn started_promotes_prospect_only() {
        let (repo, id) = repo_with(ClientStatus::Prospect).await;
        let lifecycle = ClientLifecycle::new(repo.clone());

        assert!(lifecycle.mentorship_started(id).await.unwrap());
        assert!(!lifecycle.mentorship_started(id).await.unwrap());

        let client = repo.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(client.status(), ClientStatus::Active);
    }

    #[tokio::test]
    async fn completed_marks_client_completed() {
        let (repo, id) = repo_with(ClientStatus::Active).await;
        let lifecycle = ClientLifecycle::new(repo.clone());

        assert!(lifecycle.mentorship_completed(id).await.unwrap());
        let client = repo.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(client.status(), ClientStatus::Completed);
    }

    #[tokio::test]
    async fn missing_client_is_skipped() {
        let (repo, _) = repo_with(ClientStatus::Active).await;
        let lifecycle = ClientLifecycle::new(repo);

        assert!(!lifecycle.mentorship_completed(ClientId::new(77)).await.unwrap());
    }
}
