//! ListClientsHandler - Query handler for the client list.

use std::sync::Arc;

use crate::domain::client::Client;
use crate::domain::foundation::{ClientStatus, DomainError, StatusLabel};
use crate::ports::ClientRepository;

/// Query for clients, optionally restricted to one status label.
#[derive(Debug, Clone, Default)]
pub struct ListClientsQuery {
    pub status: Option<String>,
}

/// Handler for listing clients in store order.
///
/// A status label outside the known set matches no client.
pub struct ListClientsHandler {
    clients: Arc<dyn ClientRepository>,
}

impl ListClientsHandler {
    pub fn new(clients: Arc<dyn ClientRepository>) -> Self {
        Self { clients }
    }

    pub async fn handle(&self, query: ListClientsQuery) -> Result<Vec<Client>, DomainError> {
        let status = match query.status.as_deref() {
            None => None,
            Some(label) => match ClientStatus::parse(label) {
                Some(status) => Some(status),
                None => return Ok(Vec::new()),
            },
        };
        self.clients.find_by_status(status).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryRepository;
    use crate::domain::client::NewClient;
    use crate::domain::foundation::Repository;

    async fn seeded() -> Arc<InMemoryRepository<Client>> {
        let repo = Arc::new(InMemoryRepository::<Client>::new());
        for (name, status) in [
            ("Ana", ClientStatus::Prospect),
            ("Bia", ClientStatus::Active),
            ("Caio", ClientStatus::Prospect),
        ] {
            let input = NewClient::new(name, "e@x.com", "1", status, "").unwrap();
            repo.insert_with(Box::new(move |id| Client::new(id, input)))
                .await
                .unwrap();
        }
        repo
    }

    #[tokio::test]
    async fn filters_by_exact_status() {
        let handler = ListClientsHandler::new(seeded().await);
        let prospects = handler
            .handle(ListClientsQuery {
                status: Some("prospect".to_string()),
            })
            .await
            .unwrap();

        let names: Vec<_> = prospects.iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["Ana", "Caio"]);
    }

    #[tokio::test]
    async fn unknown_status_matches_nothing() {
        let handler = ListClientsHandler::new(seeded().await);
        let result = handler
            .handle(ListClientsQuery {
                status: Some("archived".to_string()),
            })
            .await
            .unwrap();
        assert!(result.is_empty());
    }

    #[tokio::test]
    async fn no_filter_returns_everything() {
        let handler = ListClientsHandler::new(seeded().await);
        let all = handler.handle(ListClientsQuery::default()).await.unwrap();
        assert_eq!(all.len(), 3);
    }
}
