//! GetClientHandler - Query handler for a single client.

use std::sync::Arc;

use crate::domain::client::Client;
use crate::domain::foundation::{ClientId, DomainError};
use crate::ports::ClientRepository;

/// Query for one client by id.
#[derive(Debug, Clone)]
pub struct GetClientQuery {
    pub client_id: ClientId,
}

/// Handler for client lookup. Returns `None` for unknown ids.
pub struct GetClientHandler {
    clients: Arc<dyn ClientRepository>,
}

impl GetClientHandler {
    pub fn new(clients: Arc<dyn ClientRepository>) -> Self {
        Self { clients }
    }

    pub async fn handle(&self, query: GetClientQuery) -> Result<Option<Client>, DomainError> {
        self.clients.find_by_id(query.client_id).await
    }
}
