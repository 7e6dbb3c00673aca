//! ListServicesHandler - Query handler for portal services, most recently
//! touched first.

use std::sync::Arc;

use crate::domain::foundation::{ClientId, DomainError, RawId};
use crate::domain::portal::ClientService;
use crate::ports::ClientServiceRepository;

/// Query for services, optionally of one client.
#[derive(Debug, Clone, Default)]
pub struct ListServicesQuery {
    pub client_id: Option<RawId>,
}

pub struct ListServicesHandler {
    services: Arc<dyn ClientServiceRepository>,
}

impl ListServicesHandler {
    pub fn new(services: Arc<dyn ClientServiceRepository>) -> Self {
        Self { services }
    }

    /// # Errors
    ///
    /// - `InvalidFormat` if the client filter is not an integer
    pub async fn handle(&self, query: ListServicesQuery) -> Result<Vec<ClientService>, DomainError> {
        let client_id: Option<ClientId> = match query.client_id.as_ref() {
            Some(raw) => Some(raw.parse("client_id")?),
            None => None,
        };
        let mut services = self.services.find_by_client(client_id).await?;
        services.sort_by(|a, b| b.updated_at().cmp(a.updated_at()));
        Ok(services)
    }
}
