//! GetServiceHandler - Query handler for one portal service.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ServiceId};
use crate::domain::portal::ClientService;
use crate::ports::ClientServiceRepository;

/// Query for one service by id.
#[derive(Debug, Clone)]
pub struct GetServiceQuery {
    pub service_id: ServiceId,
}

pub struct GetServiceHandler {
    services: Arc<dyn ClientServiceRepository>,
}

impl GetServiceHandler {
    pub fn new(services: Arc<dyn ClientServiceRepository>) -> Self {
        Self { services }
    }

    pub async fn handle(&self, query: GetServiceQuery) -> Result<Option<ClientService>, DomainError> {
        self.services.find_by_id(query.service_id).await
    }
}
