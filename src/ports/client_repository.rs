//! Client repository port.

use async_trait::async_trait;

use crate::domain::client::Client;
use crate::domain::foundation::{ClientId, ClientStatus, DomainError, Repository};

/// Repository port for Client aggregates.
#[async_trait]
pub trait ClientRepository: Repository<Client, ClientId> {
    /// Returns clients with exactly the given status, or all clients.
    ///
    /// Results come back in store order.
    async fn find_by_status(
        &self,
        status: Option<ClientStatus>,
    ) -> Result<Vec<Client>, DomainError>;
}
