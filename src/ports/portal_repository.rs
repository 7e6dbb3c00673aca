//! Client-portal repository ports.

use async_trait::async_trait;

use crate::domain::foundation::{ClientId, DomainError, EpisodeId, Repository, ServiceId};
use crate::domain::portal::{ClientService, PodcastEpisode};

/// Repository port for ClientService aggregates.
#[async_trait]
pub trait ClientServiceRepository: Repository<ClientService, ServiceId> {
    /// Returns the services of one client, or all services, unordered.
    async fn find_by_client(
        &self,
        client_id: Option<ClientId>,
    ) -> Result<Vec<ClientService>, DomainError>;
}

/// Repository port for podcast episodes. Episodes are never updated or
/// deleted through the application, only added and read.
pub trait PodcastRepository: Repository<PodcastEpisode, EpisodeId> {}
