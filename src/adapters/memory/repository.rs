//! Generic in-memory repository implementing every repository port.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::client::Client;
use crate::domain::foundation::{
    AggregateRoot, ClientId, ClientStatus, DomainError, EntityBuilder, ErrorCode, Repository,
};
use crate::domain::initiative::Initiative;
use crate::domain::mentorship::Mentorship;
use crate::domain::portal::{ClientService, PodcastEpisode};
use crate::ports::{
    ClientRepository, ClientServiceRepository, InitiativeFilter, InitiativeRepository,
    MentorshipFilter, MentorshipRepository, PodcastRepository,
};

use super::{EntityStore, IdAllocator};

struct Inner<T: AggregateRoot> {
    ids: IdAllocator,
    store: EntityStore<T>,
}

/// In-memory repository for one aggregate type.
///
/// The id sequence and the entity map share one `RwLock`, so allocating an
/// identifier and inserting the entity built with it happen atomically.
/// Cloning shares the underlying data.
pub struct InMemoryRepository<T: AggregateRoot> {
    inner: Arc<RwLock<Inner<T>>>,
}

impl<T: AggregateRoot> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(Inner {
                ids: IdAllocator::new(),
                store: EntityStore::new(),
            })),
        }
    }

    /// Number of stored entities.
    pub async fn len(&self) -> usize {
        self.inner.read().await.store.len()
    }

    /// True when nothing is stored.
    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.store.is_empty()
    }

    async fn filtered<F>(&self, predicate: F) -> Vec<T>
    where
        F: Fn(&T) -> bool + Send,
    {
        self.inner
            .read()
            .await
            .store
            .values()
            .filter(|entity| predicate(entity))
            .cloned()
            .collect()
    }
}

impl<T: AggregateRoot> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: AggregateRoot> Clone for InMemoryRepository<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

#[async_trait]
impl<T: AggregateRoot> Repository<T, T::Id> for InMemoryRepository<T> {
    async fn insert_with(&self, build: EntityBuilder<T, T::Id>) -> Result<T, DomainError> {
        let mut inner = self.inner.write().await;
        let id = inner.ids.next_id::<T::Id>();
        let entity = build(id);
        if entity.id() != id {
            return Err(DomainError::storage(format!(
                "Builder returned id {} for allocated id {}",
                entity.id(),
                id
            )));
        }
        inner.store.put(id, entity.clone());
        Ok(entity)
    }

    async fn find_by_id(&self, id: T::Id) -> Result<Option<T>, DomainError> {
        Ok(self.inner.read().await.store.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<T>, DomainError> {
        Ok(self.inner.read().await.store.values().cloned().collect())
    }

    async fn update(&self, entity: &T) -> Result<(), DomainError> {
        let mut inner = self.inner.write().await;
        let id = entity.id();
        if !inner.store.contains(&id) {
            return Err(DomainError::new(
                ErrorCode::NotFound,
                format!("Entity {} not found", id),
            ));
        }
        inner.store.put(id, entity.clone());
        Ok(())
    }

    async fn delete(&self, id: T::Id) -> Result<bool, DomainError> {
        Ok(self.inner.write().await.store.delete(&id))
    }
}

#[async_trait]
impl ClientRepository for InMemoryRepository<Client> {
    async fn find_by_status(
        &self,
        status: Option<ClientStatus>,
    ) -> Result<Vec<Client>, DomainError> {
        Ok(self
            .filtered(|c| status.map_or(true, |s| c.status() == s))
            .await)
    }
}

#[async_trait]
impl InitiativeRepository for InMemoryRepository<Initiative> {
    async fn find_matching(
        &self,
        filter: InitiativeFilter,
    ) -> Result<Vec<Initiative>, DomainError> {
        Ok(self.filtered(|i| filter.matches(i)).await)
    }
}

#[async_trait]
impl MentorshipRepository for InMemoryRepository<Mentorship> {
    async fn find_matching(
        &self,
        filter: MentorshipFilter,
    ) -> Result<Vec<Mentorship>, DomainError> {
        Ok(self.filtered(|m| filter.matches(m)).await)
    }
}

#[async_trait]
impl ClientServiceRepository for InMemoryRepository<ClientService> {
    async fn find_by_client(
        &self,
        client_id: Option<ClientId>,
    ) -> Result<Vec<ClientService>, DomainError> {
        Ok(self
            .filtered(|s| client_id.map_or(true, |id| s.client_id() == id))
            .await)
    }
}

impl PodcastRepository for InMemoryRepository<PodcastEpisode> {}
