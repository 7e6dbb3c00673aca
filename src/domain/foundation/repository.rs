//! Base repository trait for persistence operations.
//!
//! This module provides the generic `Repository<T, ID>` trait that defines
//! the standard CRUD interface for all aggregate repositories, plus the
//! `AggregateRoot` trait every stored entity implements.
//!
//! # Identity
//!
//! Repositories own identity allocation. New aggregates are created through
//! [`Repository::insert_with`], which hands the builder the next identifier
//! and stores the result in one step, so an identifier is never observed
//! without its entity and is never issued twice.
//!
//! # Example
//!
//! ```ignore
//! // Domain-specific repository extends the base trait
//! #[async_trait]
//! pub trait MentorshipRepository: Repository<Mentorship, MentorshipId> {
//!     async fn find_by_client(&self, client_id: ClientId) -> Result<Vec<Mentorship>, DomainError>;
//! }
//!
//! // The handler only needs to know about the trait
//! pub struct CreateMentorshipHandler {
//!     mentorships: Arc<dyn MentorshipRepository>,
//! }
//! ```

use async_trait::async_trait;
use std::fmt::Debug;

use super::{DomainError, SequentialId};

/// An entity with its own identity and store.
pub trait AggregateRoot: Clone + Send + Sync + 'static {
    type Id: SequentialId;

    /// Returns the aggregate identifier.
    fn id(&self) -> Self::Id;
}

/// Builds an aggregate once its identifier has been allocated.
pub type EntityBuilder<T, ID> = Box<dyn FnOnce(ID) -> T + Send>;

/// Base trait for aggregate repositories.
///
/// Provides standard CRUD operations that all repositories share.
/// Domain-specific repositories should extend this trait with
/// additional query methods.
///
/// # Type Parameters
///
/// - `T`: The aggregate root type being persisted
/// - `ID`: The identifier type for the aggregate (e.g., `ClientId`)
///
/// # Missing Identifiers
///
/// Looking up, updating or deleting an unknown identifier is not an
/// infrastructure failure: `find_by_id` returns `Ok(None)` and `delete`
/// returns `Ok(false)`. `update` of an unknown aggregate returns a
/// `NotFound` error because callers always load before they update.
#[async_trait]
pub trait Repository<T, ID>: Send + Sync
where
    T: Send + Sync,
    ID: Send + Sync + Debug + 'static,
{
    /// Allocates the next identifier, builds the aggregate with it and
    /// stores it, atomically.
    async fn insert_with(&self, build: EntityBuilder<T, ID>) -> Result<T, DomainError>;

    /// Finds an aggregate by its unique identifier.
    ///
    /// Returns `Ok(None)` if the aggregate doesn't exist.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, DomainError>;

    /// Returns every stored aggregate.
    ///
    /// The order is an implementation detail; callers that need an order
    /// must sort.
    async fn find_all(&self) -> Result<Vec<T>, DomainError>;

    /// Replaces an existing aggregate.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the aggregate doesn't exist
    async fn update(&self, entity: &T) -> Result<(), DomainError>;

    /// Deletes an aggregate by its identifier.
    ///
    /// Returns `true` if an aggregate existed and was removed.
    async fn delete(&self, id: ID) -> Result<bool, DomainError>;

    /// Checks if an aggregate with the given ID exists.
    ///
    /// Default implementation uses `find_by_id`.
    async fn exists(&self, id: ID) -> Result<bool, DomainError> {
        Ok(self.find_by_id(id).await?.is_some())
    }
}
