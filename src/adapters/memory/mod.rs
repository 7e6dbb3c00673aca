//! In-memory persistence adapters.
//!
//! Nothing survives a restart. Each aggregate type gets its own
//! [`InMemoryRepository`], which keeps an [`IdAllocator`] and an
//! [`EntityStore`] under one lock.

mod entity_store;
mod id_allocator;
mod repository;

pub use entity_store::EntityStore;
pub use id_allocator::IdAllocator;
pub use repository::InMemoryRepository;
