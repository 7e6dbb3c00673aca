//! Identifier-keyed map of entities.

use std::collections::BTreeMap;

use crate::domain::foundation::AggregateRoot;

/// Holds the live entities of one aggregate type.
///
/// Iteration follows identifier order, which is also insertion order since
/// identifiers only grow. Callers that need a business ordering sort.
#[derive(Debug, Clone)]
pub struct EntityStore<T: AggregateRoot> {
    entities: BTreeMap<T::Id, T>,
}

impl<T: AggregateRoot> EntityStore<T> {
    pub fn new() -> Self {
        Self {
            entities: BTreeMap::new(),
        }
    }

    /// Inserts or replaces the entity stored under `id`.
    pub fn put(&mut self, id: T::Id, entity: T) {
        self.entities.insert(id, entity);
    }

    pub fn get(&self, id: &T::Id) -> Option<&T> {
        self.entities.get(id)
    }

    pub fn contains(&self, id: &T::Id) -> bool {
        self.entities.contains_key(id)
    }

    /// Removes the entity. Returns whether one existed.
    pub fn delete(&mut self, id: &T::Id) -> bool {
        self.entities.remove(id).is_some()
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.entities.values()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

impl<T: AggregateRoot> Default for EntityStore<T> {
    fn default() -> Self {
        Self::new()
    }
}
