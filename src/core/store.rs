//! Store trait for entity collections

use crate::core::Entity;
use anyhow::Result;

/// A collection of entities addressed by id.
///
/// Implementations own the entities; callers get clones. Lookups are by
/// exact id match and list order is insertion order. Errors are storage
/// faults only: a missing entity is `Ok(None)`, never an error.
pub trait CollectionStore<T: Entity>: Send + Sync {
    /// All entities, in insertion order
    fn list(&self) -> Result<Vec<T>>;

    /// Find an entity by id
    fn find(&self, id: &str) -> Result<Option<T>>;

    /// Append a new entity, rejecting a duplicate id
    fn insert(&self, entity: T) -> Result<T>;

    /// Overwrite the entity with the same id
    ///
    /// Returns the previous value, or `None` when no entity has that id.
    fn replace(&self, entity: T) -> Result<Option<T>>;

    /// Remove an entity by id, returning it if it was present
    fn remove(&self, id: &str) -> Result<Option<T>>;

    /// Number of stored entities
    fn len(&self) -> Result<usize> {
        Ok(self.list()?.len())
    }

    /// Whether the collection is empty
    fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}
