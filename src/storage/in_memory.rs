//! In-memory implementation of CollectionStore

use crate::core::{CollectionStore, Entity};
use anyhow::{Result, anyhow, bail};
use std::sync::{Arc, RwLock};

/// In-memory collection backed by a vector.
///
/// Cloning shares the underlying collection. Uses RwLock for thread-safe
/// access; every operation holds the lock only for its own duration.
#[derive(Clone)]
pub struct InMemoryCollection<T: Entity> {
    items: Arc<RwLock<Vec<T>>>,
}

impl<T: Entity> InMemoryCollection<T> {
    /// Create an empty collection
    pub fn new() -> Self {
        Self {
            items: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Create a collection pre-populated with `seed`
    ///
    /// Fails if two seed entities share an id.
    pub fn with_seed(seed: impl IntoIterator<Item = T>) -> Result<Self> {
        let store = Self::new();
        for entity in seed {
            store.insert(entity)?;
        }
        Ok(store)
    }
}

impl<T: Entity> Default for InMemoryCollection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> CollectionStore<T> for InMemoryCollection<T> {
    fn list(&self) -> Result<Vec<T>> {
        let items = self
            .items
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(items.clone())
    }

    fn find(&self, id: &str) -> Result<Option<T>> {
        let items = self
            .items
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(items.iter().find(|item| item.id() == id).cloned())
    }

    fn insert(&self, entity: T) -> Result<T> {
        let mut items = self
            .items
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        if items.iter().any(|item| item.id() == entity.id()) {
            bail!(
                "{} with id '{}' already exists",
                T::resource_name_singular(),
                entity.id()
            );
        }
        items.push(entity.clone());

        Ok(entity)
    }

    fn replace(&self, entity: T) -> Result<Option<T>> {
        let mut items = self
            .items
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        Ok(items
            .iter_mut()
            .find(|item| item.id() == entity.id())
            .map(|slot| std::mem::replace(slot, entity)))
    }

    fn remove(&self, id: &str) -> Result<Option<T>> {
        let mut items = self
            .items
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        let index = items.iter().position(|item| item.id() == id);

        Ok(index.map(|index| items.remove(index)))
    }

    fn len(&self) -> Result<usize> {
        let items = self
            .items
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(items.len())
    }
}
