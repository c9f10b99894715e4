use crate::id::next_id;
use async_trait::async_trait;
use dashmap::DashMap;
use movies_core::error::{Result, StorageError};
use movies_core::record::Record;
use movies_core::repository::{ReadRepository, Repository};

/// In-memory implementation of the Repository trait using DashMap.
///
/// DashMap provides better concurrency than RwLock<HashMap> because it
/// uses sharded locks, allowing concurrent reads and writes to different
/// buckets without blocking.
#[derive(Debug, Clone)]
pub struct InMemoryRepository<T: Record> {
    storage: DashMap<String, T>,
}

impl<T: Record> InMemoryRepository<T> {
    /// Creates a new in-memory repository.
    pub fn new() -> Self {
        Self {
            storage: DashMap::new(),
        }
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }
}

impl<T: Record> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Record> ReadRepository<T> for InMemoryRepository<T> {
    async fn find_all(&self) -> Result<Vec<T>> {
        Ok(self
            .storage
            .iter()
            .map(|entry| entry.value().clone())
            .collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<T>> {
        Ok(self.storage.get(id).map(|entry| entry.value().clone()))
    }

    async fn find_by_index(&self, value: &T::Index) -> Result<Vec<T>> {
        Ok(self
            .storage
            .iter()
            .filter(|entry| entry.value().index() == value)
            .map(|entry| entry.value().clone())
            .collect())
    }
}

#[async_trait]
impl<T: Record> Repository<T> for InMemoryRepository<T> {
    async fn insert(&self, record: T) -> Result<T> {
        let id = next_id();
        let record = record.with_id(id.clone());

        self.storage.insert(id, record.clone());
        Ok(record)
    }

    async fn update(&self, record: T) -> Result<T> {
        let Some(id) = record.id() else {
            return Err(StorageError::NotFound("record has no id".to_string()));
        };

        // Only overwrite ids that are already stored; never upsert.
        let Some(mut entry) = self.storage.get_mut(id) else {
            return Err(StorageError::NotFound(id.to_string()));
        };

        *entry = record.clone();
        Ok(record)
    }

    async fn delete_by_id(&self, id: &str) -> Result<bool> {
        Ok(self.storage.remove(id).is_some())
    }
}
