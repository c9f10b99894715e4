use crate::error::Result;
use crate::record::Record;
use async_trait::async_trait;

/// A read-only view of a repository.
///
/// Lookups never fail for missing data: an unknown id is `Ok(None)` and a
/// filter without matches is an empty vector.
#[async_trait]
pub trait ReadRepository<T: Record>: Send + Sync + 'static {
    /// Returns every stored record. No ordering is guaranteed.
    async fn find_all(&self) -> Result<Vec<T>>;

    /// Retrieves the record with the given id.
    /// Returns `None` if the id does not exist.
    async fn find_by_id(&self, id: &str) -> Result<Option<T>>;

    /// Returns every record whose indexed field equals `value`.
    async fn find_by_index(&self, value: &T::Index) -> Result<Vec<T>>;
}

#[async_trait]
pub trait Repository<T: Record>: ReadRepository<T> {
    /// Stores a new record under a freshly assigned id and returns the stored copy.
    ///
    /// Any id already present on `record` is discarded.
    async fn insert(&self, record: T) -> Result<T>;

    /// Overwrites an existing record in full.
    ///
    /// Returns `Err(NotFound)` if the record carries no id or the id is not stored.
    async fn update(&self, record: T) -> Result<T>;

    /// Deletes the record with the given id.
    /// Returns `true` if the record existed and was removed.
    async fn delete_by_id(&self, id: &str) -> Result<bool>;
}
