use crate::id::next_id;
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, Bson, Document};
use mongodb::error::ErrorKind;
use mongodb::{Client, Collection, Database, IndexModel};
use movies_core::error::{Result, StorageError};
use movies_core::record::Record;
use movies_core::repository::{ReadRepository, Repository};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// On-disk shape of a record: the id lives in `_id`, every other field is
/// stored inline exactly as the record serializes it.
#[derive(Debug, Serialize, Deserialize)]
struct Stored<T> {
    #[serde(rename = "_id")]
    id: String,
    #[serde(flatten)]
    record: T,
}

impl<T: Record> Stored<T> {
    fn new(id: String, mut record: T) -> Self {
        record.set_id(None);
        Self { id, record }
    }

    fn into_record(self) -> T {
        self.record.with_id(self.id)
    }
}

/// MongoDB implementation of the repository contract.
///
/// Each record kind lives in the collection named by [`Record::COLLECTION`].
/// Ids are generated client side and stored as strings in `_id`.
#[derive(Debug, Clone)]
pub struct MongoRepository<T: Record> {
    collection: Collection<Stored<T>>,
}

impl<T: Record> MongoRepository<T>
where
    T::Index: Into<Bson>,
{
    /// Creates a repository over the record's collection in `database`.
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection(T::COLLECTION),
        }
    }

    /// Creates a repository by opening a new client for `uri`.
    pub async fn connect(uri: &str, database: &str) -> Result<Self> {
        let client = Client::with_uri_str(uri).await.map_err(map_mongo_error)?;
        Ok(Self::new(&client.database(database)))
    }

    /// Creates an ascending index on the filterable field.
    ///
    /// Safe to call repeatedly; MongoDB ignores an identical existing index.
    pub async fn ensure_index(&self) -> Result<()> {
        let mut keys = Document::new();
        keys.insert(T::INDEX_FIELD, 1);
        let index = IndexModel::builder().keys(keys).build();
        self.collection
            .create_index(index)
            .await
            .map_err(map_mongo_error)?;
        debug!(
            collection = T::COLLECTION,
            field = T::INDEX_FIELD,
            "ensured index"
        );
        Ok(())
    }

    /// Returns a reference to the underlying collection name.
    pub fn collection_name(&self) -> &str {
        self.collection.name()
    }

    async fn find_many(&self, filter: Document) -> Result<Vec<T>> {
        let cursor = self
            .collection
            .find(filter)
            .await
            .map_err(map_mongo_error)?;
        let stored: Vec<Stored<T>> = cursor.try_collect().await.map_err(map_mongo_error)?;
        Ok(stored.into_iter().map(Stored::into_record).collect())
    }
}

fn map_mongo_error(err: mongodb::error::Error) -> StorageError {
    let message = err.to_string();

    match err.kind.as_ref() {
        ErrorKind::Io(io) if io.kind() == std::io::ErrorKind::TimedOut => {
            StorageError::Timeout(message)
        }
        ErrorKind::ServerSelection { .. }
        | ErrorKind::ConnectionPoolCleared { .. }
        | ErrorKind::Io(_)
        | ErrorKind::DnsResolve { .. } => StorageError::Unavailable(message),
        ErrorKind::BsonDeserialization(_) | ErrorKind::BsonSerialization(_) => {
            StorageError::InvalidData(message)
        }
        ErrorKind::Command(_) | ErrorKind::Write(_) => StorageError::Query(message),
        _ => StorageError::Operation(message),
    }
}

#[async_trait]
impl<T: Record> ReadRepository<T> for MongoRepository<T>
where
    T::Index: Into<Bson>,
{
    async fn find_all(&self) -> Result<Vec<T>> {
        self.find_many(doc! {}).await
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<T>> {
        let stored = self
            .collection
            .find_one(doc! { "_id": id })
            .await
            .map_err(map_mongo_error)?;

        Ok(stored.map(Stored::into_record))
    }

    async fn find_by_index(&self, value: &T::Index) -> Result<Vec<T>> {
        let value: Bson = value.clone().into();
        let mut filter = Document::new();
        filter.insert(T::INDEX_FIELD, value);
        self.find_many(filter).await
    }
}

#[async_trait]
impl<T: Record> Repository<T> for MongoRepository<T>
where
    T::Index: Into<Bson>,
{
    async fn insert(&self, record: T) -> Result<T> {
        let stored = Stored::new(next_id(), record);

        self.collection
            .insert_one(&stored)
            .await
            .map_err(map_mongo_error)?;

        Ok(stored.into_record())
    }

    async fn update(&self, record: T) -> Result<T> {
        let Some(id) = record.id().map(str::to_owned) else {
            return Err(StorageError::NotFound("record has no id".to_string()));
        };

        let stored = Stored::new(id.clone(), record);
        let result = self
            .collection
            .replace_one(doc! { "_id": id.as_str() }, &stored)
            .await
            .map_err(map_mongo_error)?;

        // replace_one without upsert leaves unknown ids untouched.
        if result.matched_count == 0 {
            return Err(StorageError::NotFound(id));
        }

        Ok(stored.into_record())
    }

    async fn delete_by_id(&self, id: &str) -> Result<bool> {
        let result = self
            .collection
            .delete_one(doc! { "_id": id })
            .await
            .map_err(map_mongo_error)?;

        Ok(result.deleted_count > 0)
    }
}
