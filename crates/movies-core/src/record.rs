use serde::de::DeserializeOwned;
use serde::Serialize;

/// A persisted entity addressed by a store-assigned string id.
///
/// Every record kind lives in its own collection and exposes exactly one
/// field that list operations can filter on by equality.
pub trait Record: Clone + Send + Sync + Unpin + Serialize + DeserializeOwned + 'static {
    /// Type of the equality-filterable field.
    type Index: Clone + PartialEq + Send + Sync + 'static;

    /// Name of the collection holding records of this kind.
    const COLLECTION: &'static str;

    /// Stored name of the equality-filterable field.
    const INDEX_FIELD: &'static str;

    /// Returns the id, or `None` if the record has never been persisted.
    fn id(&self) -> Option<&str>;

    /// Replaces the id.
    fn set_id(&mut self, id: Option<String>);

    /// Returns the value of the equality-filterable field.
    fn index(&self) -> &Self::Index;

    /// Consumes the record and returns it with the given id.
    fn with_id(mut self, id: impl Into<String>) -> Self {
        self.set_id(Some(id.into()));
        self
    }
}
