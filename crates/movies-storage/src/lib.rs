//! Repository implementations for the movie services.
//!
//! [`InMemoryRepository`] keeps records in process memory and is used for
//! development and tests. [`MongoRepository`] persists records in a MongoDB
//! collection.

pub mod id;
pub mod memory;
pub mod mongo;

pub use memory::InMemoryRepository;
pub use mongo::MongoRepository;
pub use movies_core::repository::{ReadRepository, Repository};
pub use movies_core::StorageError;
