//! Core types and traits for the movie services.
//!
//! This crate provides the entity model and the repository contract shared
//! by the movie-info catalog service and the movie review service.

pub mod error;
pub mod movie_info;
pub mod record;
pub mod repository;
pub mod review;

pub use error::StorageError;
pub use movie_info::MovieInfo;
pub use record::Record;
pub use repository::{ReadRepository, Repository};
pub use review::Review;
