//! Movie-info catalog service.
//!
//! The [`Catalog`] trait is the operation surface used by the HTTP layer;
//! [`CatalogService`] implements it on top of any
//! [`Repository`](movies_core::Repository) of [`MovieInfo`](movies_core::MovieInfo).

pub mod catalog;
pub mod error;
pub mod http;
pub mod validation;

pub use catalog::{Catalog, CatalogService};
pub use error::ServiceError;
pub use validation::{MovieInfoDraft, ValidationError};
