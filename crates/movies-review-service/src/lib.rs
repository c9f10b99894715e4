//! Movie review service.
//!
//! Reviews reference catalog movies through `movieInfoId` only; this
//! service never talks to the movie-info service.

pub mod board;
pub mod error;
pub mod http;

pub use board::{ReviewBoard, ReviewService, ReviewUpdate};
pub use error::ServiceError;
