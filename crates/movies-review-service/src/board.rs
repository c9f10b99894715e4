use crate::error::{Result, ServiceError};
use async_trait::async_trait;
use movies_core::{Repository, Review};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, instrument};

/// The mutable part of a review.
///
/// Clients may send a full review body; `reviewId` and `movieInfoId` are
/// ignored because a review never moves to another movie.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ReviewUpdate {
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub rating: f64,
}

/// Operations of the review service.
#[async_trait]
pub trait ReviewBoard: Send + Sync + 'static {
    /// Stores a new review under a fresh id. A client supplied id is dropped.
    async fn create(&self, review: Review) -> Result<Review>;

    /// Lists every review, or only those for `movie_info_id` when given.
    async fn list(&self, movie_info_id: Option<i64>) -> Result<Vec<Review>>;

    /// Returns `Err(NotFound)` if no review has the given id.
    async fn get(&self, id: &str) -> Result<Review>;

    /// Overwrites comment and rating of an existing review.
    async fn update(&self, id: &str, update: ReviewUpdate) -> Result<Review>;

    /// Deletes a review. Deleting an unknown id is not an error.
    /// Returns `true` if the review existed and was removed.
    async fn delete(&self, id: &str) -> Result<bool>;
}

/// A concrete implementation of the `ReviewBoard` trait over a [`Repository`].
#[derive(Debug)]
pub struct ReviewService<R> {
    repository: Arc<R>,
}

impl<R> Clone for ReviewService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: Repository<Review>> ReviewService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }
}

#[async_trait]
impl<R: Repository<Review>> ReviewBoard for ReviewService<R> {
    #[instrument(skip_all, fields(movie_info_id = review.movie_info_id))]
    async fn create(&self, mut review: Review) -> Result<Review> {
        review.review_id = None;
        let saved = self.repository.insert(review).await?;

        info!(review_id = saved.review_id.as_deref(), "created review");
        Ok(saved)
    }

    #[instrument(skip(self))]
    async fn list(&self, movie_info_id: Option<i64>) -> Result<Vec<Review>> {
        let reviews = match movie_info_id {
            Some(movie_info_id) => self.repository.find_by_index(&movie_info_id).await?,
            None => self.repository.find_all().await?,
        };
        Ok(reviews)
    }

    #[instrument(skip(self))]
    async fn get(&self, id: &str) -> Result<Review> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(id.to_string()))
    }

    #[instrument(skip(self, update))]
    async fn update(&self, id: &str, update: ReviewUpdate) -> Result<Review> {
        let mut review = self.get(id).await?;

        review.comment = update.comment;
        review.rating = update.rating;

        let saved = self.repository.update(review).await?;
        info!(id, "updated review");
        Ok(saved)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: &str) -> Result<bool> {
        let deleted = self.repository.delete_by_id(id).await?;
        info!(id, deleted, "deleted review");
        Ok(deleted)
    }
}
