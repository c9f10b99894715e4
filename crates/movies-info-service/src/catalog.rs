use crate::error::{Result, ServiceError};
use crate::validation::MovieInfoDraft;
use async_trait::async_trait;
use movies_core::{MovieInfo, Repository};
use std::sync::Arc;
use tracing::{info, instrument};

/// Operations of the movie-info catalog.
#[async_trait]
pub trait Catalog: Send + Sync + 'static {
    /// Validates `draft` and stores it as a new movie under a fresh id.
    async fn create(&self, draft: MovieInfoDraft) -> Result<MovieInfo>;

    /// Lists every movie, or only those released in `year` when given.
    async fn list(&self, year: Option<i32>) -> Result<Vec<MovieInfo>>;

    /// Returns `Err(NotFound)` if no movie has the given id.
    async fn get(&self, id: &str) -> Result<MovieInfo>;

    /// Overwrites name, year, cast and release date of an existing movie.
    async fn update(&self, id: &str, draft: MovieInfoDraft) -> Result<MovieInfo>;

    /// Deletes a movie. Deleting an unknown id is not an error.
    /// Returns `true` if the movie existed and was removed.
    async fn delete(&self, id: &str) -> Result<bool>;
}

/// A concrete implementation of the `Catalog` trait over a [`Repository`].
///
/// Updates are a read followed by a full overwrite and are not atomic: two
/// concurrent updates of the same id race and the last write wins.
#[derive(Debug)]
pub struct CatalogService<R> {
    repository: Arc<R>,
}

impl<R> Clone for CatalogService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: Repository<MovieInfo>> CatalogService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }
}

#[async_trait]
impl<R: Repository<MovieInfo>> Catalog for CatalogService<R> {
    #[instrument(skip_all)]
    async fn create(&self, draft: MovieInfoDraft) -> Result<MovieInfo> {
        let movie = draft.validate()?;
        let saved = self.repository.insert(movie).await?;

        info!(id = saved.id.as_deref(), name = %saved.name, "created movie info");
        Ok(saved)
    }

    #[instrument(skip(self))]
    async fn list(&self, year: Option<i32>) -> Result<Vec<MovieInfo>> {
        let movies = match year {
            Some(year) => self.repository.find_by_index(&year).await?,
            None => self.repository.find_all().await?,
        };
        Ok(movies)
    }

    #[instrument(skip(self))]
    async fn get(&self, id: &str) -> Result<MovieInfo> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(id.to_string()))
    }

    #[instrument(skip(self, draft))]
    async fn update(&self, id: &str, draft: MovieInfoDraft) -> Result<MovieInfo> {
        let changes = draft.validate()?;
        let mut movie = self.get(id).await?;

        movie.name = changes.name;
        movie.year = changes.year;
        movie.cast = changes.cast;
        movie.release_date = changes.release_date;

        let saved = self.repository.update(movie).await?;
        info!(id, "updated movie info");
        Ok(saved)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: &str) -> Result<bool> {
        let deleted = self.repository.delete_by_id(id).await?;
        info!(id, deleted, "deleted movie info");
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil::date;
    use movies_storage::InMemoryRepository;

    fn test_service() -> CatalogService<InMemoryRepository<MovieInfo>> {
        CatalogService::new(InMemoryRepository::new())
    }

    fn draft(name: &str, year: i32, cast: &[&str]) -> MovieInfoDraft {
        MovieInfoDraft {
            id: None,
            name: Some(name.to_string()),
            year: Some(year),
            cast: Some(cast.iter().map(|c| Some(c.to_string())).collect()),
            release_date: None,
        }
    }

    #[tokio::test]
    async fn create_assigns_id_and_keeps_fields() {
        let service = test_service();

        let mut input = draft("Batman Begins", 2005, &["Christian Bale", "Michael Cane"]);
        input.release_date = Some(date(2005, 6, 15));
        input.id = Some("abc".to_string());

        let saved = service.create(input).await.unwrap();
        let id = saved.id.clone().unwrap();
        assert!(!id.is_empty());
        assert_ne!(id, "abc");
        assert_eq!(saved.name, "Batman Begins");
        assert_eq!(saved.year, 2005);
        assert_eq!(saved.cast, ["Christian Bale", "Michael Cane"]);
        assert_eq!(saved.release_date, Some(date(2005, 6, 15)));

        assert_eq!(service.get(&id).await.unwrap(), saved);
    }

    #[tokio::test]
    async fn create_rejects_invalid_draft() {
        let service = test_service();

        let err = service.create(draft("", 2005, &[])).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
        assert!(service.list(None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn list_filters_by_year() {
        let service = test_service();

        service.create(draft("Batman Begins", 2005, &["A"])).await.unwrap();
        service.create(draft("Kingdom of Heaven", 2005, &["B"])).await.unwrap();
        service.create(draft("The Dark Knight", 2008, &["C"])).await.unwrap();

        assert_eq!(service.list(None).await.unwrap().len(), 3);

        let found = service.list(Some(2005)).await.unwrap();
        assert_eq!(found.len(), 2);
        assert!(found.iter().all(|m| m.year == 2005));

        assert!(service.list(Some(1999)).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn get_unknown_is_not_found() {
        let service = test_service();

        let err = service.get("nope").await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn update_overwrites_mutable_fields() {
        let service = test_service();
        let saved = service.create(draft("Inception", 2010, &["A"])).await.unwrap();
        let id = saved.id.clone().unwrap();

        let mut changes = draft("Inception (Director's Cut)", 2011, &["A", "B"]);
        changes.id = Some("other".to_string());
        changes.release_date = Some(date(2011, 7, 16));

        let updated = service.update(&id, changes).await.unwrap();
        assert_eq!(updated.id.as_deref(), Some(id.as_str()));
        assert_eq!(updated.name, "Inception (Director's Cut)");
        assert_eq!(updated.year, 2011);
        assert_eq!(updated.cast, ["A", "B"]);
        assert_eq!(updated.release_date, Some(date(2011, 7, 16)));
        assert_eq!(service.get(&id).await.unwrap(), updated);
    }

    #[tokio::test]
    async fn update_unknown_is_not_found() {
        let service = test_service();

        let err = service
            .update("nope", draft("Inception", 2010, &["A"]))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn update_validates_like_create() {
        let service = test_service();
        let saved = service.create(draft("Inception", 2010, &["A"])).await.unwrap();
        let id = saved.id.clone().unwrap();

        let err = service.update(&id, draft(" ", 2010, &["A"])).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
        assert_eq!(service.get(&id).await.unwrap().name, "Inception");
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let service = test_service();
        let saved = service.create(draft("Inception", 2010, &["A"])).await.unwrap();
        let id = saved.id.unwrap();

        assert!(service.delete(&id).await.unwrap());
        assert!(!service.delete(&id).await.unwrap());
        assert!(matches!(
            service.get(&id).await.unwrap_err(),
            ServiceError::NotFound(_)
        ));
    }
}
