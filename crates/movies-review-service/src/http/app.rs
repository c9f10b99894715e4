use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::http::handlers::{
    create_review_handler, delete_review_handler, get_review_handler, health_handler,
    hello_world_handler, list_reviews_handler, update_review_handler,
};
use crate::http::state::AppState;

pub struct App {}

impl App {
    pub fn router(state: AppState) -> Router {
        Router::new()
            .route("/health", get(health_handler))
            .route("/v1/helloworld", get(hello_world_handler))
            .route(
                "/v1/reviews",
                get(list_reviews_handler).post(create_review_handler),
            )
            .route(
                "/v1/reviews/{id}",
                get(get_review_handler)
                    .put(update_review_handler)
                    .delete(delete_review_handler),
            )
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{ReviewBoard, ReviewService, ReviewUpdate};
    use crate::error::ServiceError;
    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request, StatusCode};
    use movies_core::{Review, StorageError};
    use movies_storage::InMemoryRepository;
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;

    const REVIEWS_URI: &str = "/v1/reviews";

    fn test_app() -> Router {
        let board = ReviewService::new(InMemoryRepository::<Review>::new());
        App::router(AppState::new(Arc::new(board)))
    }

    /// Board whose every operation fails with the given storage error.
    struct FailingBoard(StorageError);

    impl FailingBoard {
        fn fail<T>(&self) -> crate::error::Result<T> {
            Err(ServiceError::from(self.0.clone()))
        }
    }

    #[async_trait]
    impl ReviewBoard for FailingBoard {
        async fn create(&self, _review: Review) -> crate::error::Result<Review> {
            self.fail()
        }

        async fn list(&self, _movie_info_id: Option<i64>) -> crate::error::Result<Vec<Review>> {
            self.fail()
        }

        async fn get(&self, _id: &str) -> crate::error::Result<Review> {
            self.fail()
        }

        async fn update(&self, _id: &str, _update: ReviewUpdate) -> crate::error::Result<Review> {
            self.fail()
        }

        async fn delete(&self, _id: &str) -> crate::error::Result<bool> {
            self.fail()
        }
    }

    fn failing_app(error: StorageError) -> Router {
        App::router(AppState::new(Arc::new(FailingBoard(error))))
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Vec<u8>) {
        let request = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => request
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string())),
            None => request.body(Body::empty()),
        }
        .unwrap();

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, bytes.to_vec())
    }

    fn json_body(bytes: &[u8]) -> Value {
        serde_json::from_slice(bytes).unwrap()
    }

    async fn create(app: &Router, body: Value) -> Value {
        let (status, bytes) = send(app, Method::POST, REVIEWS_URI, Some(body)).await;
        assert_eq!(status, StatusCode::CREATED);
        json_body(&bytes)
    }

    #[tokio::test]
    async fn health_and_hello_world() {
        let app = test_app();

        let (status, bytes) = send(&app, Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json_body(&bytes), json!({ "status": "ok" }));

        let (status, bytes) = send(&app, Method::GET, "/v1/helloworld", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(String::from_utf8(bytes).unwrap(), "Hello World");
    }

    #[tokio::test]
    async fn review_lifecycle() {
        let app = test_app();

        let created = create(
            &app,
            json!({ "reviewId": "abc", "movieInfoId": 1, "comment": "Awesome Movie", "rating": 9.0 }),
        )
        .await;
        let id = created["reviewId"].as_str().unwrap().to_string();
        assert_ne!(id, "abc");
        assert_eq!(created["movieInfoId"], 1);
        assert_eq!(created["comment"], "Awesome Movie");
        assert_eq!(created["rating"], 9.0);

        let uri = format!("{REVIEWS_URI}/{id}");
        let (status, bytes) = send(&app, Method::GET, &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json_body(&bytes), created);

        let (status, bytes) = send(
            &app,
            Method::PUT,
            &uri,
            Some(json!({ "movieInfoId": 2, "comment": "Not an Awesome Movie", "rating": 8.0 })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let updated = json_body(&bytes);
        assert_eq!(updated["reviewId"], id.as_str());
        assert_eq!(updated["movieInfoId"], 1);
        assert_eq!(updated["comment"], "Not an Awesome Movie");
        assert_eq!(updated["rating"], 8.0);

        let (status, bytes) = send(&app, Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        assert!(bytes.is_empty());

        let (status, bytes) = send(&app, Method::GET, &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(bytes.is_empty());
    }

    #[tokio::test]
    async fn create_defaults_comment_and_rating() {
        let app = test_app();

        let created = create(&app, json!({ "movieInfoId": 7 })).await;
        assert_eq!(created["comment"], "");
        assert_eq!(created["rating"], 0.0);
    }

    #[tokio::test]
    async fn list_all_and_by_movie() {
        let app = test_app();

        create(&app, json!({ "movieInfoId": 1, "comment": "Awesome Movie", "rating": 9.0 })).await;
        create(&app, json!({ "movieInfoId": 1, "comment": "Awesome Movie1", "rating": 9.0 })).await;
        create(&app, json!({ "movieInfoId": 2, "comment": "Excellent Movie", "rating": 8.0 })).await;

        let (status, bytes) = send(&app, Method::GET, REVIEWS_URI, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json_body(&bytes).as_array().unwrap().len(), 3);

        let (status, bytes) = send(&app, Method::GET, "/v1/reviews?movieInfoId=1", None).await;
        assert_eq!(status, StatusCode::OK);
        let found = json_body(&bytes);
        let found = found.as_array().unwrap();
        assert_eq!(found.len(), 2);
        assert!(found.iter().all(|r| r["movieInfoId"] == 1));

        let (status, bytes) = send(&app, Method::GET, "/v1/reviews?movieInfoId=3", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json_body(&bytes), json!([]));
    }

    #[tokio::test]
    async fn update_unknown_is_not_found() {
        let app = test_app();

        let (status, bytes) = send(
            &app,
            Method::PUT,
            "/v1/reviews/nope",
            Some(json!({ "comment": "Not an Awesome Movie", "rating": 8.0 })),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(bytes.is_empty());
    }

    #[tokio::test]
    async fn delete_unknown_is_no_content() {
        let app = test_app();

        let (status, _) = send(&app, Method::DELETE, "/v1/reviews/never-existed", None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn create_without_movie_reference_is_rejected() {
        let app = test_app();

        let (status, _) = send(&app, Method::POST, REVIEWS_URI, Some(json!({ "comment": "?" }))).await;
        assert!(status.is_client_error());
    }

    #[tokio::test]
    async fn storage_failure_is_empty_internal_error() {
        let app = failing_app(StorageError::Timeout("server selection timed out".to_string()));

        let (status, bytes) = send(&app, Method::GET, "/v1/reviews?movieInfoId=1", None).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(bytes.is_empty());

        let (status, bytes) = send(&app, Method::DELETE, "/v1/reviews/abc", None).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(bytes.is_empty());
    }

    #[tokio::test]
    async fn storage_not_found_is_empty_not_found() {
        let app = failing_app(StorageError::NotFound("abc".to_string()));

        let (status, bytes) = send(
            &app,
            Method::PUT,
            "/v1/reviews/abc",
            Some(json!({ "comment": "Not an Awesome Movie", "rating": 8.0 })),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(bytes.is_empty());
    }
}
