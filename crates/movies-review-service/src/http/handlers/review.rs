use crate::board::ReviewUpdate;
use crate::http::error::Result;
use crate::http::model::ListReviewsQuery;
use crate::http::state::AppState;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use movies_core::Review;

pub async fn create_review_handler(
    State(state): State<AppState>,
    Json(review): Json<Review>,
) -> Result<(StatusCode, Json<Review>)> {
    let review = state.board().create(review).await?;
    Ok((StatusCode::CREATED, Json(review)))
}

pub async fn list_reviews_handler(
    State(state): State<AppState>,
    Query(query): Query<ListReviewsQuery>,
) -> Result<Json<Vec<Review>>> {
    let reviews = state.board().list(query.movie_info_id).await?;
    Ok(Json(reviews))
}

pub async fn get_review_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Review>> {
    let review = state.board().get(&id).await?;
    Ok(Json(review))
}

pub async fn update_review_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
    Json(update): Json<ReviewUpdate>,
) -> Result<Json<Review>> {
    let review = state.board().update(&id, update).await?;
    Ok(Json(review))
}

pub async fn delete_review_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode> {
    state.board().delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
