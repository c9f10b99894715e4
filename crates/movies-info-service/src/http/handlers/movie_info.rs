use crate::http::error::Result;
use crate::http::model::ListMovieInfosQuery;
use crate::http::state::AppState;
use crate::validation::MovieInfoDraft;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use movies_core::MovieInfo;

pub async fn create_movie_info_handler(
    State(state): State<AppState>,
    Json(draft): Json<MovieInfoDraft>,
) -> Result<(StatusCode, Json<MovieInfo>)> {
    let movie = state.catalog().create(draft).await?;
    Ok((StatusCode::CREATED, Json(movie)))
}

pub async fn list_movie_infos_handler(
    State(state): State<AppState>,
    Query(query): Query<ListMovieInfosQuery>,
) -> Result<Json<Vec<MovieInfo>>> {
    let movies = state.catalog().list(query.year).await?;
    Ok(Json(movies))
}

pub async fn get_movie_info_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<MovieInfo>> {
    let movie = state.catalog().get(&id).await?;
    Ok(Json(movie))
}

pub async fn update_movie_info_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
    Json(draft): Json<MovieInfoDraft>,
) -> Result<Json<MovieInfo>> {
    let movie = state.catalog().update(&id, draft).await?;
    Ok(Json(movie))
}

pub async fn delete_movie_info_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode> {
    state.catalog().delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
