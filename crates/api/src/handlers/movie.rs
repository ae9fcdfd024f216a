//! Handlers for the `/movies` resource.
//!
//! Extractor rejections are taken as `Result` so malformed bodies and
//! non-integer ids answer with the catalog's own error shape.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use catalog_core::movie::{MovieInput, MovieRecord};
use catalog_core::types::DbId;

use crate::error::AppResult;
use crate::state::AppState;

/// POST /movies
pub async fn create(
    State(state): State<AppState>,
    input: Result<Json<MovieInput>, JsonRejection>,
) -> AppResult<(StatusCode, Json<MovieRecord>)> {
    let Json(input) = input?;
    let movie = state.movies.create_movie(&input).await?;
    tracing::info!(movie_id = ?movie.id, title = %movie.title, "Movie created");
    Ok((StatusCode::CREATED, Json(movie)))
}

/// GET /movies/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    id: Result<Path<DbId>, PathRejection>,
) -> AppResult<Json<MovieRecord>> {
    let Path(id) = id?;
    let movie = state.movies.get_movie(id).await?;
    Ok(Json(movie))
}

/// PUT /movies/{id}
pub async fn update(
    State(state): State<AppState>,
    id: Result<Path<DbId>, PathRejection>,
    input: Result<Json<MovieInput>, JsonRejection>,
) -> AppResult<Json<MovieRecord>> {
    let Path(id) = id?;
    let Json(input) = input?;
    let movie = state.movies.update_movie(id, &input).await?;
    tracing::info!(movie_id = id, title = %movie.title, "Movie updated");
    Ok(Json(movie))
}

/// DELETE /movies/{id}
pub async fn delete(
    State(state): State<AppState>,
    id: Result<Path<DbId>, PathRejection>,
) -> AppResult<StatusCode> {
    let Path(id) = id?;
    state.movies.delete_movie(id).await?;
    tracing::info!(movie_id = id, "Movie deleted");
    Ok(StatusCode::NO_CONTENT)
}
