use axum::{Json, extract::State};
use std::sync::Arc;

use super::{ApiError, AppState, MovieDto, SeriesDto};
use crate::models::SeriesKind;

/// `GET /api/movies.json`
pub async fn get_movies(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<MovieDto>>, ApiError> {
    Ok(Json(state.catalog.public_movies().await?))
}

/// `GET /api/shows.json`
pub async fn get_shows(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<SeriesDto>>, ApiError> {
    Ok(Json(state.catalog.public_series(SeriesKind::Show).await?))
}

/// `GET /api/anime.json`
pub async fn get_anime(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<SeriesDto>>, ApiError> {
    Ok(Json(state.catalog.public_series(SeriesKind::Anime).await?))
}
