use axum::{Json, extract::State};
use std::sync::Arc;

use super::{ApiError, ApiResponse, AppState, SystemStatusDto};
use crate::models::SeriesKind;

/// `GET /api/system/status`
pub async fn get_status(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<SystemStatusDto>>, ApiError> {
    let movies = state.catalog.public_movies().await?.len();
    let shows = state.catalog.public_series(SeriesKind::Show).await?.len();
    let anime = state.catalog.public_series(SeriesKind::Anime).await?.len();

    let status = SystemStatusDto {
        name: "vodarr",
        version: env!("CARGO_PKG_VERSION"),
        source_mode: state.config.source.mode.to_string(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        movies,
        shows,
        anime,
    };

    Ok(Json(ApiResponse::success(status)))
}
