use axum::{Router, http::HeaderValue, routing::get};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

mod catalog;
mod error;
mod system;
mod types;

pub use error::ApiError;
pub use types::*;

use crate::config::Config;
use crate::services::CatalogService;

pub struct AppState {
    pub catalog: CatalogService,

    pub config: Config,

    pub start_time: std::time::Instant,
}

/// Builds the application state from a validated config, constructing the
/// data source it selects.
pub async fn create_app_state(config: Config) -> anyhow::Result<Arc<AppState>> {
    let source = crate::catalog::build_source(&config).await?;

    Ok(Arc::new(AppState {
        catalog: CatalogService::new(source),
        config,
        start_time: std::time::Instant::now(),
    }))
}

pub fn router(state: Arc<AppState>) -> Router {
    let cors_origins = state.config.server.cors_allowed_origins.clone();

    let api_router = Router::new()
        .route("/movies.json", get(catalog::get_movies))
        .route("/shows.json", get(catalog::get_shows))
        .route("/anime.json", get(catalog::get_anime))
        .route("/system/status", get(system::get_status))
        .with_state(state);

    let cors_layer = if cors_origins.contains(&"*".to_string()) {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> =
            cors_origins.iter().filter_map(|s| s.parse().ok()).collect();
        CorsLayer::new().allow_origin(origins)
    };

    Router::new()
        .nest("/api", api_router)
        .layer(cors_layer.allow_methods(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
}
