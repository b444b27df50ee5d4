pub mod api;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod db;
pub mod entities;
pub mod models;
pub mod services;

use std::path::Path;

use anyhow::Context;
use clap::Parser;
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use catalog::build_source;
pub use config::Config;
use models::SeriesKind;
use services::CatalogService;

pub async fn run() -> anyhow::Result<()> {
    let config = Config::load()?;
    config.validate()?;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level));

    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = cli::Cli::parse();

    match cli.command {
        Some(cli::Commands::Check) => run_check(config).await,
        Some(cli::Commands::Export { out }) => run_export(config, &out).await,
        Some(cli::Commands::Serve) | None => run_server(config).await,
    }
}

async fn run_server(config: Config) -> anyhow::Result<()> {
    let state = api::create_app_state(config).await?;

    // Catch broken season/episode references before accepting traffic.
    for kind in [SeriesKind::Show, SeriesKind::Anime] {
        state
            .catalog
            .verify_relations(kind)
            .await
            .with_context(|| format!("Content integrity check failed for {kind} collections"))?;
    }

    let port = state.config.server.port;
    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    let app = api::router(state);

    let server_handle = tokio::spawn(async move {
        info!("Catalog API running at http://{addr}");
        if let Err(e) = axum::serve(listener, app).await {
            error!("Web server error: {e}");
        }
    });

    match signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => error!("Error listening for shutdown: {e}"),
    }

    server_handle.abort();
    info!("Server stopped");

    Ok(())
}

async fn run_check(config: Config) -> anyhow::Result<()> {
    let source = build_source(&config).await?;

    let movies = source.movies().await?;
    info!("movies: {} records", movies.len());

    for kind in [SeriesKind::Show, SeriesKind::Anime] {
        let series = source.series(kind).await?;
        let seasons = source.seasons(kind).await?;
        let episodes = source.episodes(kind).await?;
        info!(
            "{kind}: {} series, {} seasons, {} episodes",
            series.len(),
            seasons.len(),
            episodes.len()
        );
    }

    let service = CatalogService::new(source);
    for kind in [SeriesKind::Show, SeriesKind::Anime] {
        service
            .verify_relations(kind)
            .await
            .with_context(|| format!("Relation check failed for {kind} collections"))?;
    }

    info!("Content check passed");
    Ok(())
}

async fn run_export(config: Config, out: &Path) -> anyhow::Result<()> {
    let service = CatalogService::new(build_source(&config).await?);

    std::fs::create_dir_all(out)
        .with_context(|| format!("Failed to create output directory: {}", out.display()))?;

    let movies = service.public_movies().await?;
    std::fs::write(out.join("movies.json"), serde_json::to_vec(&movies)?)?;

    let shows = service.public_series(SeriesKind::Show).await?;
    std::fs::write(out.join("shows.json"), serde_json::to_vec(&shows)?)?;

    let anime = service.public_series(SeriesKind::Anime).await?;
    std::fs::write(out.join("anime.json"), serde_json::to_vec(&anime)?)?;

    info!(
        "Exported {} movies, {} shows, {} anime to {}",
        movies.len(),
        shows.len(),
        anime.len(),
        out.display()
    );
    Ok(())
}
