//! Data-source adapters for the content catalog.
//!
//! Both deployment modes produce the same record shapes from `models`, so
//! draft filtering and projection are written once against those shapes and
//! never against a source-specific representation.

pub mod db;
pub mod file;

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::config::{Config, SourceMode};
use crate::db::Store;
use crate::models::{Episode, Movie, Season, Series, SeriesKind};

pub use db::DbCatalog;
pub use file::FileCatalog;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid content document {}: {source}", .path.display())]
    Invalid {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Season {se} of {kind} {tv} references a series that does not exist")]
    MissingSeries { kind: SeriesKind, tv: i64, se: i64 },

    #[error("Episode {ep} references season {se} of {kind} {tv}, which does not exist")]
    MissingSeason {
        kind: SeriesKind,
        tv: i64,
        se: i64,
        ep: i64,
    },

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sea_orm::DbErr> for CatalogError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::Database(err.to_string())
    }
}

impl From<anyhow::Error> for CatalogError {
    fn from(err: anyhow::Error) -> Self {
        Self::Database(err.to_string())
    }
}

/// A read-only provider of validated catalog records.
///
/// Implementations must return records in a stable order so that repeated
/// reads over unchanged content serialize identically.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn movies(&self) -> Result<Vec<Movie>, CatalogError>;

    async fn series(&self, kind: SeriesKind) -> Result<Vec<Series>, CatalogError>;

    async fn seasons(&self, kind: SeriesKind) -> Result<Vec<Season>, CatalogError>;

    async fn episodes(&self, kind: SeriesKind) -> Result<Vec<Episode>, CatalogError>;
}

/// Builds the catalog source selected by `[source]` in the config.
pub async fn build_source(config: &Config) -> anyhow::Result<Arc<dyn CatalogSource>> {
    match config.source.mode {
        SourceMode::Files => Ok(Arc::new(FileCatalog::new(&config.source.content_path))),
        SourceMode::Database => {
            let store = Store::new(&config.source.database_url).await?;
            Ok(Arc::new(DbCatalog::new(store)))
        }
    }
}
