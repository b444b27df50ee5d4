use std::path::PathBuf;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::debug;
use walkdir::WalkDir;

use super::{CatalogError, CatalogSource};
use crate::models::{Episode, Movie, Season, Series, SeriesKind};

/// File-backed catalog: one JSON document per record, grouped into a fixed
/// directory per collection under the content root.
///
/// Documents may sit anywhere below their collection directory. The walk is
/// sorted by file name, so discovery order (and therefore output order) is
/// stable across calls.
pub struct FileCatalog {
    root: PathBuf,
}

impl FileCatalog {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    const fn series_dir(kind: SeriesKind) -> &'static str {
        match kind {
            SeriesKind::Show => "shows",
            SeriesKind::Anime => "anime",
        }
    }

    const fn seasons_dir(kind: SeriesKind) -> &'static str {
        match kind {
            SeriesKind::Show => "seasons",
            SeriesKind::Anime => "animeSeasons",
        }
    }

    const fn episodes_dir(kind: SeriesKind) -> &'static str {
        match kind {
            SeriesKind::Show => "episodes",
            SeriesKind::Anime => "animeEpisodes",
        }
    }

    /// Loads every `*.json` document under one collection directory.
    ///
    /// A missing directory is an empty collection. A document that fails to
    /// parse or validate fails the whole load; nothing is partially admitted.
    fn load_collection<T: DeserializeOwned>(&self, name: &str) -> Result<Vec<T>, CatalogError> {
        let dir = self.root.join(name);
        if !dir.is_dir() {
            return Ok(Vec::new());
        }

        let mut records = Vec::new();
        let walker = WalkDir::new(&dir)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok());

        for entry in walker {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }

            let extension = path
                .extension()
                .and_then(|e| e.to_str())
                .map(str::to_lowercase)
                .unwrap_or_default();
            if extension != "json" {
                continue;
            }

            let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            let record =
                serde_json::from_str(&content).map_err(|source| CatalogError::Invalid {
                    path: path.to_path_buf(),
                    source,
                })?;
            records.push(record);
        }

        debug!("Loaded {} records from {}", records.len(), dir.display());
        Ok(records)
    }
}

#[async_trait]
impl CatalogSource for FileCatalog {
    async fn movies(&self) -> Result<Vec<Movie>, CatalogError> {
        self.load_collection("movies")
    }

    async fn series(&self, kind: SeriesKind) -> Result<Vec<Series>, CatalogError> {
        self.load_collection(Self::series_dir(kind))
    }

    async fn seasons(&self, kind: SeriesKind) -> Result<Vec<Season>, CatalogError> {
        self.load_collection(Self::seasons_dir(kind))
    }

    async fn episodes(&self, kind: SeriesKind) -> Result<Vec<Episode>, CatalogError> {
        self.load_collection(Self::episodes_dir(kind))
    }
}
