use async_trait::async_trait;

use super::{CatalogError, CatalogSource};
use crate::db::Store;
use crate::models::{Episode, Movie, Season, Series, SeriesKind};

/// Store-backed catalog source reading the relational mirror.
pub struct DbCatalog {
    store: Store,
}

impl DbCatalog {
    pub const fn new(store: Store) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CatalogSource for DbCatalog {
    async fn movies(&self) -> Result<Vec<Movie>, CatalogError> {
        self.store.list_movies().await.map_err(CatalogError::from)
    }

    async fn series(&self, kind: SeriesKind) -> Result<Vec<Series>, CatalogError> {
        self.store
            .list_series(kind)
            .await
            .map_err(CatalogError::from)
    }

    async fn seasons(&self, kind: SeriesKind) -> Result<Vec<Season>, CatalogError> {
        self.store
            .list_seasons(kind)
            .await
            .map_err(CatalogError::from)
    }

    async fn episodes(&self, kind: SeriesKind) -> Result<Vec<Episode>, CatalogError> {
        self.store
            .list_episodes(kind)
            .await
            .map_err(CatalogError::from)
    }
}
