use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use sea_orm::{
    ColumnTrait, ConnectOptions, Database, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder,
};
use tracing::info;

use crate::entities::prelude::{Episodes, Movies, Seasons, Series};
use crate::entities::{episodes, movies, seasons, series};
use crate::models::{self, SeriesKind, SourceType, VideoSource};

pub mod migrator;

/// An episode row joined to its season and series rows, for store-backed
/// callers that need the whole chain at once.
#[derive(Debug, Clone)]
pub struct EpisodeWithRelations {
    pub episode: episodes::Model,
    pub season: seasons::Model,
    pub series: series::Model,
}

/// Read-only access to the relational mirror of the catalog.
#[derive(Clone)]
pub struct Store {
    pub conn: DatabaseConnection,
}

impl Store {
    pub async fn new(db_url: &str) -> Result<Self> {
        Self::with_pool_options(db_url, 5, 1).await
    }

    pub async fn with_pool_options(
        db_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self> {
        use sea_orm_migration::MigratorTrait;

        if db_url.starts_with("sqlite:") && !db_url.contains(":memory:") {
            let path_str = db_url.trim_start_matches("sqlite:");
            if let Some(parent) = Path::new(path_str).parent() {
                tokio::fs::create_dir_all(parent).await.ok();
            }
            if !Path::new(path_str).exists() {
                std::fs::File::create(path_str)?;
            }
        }

        let mut opt = ConnectOptions::new(db_url.to_string());
        opt.max_connections(max_connections)
            .min_connections(min_connections)
            .connect_timeout(Duration::from_secs(10))
            .acquire_timeout(Duration::from_secs(10))
            .sqlx_logging(false);

        let conn = Database::connect(opt)
            .await
            .with_context(|| format!("Failed to connect to database: {db_url}"))?;

        migrator::Migrator::up(&conn, None).await?;

        info!(
            "Database connected & migrations applied (pool: {}-{})",
            min_connections, max_connections
        );

        Ok(Self { conn })
    }

    pub async fn list_movies(&self) -> Result<Vec<models::Movie>> {
        let rows = Movies::find()
            .order_by_asc(movies::Column::Id)
            .all(&self.conn)
            .await?;

        rows.into_iter().map(map_movie).collect()
    }

    pub async fn list_series(&self, kind: SeriesKind) -> Result<Vec<models::Series>> {
        Ok(self
            .series_rows(kind)
            .await?
            .into_iter()
            .map(map_series)
            .collect())
    }

    pub async fn list_seasons(&self, kind: SeriesKind) -> Result<Vec<models::Season>> {
        Ok(self
            .season_rows(kind)
            .await?
            .into_iter()
            .map(|row| models::Season {
                tv: row.series_id,
                se: row.season_number,
                draft: row.draft,
            })
            .collect())
    }

    pub async fn list_episodes(&self, kind: SeriesKind) -> Result<Vec<models::Episode>> {
        let seasons = self.season_rows(kind).await?;
        let season_keys: HashMap<i64, (i64, i64)> = seasons
            .iter()
            .map(|s| (s.id, (s.series_id, s.season_number)))
            .collect();
        let season_ids: Vec<i64> = seasons.iter().map(|s| s.id).collect();

        let rows = Episodes::find()
            .filter(episodes::Column::SeasonId.is_in(season_ids))
            .order_by_asc(episodes::Column::Id)
            .all(&self.conn)
            .await?;

        let mut result = Vec::with_capacity(rows.len());
        for row in rows {
            let (tv, se) = season_keys.get(&row.season_id).copied().ok_or_else(|| {
                anyhow::anyhow!(
                    "Episode {} references missing season {}",
                    row.id,
                    row.season_id
                )
            })?;
            result.push(map_episode(row, tv, se)?);
        }
        Ok(result)
    }

    /// Fetches one episode together with its season and series rows.
    ///
    /// Returns `None` for an unknown episode id; a broken foreign key is an
    /// error rather than a silent gap.
    pub async fn episode_with_relations(&self, id: i64) -> Result<Option<EpisodeWithRelations>> {
        let Some(episode) = Episodes::find_by_id(id).one(&self.conn).await? else {
            return Ok(None);
        };

        let season = Seasons::find_by_id(episode.season_id)
            .one(&self.conn)
            .await?
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "Episode {} references missing season {}",
                    episode.id,
                    episode.season_id
                )
            })?;

        let series = Series::find_by_id(season.series_id)
            .one(&self.conn)
            .await?
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "Season {} references missing series {}",
                    season.id,
                    season.series_id
                )
            })?;

        Ok(Some(EpisodeWithRelations {
            episode,
            season,
            series,
        }))
    }

    async fn series_rows(&self, kind: SeriesKind) -> Result<Vec<series::Model>> {
        Ok(Series::find()
            .filter(series::Column::Kind.eq(kind.to_string()))
            .order_by_asc(series::Column::Id)
            .all(&self.conn)
            .await?)
    }

    async fn season_rows(&self, kind: SeriesKind) -> Result<Vec<seasons::Model>> {
        let series_ids: Vec<i64> = self
            .series_rows(kind)
            .await?
            .into_iter()
            .map(|s| s.id)
            .collect();

        Ok(Seasons::find()
            .filter(seasons::Column::SeriesId.is_in(series_ids))
            .order_by_asc(seasons::Column::Id)
            .all(&self.conn)
            .await?)
    }
}

fn map_movie(row: movies::Model) -> Result<models::Movie> {
    let source_type: SourceType = row
        .video_source_type
        .parse()
        .with_context(|| format!("Movie {} has an invalid video source type", row.id))?;

    Ok(models::Movie {
        id: row.id,
        title: row.title,
        year: row.year,
        thumbnail: row.thumbnail,
        description: row.description,
        tags: row.tags,
        draft: row.draft,
        video: VideoSource {
            source_type,
            source: row.video_source,
        },
    })
}

fn map_series(row: series::Model) -> models::Series {
    models::Series {
        tv: row.id,
        title: row.title,
        description: row.description,
        thumbnail: row.thumbnail,
        year: row.year,
        tags: row.tags,
        draft: row.draft,
    }
}

fn map_episode(row: episodes::Model, tv: i64, se: i64) -> Result<models::Episode> {
    let source_type: SourceType = row
        .video_source_type
        .parse()
        .with_context(|| format!("Episode {} has an invalid video source type", row.id))?;

    Ok(models::Episode {
        ep: row.episode_number,
        tv,
        se,
        title: row.title,
        duration: row.duration,
        draft: row.draft,
        video: VideoSource {
            source_type,
            source: row.video_source,
        },
    })
}
