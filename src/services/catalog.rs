//! Draft filtering and public projection over a catalog source.
//!
//! This is the only place that decides what the public API exposes. It works
//! against the shapes in `models` exclusively, so both data sources get the
//! same rules.

use std::collections::HashSet;
use std::sync::Arc;

use crate::api::{MovieDto, SeriesDto};
use crate::catalog::{CatalogError, CatalogSource};
use crate::models::SeriesKind;

pub struct CatalogService {
    source: Arc<dyn CatalogSource>,
}

impl CatalogService {
    pub fn new(source: Arc<dyn CatalogSource>) -> Self {
        Self { source }
    }

    /// Non-draft movies projected to the public field set, in source order.
    pub async fn public_movies(&self) -> Result<Vec<MovieDto>, CatalogError> {
        let movies = self.source.movies().await?;

        Ok(movies
            .into_iter()
            .filter(|m| !m.draft)
            .map(|m| MovieDto {
                id: m.id,
                title: m.title,
                year: m.year,
                thumbnail: m.thumbnail,
                description: m.description,
                tags: m.tags,
            })
            .collect())
    }

    /// Non-draft shows or anime projected to the public field set.
    pub async fn public_series(&self, kind: SeriesKind) -> Result<Vec<SeriesDto>, CatalogError> {
        let series = self.source.series(kind).await?;

        Ok(series
            .into_iter()
            .filter(|s| !s.draft)
            .map(|s| SeriesDto {
                tv: s.tv,
                title: s.title,
                year: s.year,
                thumbnail: s.thumbnail,
                description: s.description,
                tags: s.tags,
            })
            .collect())
    }

    /// Checks season→series and episode→season references for one namespace.
    ///
    /// Draft records participate on both sides: a draft season is still a
    /// valid parent for its episodes, and a draft series must still exist for
    /// its seasons.
    pub async fn verify_relations(&self, kind: SeriesKind) -> Result<(), CatalogError> {
        let series_ids: HashSet<i64> = self
            .source
            .series(kind)
            .await?
            .iter()
            .map(|s| s.tv)
            .collect();

        let seasons = self.source.seasons(kind).await?;
        for season in &seasons {
            if !series_ids.contains(&season.tv) {
                return Err(CatalogError::MissingSeries {
                    kind,
                    tv: season.tv,
                    se: season.se,
                });
            }
        }

        let season_keys: HashSet<(i64, i64)> = seasons.iter().map(|s| (s.tv, s.se)).collect();
        for episode in self.source.episodes(kind).await? {
            if !season_keys.contains(&(episode.tv, episode.se)) {
                return Err(CatalogError::MissingSeason {
                    kind,
                    tv: episode.tv,
                    se: episode.se,
                    ep: episode.ep,
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Episode, Movie, Season, Series, SourceType, VideoSource};
    use async_trait::async_trait;

    #[derive(Default)]
    struct StubSource {
        movies: Vec<Movie>,
        series: Vec<Series>,
        seasons: Vec<Season>,
        episodes: Vec<Episode>,
    }

    #[async_trait]
    impl CatalogSource for StubSource {
        async fn movies(&self) -> Result<Vec<Movie>, CatalogError> {
            Ok(self.movies.clone())
        }

        async fn series(&self, _kind: SeriesKind) -> Result<Vec<Series>, CatalogError> {
            Ok(self.series.clone())
        }

        async fn seasons(&self, _kind: SeriesKind) -> Result<Vec<Season>, CatalogError> {
            Ok(self.seasons.clone())
        }

        async fn episodes(&self, _kind: SeriesKind) -> Result<Vec<Episode>, CatalogError> {
            Ok(self.episodes.clone())
        }
    }

    fn movie(id: i64, title: &str, draft: bool) -> Movie {
        Movie {
            id,
            title: title.to_string(),
            year: 2020,
            thumbnail: "t.jpg".to_string(),
            description: "d".to_string(),
            tags: "x".to_string(),
            draft,
            video: VideoSource {
                source_type: SourceType::Mp4,
                source: "a.mp4".to_string(),
            },
        }
    }

    fn series(tv: i64, draft: bool) -> Series {
        Series {
            tv,
            title: format!("Series {tv}"),
            description: "d".to_string(),
            thumbnail: "t.jpg".to_string(),
            year: 2021,
            tags: "drama".to_string(),
            draft,
        }
    }

    fn episode(tv: i64, se: i64, ep: i64) -> Episode {
        Episode {
            ep,
            tv,
            se,
            title: format!("Episode {ep}"),
            duration: "40m".to_string(),
            draft: false,
            video: VideoSource {
                source_type: SourceType::Embed,
                source: "https://player/e".to_string(),
            },
        }
    }

    #[tokio::test]
    async fn test_drafts_filtered_and_order_preserved() {
        let service = CatalogService::new(Arc::new(StubSource {
            movies: vec![movie(2, "B", false), movie(3, "C", true), movie(1, "A", false)],
            ..Default::default()
        }));

        let public = service.public_movies().await.unwrap();

        let ids: Vec<i64> = public.iter().map(|m| m.id).collect();
        assert_eq!(ids, [2, 1]);
    }

    #[tokio::test]
    async fn test_projection_drops_internal_fields() {
        let service = CatalogService::new(Arc::new(StubSource {
            movies: vec![movie(1, "A", false)],
            ..Default::default()
        }));

        let public = service.public_movies().await.unwrap();
        let value = serde_json::to_value(&public).unwrap();

        let mut keys: Vec<&str> = value[0]
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            ["description", "id", "tags", "thumbnail", "title", "year"]
        );
    }

    #[tokio::test]
    async fn test_series_projection_uses_tv_key() {
        let service = CatalogService::new(Arc::new(StubSource {
            series: vec![series(7, false), series(8, true)],
            ..Default::default()
        }));

        let public = service.public_series(SeriesKind::Show).await.unwrap();

        assert_eq!(public.len(), 1);
        assert_eq!(public[0].tv, 7);
        let value = serde_json::to_value(&public).unwrap();
        assert!(value[0].get("draft").is_none());
    }

    #[tokio::test]
    async fn test_verify_relations_accepts_valid_tree() {
        let service = CatalogService::new(Arc::new(StubSource {
            series: vec![series(1, false)],
            seasons: vec![Season {
                tv: 1,
                se: 1,
                draft: true,
            }],
            episodes: vec![episode(1, 1, 1)],
            ..Default::default()
        }));

        service.verify_relations(SeriesKind::Show).await.unwrap();
    }

    #[tokio::test]
    async fn test_verify_relations_rejects_orphan_season() {
        let service = CatalogService::new(Arc::new(StubSource {
            seasons: vec![Season {
                tv: 9,
                se: 1,
                draft: false,
            }],
            ..Default::default()
        }));

        let err = service
            .verify_relations(SeriesKind::Anime)
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::MissingSeries { tv: 9, .. }));
    }

    #[tokio::test]
    async fn test_verify_relations_rejects_orphan_episode() {
        let service = CatalogService::new(Arc::new(StubSource {
            series: vec![series(1, false)],
            seasons: vec![Season {
                tv: 1,
                se: 1,
                draft: false,
            }],
            episodes: vec![episode(1, 2, 5)],
            ..Default::default()
        }));

        let err = service.verify_relations(SeriesKind::Show).await.unwrap_err();
        assert!(matches!(
            err,
            CatalogError::MissingSeason {
                tv: 1,
                se: 2,
                ep: 5,
                ..
            }
        ));
    }
}
