//! `SeaORM` implementation of the [`CatalogService`] trait, plus the stand-in
//! used when storage is switched off.

use crate::db::Store;
use crate::domain::DocumentId;
use crate::models::{
    Creator, Episode, NewCreator, NewEpisode, NewSeries, Series, Validate,
};
use crate::services::catalog_service::{CatalogError, CatalogService, SeedOutcome};
use crate::services::seed;
use std::sync::Arc;
use tracing::info;

fn validated<T: Validate>(payload: &T) -> Result<(), CatalogError> {
    payload.validate().map_err(CatalogError::Validation)
}

/// SeaORM-backed [`CatalogService`].
pub struct SeaOrmCatalogService {
    store: Arc<Store>,
}

impl SeaOrmCatalogService {
    #[must_use]
    pub const fn new(store: Arc<Store>) -> Self {
        Self { store }
    }
}

#[async_trait::async_trait]
impl CatalogService for SeaOrmCatalogService {
    async fn list_series(&self, limit: u64) -> Result<Vec<Series>, CatalogError> {
        Ok(self.store.list_series(limit).await?)
    }

    async fn get_series(&self, id: &str) -> Result<Series, CatalogError> {
        let not_found = || CatalogError::NotFound(format!("Series {id}"));

        let id: DocumentId = id.parse().map_err(|_| not_found())?;
        self.store.get_series(id).await?.ok_or_else(not_found)
    }

    async fn create_series(&self, series: NewSeries) -> Result<DocumentId, CatalogError> {
        validated(&series)?;
        let id = self.store.create_series(&series).await?;
        info!("Created series {}: {}", id, series.title);
        Ok(id)
    }

    async fn list_episodes(
        &self,
        series_id: &str,
        limit: u64,
    ) -> Result<Vec<Episode>, CatalogError> {
        Ok(self.store.list_episodes(series_id, limit).await?)
    }

    async fn create_episode(&self, episode: NewEpisode) -> Result<DocumentId, CatalogError> {
        validated(&episode)?;
        let id = self.store.create_episode(&episode).await?;
        info!(
            "Created episode {} for series {}: {}",
            id, episode.series_id, episode.title
        );
        Ok(id)
    }

    async fn list_creators(&self, limit: u64) -> Result<Vec<Creator>, CatalogError> {
        Ok(self.store.list_creators(limit).await?)
    }

    async fn create_creator(&self, creator: NewCreator) -> Result<DocumentId, CatalogError> {
        validated(&creator)?;
        let id = self.store.create_creator(&creator).await?;
        info!("Created creator {}: {}", id, creator.name);
        Ok(id)
    }

    async fn seed_sample_data(&self) -> Result<SeedOutcome, CatalogError> {
        if !self.store.list_series(1).await?.is_empty() {
            info!("Series already exist, skipping seed");
            return Ok(SeedOutcome::Skipped);
        }

        let series = seed::demo_series();
        let thumb_url = series.first().and_then(|s| s.cover_url.clone());

        let counts = self
            .store
            .insert_series_with_episodes(&series, |ids| {
                ids.first()
                    .map(|first| seed::demo_episodes(*first, thumb_url.as_deref()))
                    .unwrap_or_default()
            })
            .await?;

        info!(
            "Seeded {} series and {} episodes",
            counts.series, counts.episodes
        );

        Ok(SeedOutcome::Inserted {
            series: counts.series,
            episodes: counts.episodes,
        })
    }
}

/// Answers every call with [`CatalogError::StorageUnavailable`].
///
/// Installed when `database.enabled` is false so the HTTP surface stays up.
pub struct DisabledCatalogService;

impl DisabledCatalogService {
    fn unavailable<T>() -> Result<T, CatalogError> {
        Err(CatalogError::StorageUnavailable(
            "database is not initialized".to_string(),
        ))
    }
}

#[async_trait::async_trait]
impl CatalogService for DisabledCatalogService {
    async fn list_series(&self, _limit: u64) -> Result<Vec<Series>, CatalogError> {
        Self::unavailable()
    }

    async fn get_series(&self, _id: &str) -> Result<Series, CatalogError> {
        Self::unavailable()
    }

    async fn create_series(&self, _series: NewSeries) -> Result<DocumentId, CatalogError> {
        Self::unavailable()
    }

    async fn list_episodes(
        &self,
        _series_id: &str,
        _limit: u64,
    ) -> Result<Vec<Episode>, CatalogError> {
        Self::unavailable()
    }

    async fn create_episode(&self, _episode: NewEpisode) -> Result<DocumentId, CatalogError> {
        Self::unavailable()
    }

    async fn list_creators(&self, _limit: u64) -> Result<Vec<Creator>, CatalogError> {
        Self::unavailable()
    }

    async fn create_creator(&self, _creator: NewCreator) -> Result<DocumentId, CatalogError> {
        Self::unavailable()
    }

    async fn seed_sample_data(&self) -> Result<SeedOutcome, CatalogError> {
        Self::unavailable()
    }
}
