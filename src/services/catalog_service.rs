//! Domain service for the series, episode and creator collections.

use crate::domain::DocumentId;
use crate::models::{Creator, Episode, FieldError, NewCreator, NewEpisode, NewSeries, Series};
use thiserror::Error;

/// The closed set of ways a catalog operation can fail.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Invalid payload: {}", join_field_errors(.0))]
    Validation(Vec<FieldError>),

    #[error("{0} not found")]
    NotFound(String),

    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    /// Carries the storage layer's message unchanged.
    #[error("{0}")]
    Storage(String),
}

fn join_field_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl From<anyhow::Error> for CatalogError {
    fn from(err: anyhow::Error) -> Self {
        Self::Storage(err.to_string())
    }
}

/// Result of a seed request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// Series already existed, nothing was written.
    Skipped,
    Inserted { series: usize, episodes: usize },
}

/// Reads and inserts against the catalog collections.
///
/// Payloads are validated before any storage call; a rejected payload never
/// reaches the database.
#[async_trait::async_trait]
pub trait CatalogService: Send + Sync {
    /// Up to `limit` series in storage order.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Storage`] on database failures.
    async fn list_series(&self, limit: u64) -> Result<Vec<Series>, CatalogError>;

    /// # Errors
    ///
    /// - Returns [`CatalogError::NotFound`] for unknown or malformed ids
    /// - Returns [`CatalogError::Storage`] on database failures
    async fn get_series(&self, id: &str) -> Result<Series, CatalogError>;

    /// # Errors
    ///
    /// - Returns [`CatalogError::Validation`] when the rating is outside 0..=5
    /// - Returns [`CatalogError::Storage`] on database failures
    async fn create_series(&self, series: NewSeries) -> Result<DocumentId, CatalogError>;

    /// Up to `limit` episodes whose `series_id` equals `series_id` exactly.
    /// The series itself is not looked up.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Storage`] on database failures.
    async fn list_episodes(
        &self,
        series_id: &str,
        limit: u64,
    ) -> Result<Vec<Episode>, CatalogError>;

    /// # Errors
    ///
    /// - Returns [`CatalogError::Validation`] for non-positive episode or
    ///   season numbers and negative durations
    /// - Returns [`CatalogError::Storage`] on database failures
    async fn create_episode(&self, episode: NewEpisode) -> Result<DocumentId, CatalogError>;

    async fn list_creators(&self, limit: u64) -> Result<Vec<Creator>, CatalogError>;

    async fn create_creator(&self, creator: NewCreator) -> Result<DocumentId, CatalogError>;

    /// Inserts the demo catalog when no series exist yet.
    ///
    /// The emptiness check and the inserts are separate steps, so two
    /// concurrent calls can both seed.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Storage`] on database failures; nothing is
    /// written in that case.
    async fn seed_sample_data(&self) -> Result<SeedOutcome, CatalogError>;
}
