use serde::Serialize;

use crate::domain::DocumentId;
use crate::services::SeedOutcome;

/// Error body. `detail` is a string, or a list of field errors for
/// validation failures.
#[derive(Debug, Serialize)]
pub struct ErrorResponse<T> {
    pub detail: T,
}

#[derive(Debug, Serialize)]
pub struct ItemsResponse<T> {
    pub items: Vec<T>,
}

#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: DocumentId,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum SeedResponse {
    Skipped {
        status: &'static str,
        message: &'static str,
    },
    Inserted {
        status: &'static str,
        inserted_series: usize,
        inserted_episodes: usize,
    },
}

impl From<SeedOutcome> for SeedResponse {
    fn from(outcome: SeedOutcome) -> Self {
        match outcome {
            SeedOutcome::Skipped => Self::Skipped {
                status: "ok",
                message: "Series already exist. Skipping seed.",
            },
            SeedOutcome::Inserted { series, episodes } => Self::Inserted {
                status: "ok",
                inserted_series: series,
                inserted_episodes: episodes,
            },
        }
    }
}
