use axum::{Json, extract::State};
use std::sync::Arc;

use super::{ApiError, AppState, SeedResponse};

/// `POST /api/seed`
///
/// Inserts the demo catalog unless some series already exist.
pub async fn seed_sample_data(
    State(state): State<Arc<AppState>>,
) -> Result<Json<SeedResponse>, ApiError> {
    let outcome = state.catalog().seed_sample_data().await?;
    Ok(Json(outcome.into()))
}
