use axum::{
    Json,
    extract::{Path, State},
};
use std::sync::Arc;

use super::validation::{ApiJson, ApiQuery, LimitQuery};
use super::{ApiError, AppState, CreatedResponse, ItemsResponse};
use crate::models::{Episode, NewEpisode};

const DEFAULT_LIMIT: u64 = 50;

/// `GET /api/series/{series_id}/episodes?limit=N`
///
/// Matches `series_id` verbatim; an unknown series simply has no episodes.
pub async fn list_episodes(
    State(state): State<Arc<AppState>>,
    Path(series_id): Path<String>,
    ApiQuery(query): ApiQuery<LimitQuery>,
) -> Result<Json<ItemsResponse<Episode>>, ApiError> {
    let limit = query.resolve(DEFAULT_LIMIT);
    let items = state.catalog().list_episodes(&series_id, limit).await?;
    Ok(Json(ItemsResponse { items }))
}

/// `POST /api/episodes`
pub async fn create_episode(
    State(state): State<Arc<AppState>>,
    ApiJson(payload): ApiJson<NewEpisode>,
) -> Result<Json<CreatedResponse>, ApiError> {
    let id = state.catalog().create_episode(payload).await?;
    Ok(Json(CreatedResponse { id }))
}
