use axum::{
    Json,
    extract::{Path, State},
};
use std::sync::Arc;

use super::validation::{ApiJson, ApiQuery, LimitQuery};
use super::{ApiError, AppState, CreatedResponse, ItemsResponse};
use crate::models::{NewSeries, Series};

const DEFAULT_LIMIT: u64 = 20;

/// `GET /api/series?limit=N`
pub async fn list_series(
    State(state): State<Arc<AppState>>,
    ApiQuery(query): ApiQuery<LimitQuery>,
) -> Result<Json<ItemsResponse<Series>>, ApiError> {
    let limit = query.resolve(DEFAULT_LIMIT);
    let items = state.catalog().list_series(limit).await?;
    Ok(Json(ItemsResponse { items }))
}

/// `GET /api/series/{series_id}`
pub async fn get_series(
    State(state): State<Arc<AppState>>,
    Path(series_id): Path<String>,
) -> Result<Json<Series>, ApiError> {
    let series = state.catalog().get_series(&series_id).await?;
    Ok(Json(series))
}

/// `POST /api/series`
pub async fn create_series(
    State(state): State<Arc<AppState>>,
    ApiJson(payload): ApiJson<NewSeries>,
) -> Result<Json<CreatedResponse>, ApiError> {
    let id = state.catalog().create_series(payload).await?;
    Ok(Json(CreatedResponse { id }))
}
