use axum::{Json, extract::State};
use std::sync::Arc;

use super::validation::{ApiJson, ApiQuery, LimitQuery};
use super::{ApiError, AppState, CreatedResponse, ItemsResponse};
use crate::models::{Creator, NewCreator};

const DEFAULT_LIMIT: u64 = 20;

pub async fn list_creators(
    State(state): State<Arc<AppState>>,
    ApiQuery(query): ApiQuery<LimitQuery>,
) -> Result<Json<ItemsResponse<Creator>>, ApiError> {
    let limit = query.resolve(DEFAULT_LIMIT);
    let items = state.catalog().list_creators(limit).await?;
    Ok(Json(ItemsResponse { items }))
}

pub async fn create_creator(
    State(state): State<Arc<AppState>>,
    ApiJson(payload): ApiJson<NewCreator>,
) -> Result<Json<CreatedResponse>, ApiError> {
    let id = state.catalog().create_creator(payload).await?;
    Ok(Json(CreatedResponse { id }))
}
