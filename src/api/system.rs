//! Liveness and diagnostics endpoints. None of these can fail.

use axum::{Json, extract::State};
use std::sync::Arc;

use super::{AppState, MessageResponse};
use crate::services::DiagnosticsReport;

/// `GET /`
pub async fn read_root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Comic Stream API running",
    })
}

/// `GET /test`
///
/// Always 200. Storage problems show up as status strings in the report.
pub async fn test_database(State(state): State<Arc<AppState>>) -> Json<DiagnosticsReport> {
    let report = DiagnosticsReport::collect(state.store(), |key| std::env::var(key).ok()).await;
    Json(report)
}
