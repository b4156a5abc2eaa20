use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::fmt;

use super::ErrorResponse;
use crate::models::FieldError;
use crate::services::CatalogError;

#[derive(Debug)]
pub enum ApiError {
    ValidationError(Vec<FieldError>),

    NotFound(String),

    StorageUnavailable(String),

    StorageError(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::ValidationError(errors) => {
                write!(f, "Validation error:")?;
                for error in errors {
                    write!(f, " {error};")?;
                }
                Ok(())
            }
            ApiError::NotFound(msg) => write!(f, "Not found: {}", msg),
            ApiError::StorageUnavailable(msg) => write!(f, "Storage unavailable: {}", msg),
            ApiError::StorageError(msg) => write!(f, "Storage error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::ValidationError(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ErrorResponse { detail: errors }),
            )
                .into_response(),
            ApiError::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorResponse { detail: msg })).into_response()
            }
            ApiError::StorageUnavailable(msg) => {
                tracing::warn!("Storage unavailable: {}", msg);
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    Json(ErrorResponse { detail: msg }),
                )
                    .into_response()
            }
            ApiError::StorageError(msg) => {
                tracing::error!("Storage error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse { detail: msg }),
                )
                    .into_response()
            }
        }
    }
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::Validation(errors) => Self::ValidationError(errors),
            CatalogError::NotFound(what) => Self::NotFound(format!("{what} not found")),
            CatalogError::StorageUnavailable(msg) => Self::StorageUnavailable(msg),
            CatalogError::Storage(msg) => Self::StorageError(msg),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::ValidationError(vec![FieldError::new("body", rejection.body_text())])
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::ValidationError(vec![FieldError::new("query", rejection.body_text())])
    }
}

impl ApiError {
    pub fn not_found(resource: &str, id: impl fmt::Display) -> Self {
        ApiError::NotFound(format!("{} {} not found", resource, id))
    }
}
