use axum::{
    Json,
    extract::{
        FromRequest, FromRequestParts, Query, Request,
        rejection::{JsonRejection, QueryRejection},
    },
    http::request::Parts,
};
use serde::Deserialize;

use super::ApiError;

/// Largest row count SQLite accepts in a `LIMIT` clause.
pub const NO_LIMIT: u64 = i64::MAX.unsigned_abs();

/// `Json` whose rejections become [`ApiError::ValidationError`].
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(Self(value))
    }
}

/// `Query` whose rejections become [`ApiError::ValidationError`].
pub struct ApiQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for ApiQuery<T>
where
    Query<T>: FromRequestParts<S, Rejection = QueryRejection>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state).await?;
        Ok(Self(value))
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct LimitQuery {
    pub limit: Option<i64>,
}

impl LimitQuery {
    /// Row cap for a list read. `0` means no cap and a negative value caps at
    /// its magnitude, so any integer is accepted.
    #[must_use]
    pub fn resolve(&self, default: u64) -> u64 {
        match self.limit {
            None => default,
            Some(0) => NO_LIMIT,
            Some(n) => n.unsigned_abs().min(NO_LIMIT),
        }
    }
}
