//! Extract a restaurant id from the `{id}` path segment.

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

/// Integer restaurant id. Anything that does not parse as an integer cannot
/// name a restaurant, so it is rejected as `NotFound` rather than a bad request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RestaurantId(pub i64);

#[async_trait]
impl<S> FromRequestParts<S> for RestaurantId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::NotFound("Restaurant"))?;
        parse_id(&raw).map(RestaurantId)
    }
}

fn parse_id(raw: &str) -> Result<i64, AppError> {
    raw.parse::<i64>()
        .map_err(|_| AppError::NotFound("Restaurant"))
}
