//! Restaurant handlers: list, detail, delete.

use crate::error::AppError;
use crate::extractors::RestaurantId;
use crate::service::RestaurantService;
use crate::state::AppState;
use crate::views::RestaurantSummary;
use axum::{extract::State, http::StatusCode, Json};

pub async fn list(State(state): State<AppState>) -> Result<impl axum::response::IntoResponse, AppError> {
    let rows = RestaurantService::list(&state.pool).await?;
    let body: Vec<RestaurantSummary> = rows.into_iter().map(Into::into).collect();
    Ok((StatusCode::OK, Json(body)))
}

pub async fn read(
    State(state): State<AppState>,
    RestaurantId(id): RestaurantId,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let detail = RestaurantService::detail(&state.pool, id)
        .await?
        .ok_or(AppError::NotFound("Restaurant"))?;
    Ok((StatusCode::OK, Json(detail)))
}

pub async fn delete(
    State(state): State<AppState>,
    RestaurantId(id): RestaurantId,
) -> Result<impl axum::response::IntoResponse, AppError> {
    RestaurantService::delete(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
