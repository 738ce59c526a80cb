//! Menu entry creation handler.

use crate::error::AppError;
use crate::service::{NewRestaurantPizza, RestaurantPizzaService};
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;

/// Malformed JSON is answered with the same `{"errors": [...]}` shape as any
/// other rejected input, so the body is taken as a fallible extractor.
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let Json(body) = payload.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    let input = NewRestaurantPizza::from_json(body)?;
    let created = RestaurantPizzaService::create(&state.pool, input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}
