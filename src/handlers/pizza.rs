use crate::error::AppError;
use crate::service::PizzaService;
use crate::state::AppState;
use crate::views::PizzaSummary;
use axum::{extract::State, http::StatusCode, Json};

pub async fn list(State(state): State<AppState>) -> Result<impl axum::response::IntoResponse, AppError> {
    let rows = PizzaService::list(&state.pool).await?;
    let body: Vec<PizzaSummary> = rows.into_iter().map(Into::into).collect();
    Ok((StatusCode::OK, Json(body)))
}
