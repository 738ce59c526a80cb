//! Typed errors and HTTP mapping.

use crate::response::{error_body, errors_body};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}'")]
    InvalidValue { key: &'static str, value: String },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Entity name, e.g. "Restaurant".
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("validation: {}", .0.join(", "))]
    Validation(Vec<String>),
    #[error("Missing key: '{0}'")]
    MissingKey(String),
    #[error("{0}")]
    BadRequest(String),
    /// Store failure inside a mutating request; the transaction has been rolled back.
    #[error("{0}")]
    Persistence(String),
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
    #[error("migration: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        AppError::Validation(vec![message.into()])
    }

    /// Mutation paths report store failures as client errors carrying the store message.
    pub fn into_persistence(self) -> Self {
        match self {
            AppError::Db(e) => AppError::Persistence(e.to_string()),
            other => other,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_)
            | AppError::MissingKey(_)
            | AppError::BadRequest(_)
            | AppError::Persistence(_) => StatusCode::BAD_REQUEST,
            AppError::Config(_) | AppError::Db(_) | AppError::Migrate(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, status = %status, "request rejected");
        }
        let body = match self {
            AppError::NotFound(_) => error_body(self.to_string()),
            AppError::Validation(messages) => errors_body(messages),
            AppError::MissingKey(_) | AppError::BadRequest(_) | AppError::Persistence(_) => {
                errors_body(vec![self.to_string()])
            }
            AppError::Config(_) => error_body("configuration error".to_string()),
            AppError::Db(_) | AppError::Migrate(_) => error_body("database error".to_string()),
        };
        (status, Json(body)).into_response()
    }
}
