//! Connection setup for the file-backed relational store.

use crate::config::ServerConfig;
use crate::error::{AppError, ConfigError};
use sqlx::migrate::MigrateDatabase;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Sqlite, SqlitePool};
use std::str::FromStr;

/// Create the database file if it does not exist yet. In-memory URLs are left alone.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    if database_url.contains(":memory:") {
        return Ok(());
    }
    if !Sqlite::database_exists(database_url).await? {
        tracing::info!(database_url, "creating database");
        Sqlite::create_database(database_url).await?;
    }
    Ok(())
}

/// Open a pool with foreign-key enforcement on, so association rows cannot
/// outlive or precede their parents.
pub async fn connect(config: &ServerConfig) -> Result<SqlitePool, AppError> {
    let opts = SqliteConnectOptions::from_str(&config.database_url)
        .map_err(|_| ConfigError::InvalidValue {
            key: "DB_URI",
            value: config.database_url.clone(),
        })?
        .create_if_missing(true)
        .foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(opts)
        .await?;
    Ok(pool)
}
