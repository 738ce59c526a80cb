//! Schema migrations embedded from `migrations/` at build time.

use crate::error::AppError;
use sqlx::SqlitePool;

/// Apply every pending migration. Already-applied migrations are skipped.
pub async fn apply_migrations(pool: &SqlitePool) -> Result<(), AppError> {
    sqlx::migrate!("./migrations").run(pool).await?;
    tracing::info!("database migrations applied");
    Ok(())
}
