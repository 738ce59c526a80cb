//! Data access per resource. Mutations run inside a single transaction each.

mod pizza;
mod restaurant;
mod restaurant_pizza;
mod validation;
pub use pizza::PizzaService;
pub use restaurant::RestaurantService;
pub use restaurant_pizza::RestaurantPizzaService;
pub use validation::{validate_price, NewRestaurantPizza, MAX_PRICE, MIN_PRICE, PRICE_ERROR};

use crate::error::AppError;
use sqlx::{Sqlite, SqlitePool, Transaction};

/// Open a transaction that holds the write lock from its first statement.
/// A deferred transaction that reads before writing cannot be upgraded once
/// another connection has written, and SQLite fails it with `SQLITE_BUSY`
/// instead of waiting on the busy timeout.
async fn begin_write(pool: &SqlitePool) -> Result<Transaction<'static, Sqlite>, AppError> {
    pool.begin_with("BEGIN IMMEDIATE")
        .await
        .map_err(|e| AppError::Persistence(e.to_string()))
}

/// Commit on success, roll back on failure. The pooled connection is released
/// either way once the transaction is consumed.
async fn finish<T>(
    tx: Transaction<'static, Sqlite>,
    result: Result<T, AppError>,
) -> Result<T, AppError> {
    match result {
        Ok(value) => {
            tx.commit().await?;
            Ok(value)
        }
        Err(e) => {
            if let Err(rollback) = tx.rollback().await {
                tracing::warn!(error = %rollback, "rollback failed");
            }
            Err(e)
        }
    }
}
