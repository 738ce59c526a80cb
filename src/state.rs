//! Shared application state for all routes.

use sqlx::SqlitePool;

#[derive(Clone)]
pub struct AppState {
    /// Every handler borrows its connection or transaction from here.
    pub pool: SqlitePool,
}
