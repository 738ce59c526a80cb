//! Restaurant queries and the cascading delete.

use super::{begin_write, finish};
use crate::error::AppError;
use crate::models::{Restaurant, RestaurantPizzaWithPizza};
use crate::views::RestaurantDetail;
use sqlx::{SqliteConnection, SqlitePool};

pub struct RestaurantService;

impl RestaurantService {
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Restaurant>, AppError> {
        let rows = sqlx::query_as::<_, Restaurant>(
            "SELECT id, name, address FROM restaurants ORDER BY id",
        )
        .fetch_all(pool)
        .await?;
        Ok(rows)
    }

    pub async fn find(pool: &SqlitePool, id: i64) -> Result<Option<Restaurant>, AppError> {
        let row = sqlx::query_as::<_, Restaurant>(
            "SELECT id, name, address FROM restaurants WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;
        Ok(row)
    }

    /// Restaurant with its menu entries, each joined with its pizza.
    pub async fn detail(pool: &SqlitePool, id: i64) -> Result<Option<RestaurantDetail>, AppError> {
        let Some(restaurant) = Self::find(pool, id).await? else {
            return Ok(None);
        };
        let entries = sqlx::query_as::<_, RestaurantPizzaWithPizza>(
            r#"
            SELECT rp.id, rp.price, rp.pizza_id, rp.restaurant_id,
                   p.name AS pizza_name, p.ingredients AS pizza_ingredients
            FROM restaurant_pizzas rp
            JOIN pizzas p ON p.id = rp.pizza_id
            WHERE rp.restaurant_id = ?
            ORDER BY rp.id
            "#,
        )
        .bind(id)
        .fetch_all(pool)
        .await?;
        tracing::debug!(restaurant_id = id, entries = entries.len(), "loaded restaurant detail");
        Ok(Some(RestaurantDetail::new(restaurant, entries)))
    }

    /// Delete the restaurant and its menu entries in one transaction.
    /// Returns `NotFound` (and changes nothing) when the id is absent.
    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<(), AppError> {
        let mut tx = begin_write(pool).await?;
        let result = Self::delete_in_tx(&mut tx, id).await;
        finish(tx, result).await.map_err(AppError::into_persistence)?;
        tracing::info!(restaurant_id = id, "restaurant deleted");
        Ok(())
    }

    async fn delete_in_tx(conn: &mut SqliteConnection, id: i64) -> Result<(), AppError> {
        let exists: Option<(i64,)> = sqlx::query_as("SELECT id FROM restaurants WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;
        if exists.is_none() {
            return Err(AppError::NotFound("Restaurant"));
        }
        let entries = sqlx::query("DELETE FROM restaurant_pizzas WHERE restaurant_id = ?")
            .bind(id)
            .execute(&mut *conn)
            .await?;
        sqlx::query("DELETE FROM restaurants WHERE id = ?")
            .bind(id)
            .execute(&mut *conn)
            .await?;
        tracing::debug!(restaurant_id = id, entries = entries.rows_affected(), "deleted menu entries");
        Ok(())
    }
}
