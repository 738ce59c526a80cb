//! Menu entry creation.

use super::{begin_write, finish};
use super::validation::{validate_price, NewRestaurantPizza};
use crate::error::AppError;
use crate::models::{Pizza, Restaurant, RestaurantPizza};
use crate::views::RestaurantPizzaDetail;
use sqlx::{SqliteConnection, SqlitePool};

pub struct RestaurantPizzaService;

impl RestaurantPizzaService {
    /// Insert one menu entry after checking that both parents exist.
    /// Store failures roll the transaction back and surface as `Persistence`.
    pub async fn create(
        pool: &SqlitePool,
        input: NewRestaurantPizza,
    ) -> Result<RestaurantPizzaDetail, AppError> {
        validate_price(input.price)?;
        let mut tx = begin_write(pool).await?;
        let result = Self::create_in_tx(&mut tx, input).await;
        let detail = finish(tx, result).await.map_err(AppError::into_persistence)?;
        tracing::info!(
            restaurant_pizza_id = detail.id,
            restaurant_id = detail.restaurant_id,
            pizza_id = detail.pizza_id,
            price = detail.price,
            "restaurant pizza created"
        );
        Ok(detail)
    }

    async fn create_in_tx(
        conn: &mut SqliteConnection,
        input: NewRestaurantPizza,
    ) -> Result<RestaurantPizzaDetail, AppError> {
        let pizza = sqlx::query_as::<_, Pizza>("SELECT id, name, ingredients FROM pizzas WHERE id = ?")
            .bind(input.pizza_id)
            .fetch_optional(&mut *conn)
            .await?
            .ok_or_else(|| AppError::validation("Pizza not found"))?;
        let restaurant = sqlx::query_as::<_, Restaurant>(
            "SELECT id, name, address FROM restaurants WHERE id = ?",
        )
        .bind(input.restaurant_id)
        .fetch_optional(&mut *conn)
        .await?
        .ok_or_else(|| AppError::validation("Restaurant not found"))?;
        let row = sqlx::query_as::<_, RestaurantPizza>(
            r#"
            INSERT INTO restaurant_pizzas (price, pizza_id, restaurant_id)
            VALUES (?, ?, ?)
            RETURNING id, price, pizza_id, restaurant_id
            "#,
        )
        .bind(input.price)
        .bind(input.pizza_id)
        .bind(input.restaurant_id)
        .fetch_one(&mut *conn)
        .await?;
        Ok(RestaurantPizzaDetail::new(row, pizza, restaurant))
    }
}
