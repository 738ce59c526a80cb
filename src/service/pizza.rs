use crate::error::AppError;
use crate::models::Pizza;
use sqlx::SqlitePool;

pub struct PizzaService;

impl PizzaService {
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Pizza>, AppError> {
        let rows = sqlx::query_as::<_, Pizza>("SELECT id, name, ingredients FROM pizzas ORDER BY id")
            .fetch_all(pool)
            .await?;
        Ok(rows)
    }
}
