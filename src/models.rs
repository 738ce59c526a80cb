//! Row types for the `restaurants`, `pizzas` and `restaurant_pizzas` tables.

use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Restaurant {
    pub id: i64,
    pub name: Option<String>,
    pub address: Option<String>,
}

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Pizza {
    pub id: i64,
    pub name: Option<String>,
    pub ingredients: Option<String>,
}

/// Menu entry: `pizza_id` is offered at `restaurant_id` for `price`.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct RestaurantPizza {
    pub id: i64,
    pub price: i64,
    pub pizza_id: i64,
    pub restaurant_id: i64,
}

/// Association joined with its pizza, as loaded for a restaurant's detail view.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct RestaurantPizzaWithPizza {
    pub id: i64,
    pub price: i64,
    pub pizza_id: i64,
    pub restaurant_id: i64,
    pub pizza_name: Option<String>,
    pub pizza_ingredients: Option<String>,
}
