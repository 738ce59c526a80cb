//! Serialization views, one per endpoint shape.
//!
//! Each view nests only in one direction: a restaurant's associations carry
//! their pizza but never the restaurant again, and a created association
//! carries summaries of both parents without their association lists.

use crate::models::{Pizza, Restaurant, RestaurantPizza, RestaurantPizzaWithPizza};
use serde::Serialize;

/// `GET /restaurants` item and the `restaurant` nested in a created association.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct RestaurantSummary {
    pub id: i64,
    pub name: Option<String>,
    pub address: Option<String>,
}

/// `GET /pizzas` item and the `pizza` nested in association views.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct PizzaSummary {
    pub id: i64,
    pub name: Option<String>,
    pub ingredients: Option<String>,
}

/// `GET /restaurants/{id}`.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct RestaurantDetail {
    pub id: i64,
    pub name: Option<String>,
    pub address: Option<String>,
    pub restaurant_pizzas: Vec<RestaurantPizzaInRestaurant>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct RestaurantPizzaInRestaurant {
    pub id: i64,
    pub price: i64,
    pub pizza_id: i64,
    pub restaurant_id: i64,
    pub pizza: PizzaSummary,
}

/// `POST /restaurant_pizzas` response.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct RestaurantPizzaDetail {
    pub id: i64,
    pub price: i64,
    pub pizza_id: i64,
    pub restaurant_id: i64,
    pub pizza: PizzaSummary,
    pub restaurant: RestaurantSummary,
}

impl From<Restaurant> for RestaurantSummary {
    fn from(r: Restaurant) -> Self {
        Self {
            id: r.id,
            name: r.name,
            address: r.address,
        }
    }
}

impl From<Pizza> for PizzaSummary {
    fn from(p: Pizza) -> Self {
        Self {
            id: p.id,
            name: p.name,
            ingredients: p.ingredients,
        }
    }
}

impl From<RestaurantPizzaWithPizza> for RestaurantPizzaInRestaurant {
    fn from(row: RestaurantPizzaWithPizza) -> Self {
        Self {
            id: row.id,
            price: row.price,
            pizza_id: row.pizza_id,
            restaurant_id: row.restaurant_id,
            pizza: PizzaSummary {
                id: row.pizza_id,
                name: row.pizza_name,
                ingredients: row.pizza_ingredients,
            },
        }
    }
}

impl RestaurantDetail {
    pub fn new(restaurant: Restaurant, restaurant_pizzas: Vec<RestaurantPizzaWithPizza>) -> Self {
        Self {
            id: restaurant.id,
            name: restaurant.name,
            address: restaurant.address,
            restaurant_pizzas: restaurant_pizzas.into_iter().map(Into::into).collect(),
        }
    }
}

impl RestaurantPizzaDetail {
    pub fn new(row: RestaurantPizza, pizza: Pizza, restaurant: Restaurant) -> Self {
        Self {
            id: row.id,
            price: row.price,
            pizza_id: row.pizza_id,
            restaurant_id: row.restaurant_id,
            pizza: pizza.into(),
            restaurant: restaurant.into(),
        }
    }
}
