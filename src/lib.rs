//! REST service for restaurants, pizzas and the priced menu entries linking them.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod migration;
pub mod models;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;
pub mod views;

pub use config::ServerConfig;
pub use error::{AppError, ConfigError};
pub use migration::apply_migrations;
pub use routes::{api_routes, app, common_routes_with_ready};
pub use service::{NewRestaurantPizza, PizzaService, RestaurantPizzaService, RestaurantService};
pub use state::AppState;
pub use store::{connect, ensure_database_exists};
