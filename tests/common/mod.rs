//! Shared helpers for the HTTP integration tests.
//!
//! Each test gets its own in-memory SQLite database (a single pooled
//! connection, so every query sees the same data) with the embedded
//! migrations applied.

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header::CONTENT_TYPE, Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use pizza_restaurants::{
    app, apply_migrations, connect, ensure_database_exists, AppState, ServerConfig,
};
use sqlx::SqlitePool;
use tower::ServiceExt;

pub async fn test_pool() -> SqlitePool {
    let config = ServerConfig {
        database_url: "sqlite::memory:".into(),
        max_connections: 1,
        ..ServerConfig::default()
    };
    let pool = connect(&config).await.unwrap();
    apply_migrations(&pool).await.unwrap();
    pool
}

/// File-backed store with several pooled connections, so concurrent requests
/// really contend for the SQLite write lock.
pub async fn file_pool(dir: &tempfile::TempDir, max_connections: u32) -> SqlitePool {
    let config = ServerConfig {
        database_url: format!("sqlite://{}", dir.path().join("app.db").display()),
        max_connections,
        ..ServerConfig::default()
    };
    ensure_database_exists(&config.database_url).await.unwrap();
    let pool = connect(&config).await.unwrap();
    apply_migrations(&pool).await.unwrap();
    pool
}

pub fn build_test_app(pool: SqlitePool) -> Router {
    app(AppState { pool }, ServerConfig::default().body_limit_bytes)
}

pub async fn insert_restaurant(pool: &SqlitePool, name: &str, address: &str) -> i64 {
    let (id,): (i64,) =
        sqlx::query_as("INSERT INTO restaurants (name, address) VALUES (?, ?) RETURNING id")
            .bind(name)
            .bind(address)
            .fetch_one(pool)
            .await
            .unwrap();
    id
}

pub async fn insert_pizza(pool: &SqlitePool, name: &str, ingredients: &str) -> i64 {
    let (id,): (i64,) =
        sqlx::query_as("INSERT INTO pizzas (name, ingredients) VALUES (?, ?) RETURNING id")
            .bind(name)
            .bind(ingredients)
            .fetch_one(pool)
            .await
            .unwrap();
    id
}

pub async fn insert_restaurant_pizza(
    pool: &SqlitePool,
    restaurant_id: i64,
    pizza_id: i64,
    price: i64,
) -> i64 {
    let (id,): (i64,) = sqlx::query_as(
        "INSERT INTO restaurant_pizzas (price, pizza_id, restaurant_id) VALUES (?, ?, ?) RETURNING id",
    )
    .bind(price)
    .bind(pizza_id)
    .bind(restaurant_id)
    .fetch_one(pool)
    .await
    .unwrap();
    id
}

pub async fn count(pool: &SqlitePool, table: &str) -> i64 {
    let (n,): (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {}", table))
        .fetch_one(pool)
        .await
        .unwrap();
    n
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, Body::empty()).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, Body::empty()).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Body::from(body.to_string())).await
}

pub async fn post_raw(app: Router, uri: &str, body: &'static str) -> Response<Body> {
    send(app, Method::POST, uri, Body::from(body)).await
}

async fn send(app: Router, method: Method, uri: &str, body: Body) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(body)
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response.into_body().collect().await.unwrap().to_bytes().to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}
