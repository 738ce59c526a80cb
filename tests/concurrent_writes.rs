//! Concurrent mutations against a file-backed, multi-connection store.

mod common;

use axum::http::StatusCode;
use common::{body_json, count, delete, post_json};
use serde_json::json;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_creates_and_delete_all_succeed() {
    let dir = tempfile::tempdir().unwrap();
    let pool = common::file_pool(&dir, 5).await;
    let restaurant = common::insert_restaurant(&pool, "Kiki's Pizza", "address3").await;
    let doomed = common::insert_restaurant(&pool, "Sanjay's Pizza", "address2").await;
    let pizza = common::insert_pizza(&pool, "Melanie", "Dough, Sauce, Ricotta").await;
    common::insert_restaurant_pizza(&pool, doomed, pizza, 8).await;
    let app = common::build_test_app(pool.clone());

    let mut handles = Vec::new();
    for i in 0..60 {
        let app = app.clone();
        let price = i % 30 + 1;
        handles.push(tokio::spawn(async move {
            let response = post_json(
                app,
                "/restaurant_pizzas",
                json!({"price": price, "pizza_id": pizza, "restaurant_id": restaurant}),
            )
            .await;
            let status = response.status();
            (status, body_json(response).await)
        }));
    }
    let delete_handle = {
        let app = app.clone();
        tokio::spawn(async move { delete(app, &format!("/restaurants/{doomed}")).await.status() })
    };

    for handle in handles {
        let (status, json) = handle.await.unwrap();
        assert_eq!(status, StatusCode::CREATED, "{json}");
    }
    assert_eq!(delete_handle.await.unwrap(), StatusCode::NO_CONTENT);

    assert_eq!(count(&pool, "restaurant_pizzas").await, 60);
    assert_eq!(count(&pool, "restaurants").await, 1);
}
