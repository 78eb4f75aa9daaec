//! HTTP-level integration tests for the product catalog.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json};
use sqlx::PgPool;

async fn create_category(pool: &PgPool, name: &str) -> i64 {
    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/products/categories",
        serde_json::json!({ "name": name, "description": "Garden supplies" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_category_create_list_get(pool: PgPool) {
    let soil = create_category(&pool, "Soil").await;
    create_category(&pool, "Fertilizers").await;

    let response = get(common::build_test_app(pool.clone()), "/api/products/categories").await;
    let json = body_json(response).await;
    let names: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Fertilizers", "Soil"]);

    let response = get(
        common::build_test_app(pool.clone()),
        &format!("/api/products/categories/{soil}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["name"], "Soil");

    let response = get(common::build_test_app(pool), "/api/products/categories/9999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_category_conflicts(pool: PgPool) {
    create_category(&pool, "Soil").await;
    let response = post_json(
        common::build_test_app(pool),
        "/api/products/categories",
        serde_json::json!({ "name": "Soil" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

// ---------------------------------------------------------------------------
// Products
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_product_round_trip_embeds_category(pool: PgPool) {
    let category = create_category(&pool, "Fertilizers").await;

    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/products",
        serde_json::json!({ "name": "Compost", "price": 9.99, "category_id": category }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    assert_eq!(created["stock"], 0);
    assert_eq!(created["category"]["name"], "Fertilizers");
    let id = created["id"].as_i64().unwrap();

    let response = get(
        common::build_test_app(pool),
        &format!("/api/products/{id}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let fetched = body_json(response).await;
    assert_eq!(fetched["price"], 9.99);
    assert_eq!(fetched["category"]["id"], category);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_product_validation(pool: PgPool) {
    let category = create_category(&pool, "Tools").await;

    for body in [
        serde_json::json!({ "name": "Rake", "price": 0, "category_id": category }),
        serde_json::json!({ "name": "Rake", "price": 5.0, "stock": -1, "category_id": category }),
        serde_json::json!({ "name": "", "price": 5.0, "category_id": category }),
    ] {
        let response = post_json(common::build_test_app(pool.clone()), "/api/products", body).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    let response = post_json(
        common::build_test_app(pool),
        "/api/products",
        serde_json::json!({ "name": "Rake", "price": 5.0, "category_id": 9999 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_product_update_filter_and_delete(pool: PgPool) {
    let tools = create_category(&pool, "Tools").await;
    let seeds = create_category(&pool, "Seeds").await;

    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/products",
        serde_json::json!({ "name": "Rake", "price": 12.5, "stock": 3, "category_id": tools }),
    )
    .await;
    let id = body_json(response).await["id"].as_i64().unwrap();
    let uri = format!("/api/products/{id}");

    let response = put_json(
        common::build_test_app(pool.clone()),
        &uri,
        serde_json::json!({ "category_id": seeds }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated["category"]["name"], "Seeds");
    assert_eq!(updated["price"], 12.5);
    assert_eq!(updated["stock"], 3);

    let response = put_json(
        common::build_test_app(pool.clone()),
        &uri,
        serde_json::json!({ "category_id": 9999 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = get(
        common::build_test_app(pool.clone()),
        &format!("/api/products?category_id={tools}"),
    )
    .await;
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 0);

    let response = delete(common::build_test_app(pool.clone()), &uri).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let response = get(common::build_test_app(pool), &uri).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
