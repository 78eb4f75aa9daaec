//! Handlers for the `/products` resource and its categories.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use gardenspace_core::error::CoreError;
use gardenspace_core::types::DbId;
use gardenspace_core::validation::validate_input;
use gardenspace_db::models::product::{
    CreateProduct, CreateProductCategory, ProductCategory, ProductWithCategory, UpdateProduct,
};
use gardenspace_db::repositories::{ProductCategoryRepo, ProductRepo};
use serde::Deserialize;
use sqlx::PgExecutor;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Query parameters for `GET /products`.
#[derive(Debug, Deserialize)]
pub struct ProductListParams {
    pub category_id: Option<DbId>,
}

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

/// POST /api/products/categories
pub async fn create_category(
    State(state): State<AppState>,
    Json(input): Json<CreateProductCategory>,
) -> AppResult<(StatusCode, Json<ProductCategory>)> {
    validate_input(&input)?;

    let mut tx = state.pool.begin().await?;
    if ProductCategoryRepo::find_by_name(&mut *tx, &input.name)
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "Product category '{}' already exists",
            input.name
        ))));
    }
    let category = ProductCategoryRepo::create(&mut *tx, &input).await?;
    tx.commit().await?;

    tracing::info!(category_id = category.id, name = %category.name, "Product category created");
    Ok((StatusCode::CREATED, Json(category)))
}

/// GET /api/products/categories
pub async fn list_categories(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<ProductCategory>>> {
    let categories = ProductCategoryRepo::list(&state.pool).await?;
    Ok(Json(categories))
}

/// GET /api/products/categories/{id}
pub async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ProductCategory>> {
    let category = ensure_category_exists(&state.pool, id).await?;
    Ok(Json(category))
}

// ---------------------------------------------------------------------------
// Products
// ---------------------------------------------------------------------------

/// POST /api/products
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateProduct>,
) -> AppResult<(StatusCode, Json<ProductWithCategory>)> {
    validate_input(&input)?;

    let mut tx = state.pool.begin().await?;
    let category = ensure_category_exists(&mut *tx, input.category_id).await?;
    let product = ProductRepo::create(&mut *tx, &input).await?;
    tx.commit().await?;

    tracing::info!(
        product_id = product.id,
        category_id = category.id,
        "Product created"
    );
    Ok((
        StatusCode::CREATED,
        Json(ProductWithCategory { product, category }),
    ))
}

/// GET /api/products[?category_id=N]
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ProductListParams>,
) -> AppResult<Json<Vec<ProductWithCategory>>> {
    let products = ProductRepo::list(&state.pool, params.category_id).await?;
    tracing::debug!(count = products.len(), "Listed products");
    Ok(Json(products))
}

/// GET /api/products/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ProductWithCategory>> {
    let product = ProductRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(not_found(id))?;
    Ok(Json(product))
}

/// PUT /api/products/{id}
///
/// Only the supplied fields change. A new `category_id` must exist.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProduct>,
) -> AppResult<Json<ProductWithCategory>> {
    validate_input(&input)?;

    let mut tx = state.pool.begin().await?;
    ProductRepo::find_by_id(&mut *tx, id)
        .await?
        .ok_or(not_found(id))?;
    if let Some(category_id) = input.category_id {
        ensure_category_exists(&mut *tx, category_id).await?;
    }
    let product = ProductRepo::update(&mut *tx, id, &input)
        .await?
        .ok_or(not_found(id))?;
    let category = ensure_category_exists(&mut *tx, product.category_id).await?;
    tx.commit().await?;

    tracing::info!(product_id = id, "Product updated");
    Ok(Json(ProductWithCategory { product, category }))
}

/// DELETE /api/products/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if ProductRepo::delete(&state.pool, id).await? {
        tracing::info!(product_id = id, "Product deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn ensure_category_exists<'e>(
    conn: impl PgExecutor<'e>,
    id: DbId,
) -> AppResult<ProductCategory> {
    ProductCategoryRepo::find_by_id(conn, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ProductCategory",
            id,
        }))
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Product",
        id,
    })
}
