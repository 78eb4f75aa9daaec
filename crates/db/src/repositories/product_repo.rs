//! Repository for the `products` table.
//!
//! Reads join `product_categories` so every product carries its category.

use gardenspace_core::types::DbId;
use sqlx::PgExecutor;

use crate::models::product::{
    CreateProduct, Product, ProductJoinRow, ProductWithCategory, UpdateProduct,
};

const COLUMNS: &str = "id, name, description, price, stock, category_id, image_url, \
                       created_at, updated_at";

const JOINED_COLUMNS: &str = "p.id, p.name, p.description, p.price, p.stock, p.category_id, \
                              p.image_url, p.created_at, p.updated_at, \
                              c.name AS category_name, c.description AS category_description";

/// Provides CRUD operations for products.
pub struct ProductRepo;

impl ProductRepo {
    /// Insert a new product, returning the created row. `stock` defaults to 0.
    pub async fn create<'e>(
        conn: impl PgExecutor<'e>,
        input: &CreateProduct,
    ) -> Result<Product, sqlx::Error> {
        let query = format!(
            "INSERT INTO products (name, description, price, stock, category_id, image_url)
             VALUES ($1, $2, $3, COALESCE($4, 0), $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.price)
            .bind(input.stock)
            .bind(input.category_id)
            .bind(&input.image_url)
            .fetch_one(conn)
            .await
    }

    /// Find a product by ID with its category resolved.
    pub async fn find_by_id<'e>(
        conn: impl PgExecutor<'e>,
        id: DbId,
    ) -> Result<Option<ProductWithCategory>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS}
             FROM products p
             JOIN product_categories c ON c.id = p.category_id
             WHERE p.id = $1"
        );
        let row = sqlx::query_as::<_, ProductJoinRow>(&query)
            .bind(id)
            .fetch_optional(conn)
            .await?;
        Ok(row.map(ProductWithCategory::from))
    }

    /// List products, optionally restricted to one category, ordered by ID.
    pub async fn list<'e>(
        conn: impl PgExecutor<'e>,
        category_id: Option<DbId>,
    ) -> Result<Vec<ProductWithCategory>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS}
             FROM products p
             JOIN product_categories c ON c.id = p.category_id
             WHERE ($1::BIGINT IS NULL OR p.category_id = $1)
             ORDER BY p.id ASC"
        );
        let rows = sqlx::query_as::<_, ProductJoinRow>(&query)
            .bind(category_id)
            .fetch_all(conn)
            .await?;
        Ok(rows.into_iter().map(ProductWithCategory::from).collect())
    }

    /// Update a product. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update<'e>(
        conn: impl PgExecutor<'e>,
        id: DbId,
        input: &UpdateProduct,
    ) -> Result<Option<Product>, sqlx::Error> {
        let query = format!(
            "UPDATE products SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                price = COALESCE($4, price),
                stock = COALESCE($5, stock),
                category_id = COALESCE($6, category_id),
                image_url = COALESCE($7, image_url),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.price)
            .bind(input.stock)
            .bind(input.category_id)
            .bind(&input.image_url)
            .fetch_optional(conn)
            .await
    }

    /// Delete a product unconditionally. Returns `true` if a row was removed.
    pub async fn delete<'e>(conn: impl PgExecutor<'e>, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(conn)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
