//! Repository for the `product_categories` table.

use gardenspace_core::types::DbId;
use sqlx::PgExecutor;

use crate::models::product::{CreateProductCategory, ProductCategory};

const COLUMNS: &str = "id, name, description";

/// Provides create and lookup operations for product categories.
pub struct ProductCategoryRepo;

impl ProductCategoryRepo {
    /// Insert a new category. Duplicate names violate `uq_product_categories_name`.
    pub async fn create<'e>(
        conn: impl PgExecutor<'e>,
        input: &CreateProductCategory,
    ) -> Result<ProductCategory, sqlx::Error> {
        let query = format!(
            "INSERT INTO product_categories (name, description) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProductCategory>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .fetch_one(conn)
            .await
    }

    pub async fn find_by_id<'e>(
        conn: impl PgExecutor<'e>,
        id: DbId,
    ) -> Result<Option<ProductCategory>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM product_categories WHERE id = $1");
        sqlx::query_as::<_, ProductCategory>(&query)
            .bind(id)
            .fetch_optional(conn)
            .await
    }

    pub async fn find_by_name<'e>(
        conn: impl PgExecutor<'e>,
        name: &str,
    ) -> Result<Option<ProductCategory>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM product_categories WHERE name = $1");
        sqlx::query_as::<_, ProductCategory>(&query)
            .bind(name)
            .fetch_optional(conn)
            .await
    }

    /// List all categories ordered by name.
    pub async fn list<'e>(conn: impl PgExecutor<'e>) -> Result<Vec<ProductCategory>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM product_categories ORDER BY name ASC, id ASC");
        sqlx::query_as::<_, ProductCategory>(&query)
            .fetch_all(conn)
            .await
    }
}
