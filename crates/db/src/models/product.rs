//! Product catalog models: categories and products.

use gardenspace_core::types::{DbId, Timestamp};
use gardenspace_core::validation::not_blank;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `product_categories` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct ProductCategory {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
}

/// DTO for creating a product category.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateProductCategory {
    #[validate(custom(function = "not_blank"), length(max = 100))]
    pub name: String,
    pub description: Option<String>,
}

/// A row from the `products` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Product {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub stock: i32,
    pub category_id: DbId,
    pub image_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Product with its category resolved, as returned by the API.
#[derive(Debug, Clone, Serialize)]
pub struct ProductWithCategory {
    #[serde(flatten)]
    pub product: Product,
    pub category: ProductCategory,
}

/// Flat join row: product columns plus `category_name` / `category_description`.
#[derive(Debug, FromRow)]
pub(crate) struct ProductJoinRow {
    #[sqlx(flatten)]
    pub product: Product,
    pub category_name: String,
    pub category_description: Option<String>,
}

impl From<ProductJoinRow> for ProductWithCategory {
    fn from(row: ProductJoinRow) -> Self {
        let category = ProductCategory {
            id: row.product.category_id,
            name: row.category_name,
            description: row.category_description,
        };
        Self {
            product: row.product,
            category,
        }
    }
}

/// DTO for creating a product. `stock` defaults to 0.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateProduct {
    #[validate(custom(function = "not_blank"), length(max = 200))]
    pub name: String,
    pub description: Option<String>,
    #[validate(range(exclusive_min = 0.0))]
    pub price: f64,
    #[validate(range(min = 0))]
    pub stock: Option<i32>,
    pub category_id: DbId,
    #[validate(length(max = 500))]
    pub image_url: Option<String>,
}

/// DTO for patching a product. Absent fields keep their stored value.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateProduct {
    #[validate(custom(function = "not_blank"), length(max = 200))]
    pub name: Option<String>,
    pub description: Option<String>,
    #[validate(range(exclusive_min = 0.0))]
    pub price: Option<f64>,
    #[validate(range(min = 0))]
    pub stock: Option<i32>,
    pub category_id: Option<DbId>,
    #[validate(length(max = 500))]
    pub image_url: Option<String>,
}
