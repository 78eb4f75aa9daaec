//! Route definitions for the `/products` resource and its categories.

use axum::routing::get;
use axum::Router;

use crate::handlers::product;
use crate::state::AppState;

/// Routes mounted at `/products`.
///
/// ```text
/// GET    /                   -> list
/// POST   /                   -> create
/// GET    /{id}               -> get_by_id
/// PUT    /{id}               -> update
/// DELETE /{id}               -> delete
///
/// GET    /categories         -> list_categories
/// POST   /categories         -> create_category
/// GET    /categories/{id}    -> get_category
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(product::list).post(product::create))
        .route(
            "/{id}",
            get(product::get_by_id)
                .put(product::update)
                .delete(product::delete),
        )
        .route(
            "/categories",
            get(product::list_categories).post(product::create_category),
        )
        .route("/categories/{id}", get(product::get_category))
}
