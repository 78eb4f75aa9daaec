pub mod auth;
pub mod brigades;
pub mod harvest;
pub mod health;
pub mod products;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /auth/register                        register (public)
/// /auth/login                           login (public)
/// /auth/profile                         profile (requires auth)
///
/// /brigades                             list, create
/// /brigades/{id}                        get, delete
/// /brigades/collectors                  list (?brigade_id), create
/// /brigades/collectors/{id}             get, update, delete
///
/// /products/categories                  list, create
/// /products/categories/{id}             get
/// /products                             list (?category_id), create
/// /products/{id}                        get, update, delete
///
/// /harvest                              list (filters), create
/// /harvest/{id}                         get, delete
/// /harvest/stats/summary                summary (?start_date&end_date)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/brigades", brigades::router())
        .nest("/products", products::router())
        .nest("/harvest", harvest::router())
}
