//! Route definitions for the `/harvest` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::harvest;
use crate::state::AppState;

/// Routes mounted at `/harvest`.
///
/// ```text
/// GET    /                -> list
/// POST   /                -> create
/// GET    /{id}            -> get_by_id
/// DELETE /{id}            -> delete
/// GET    /stats/summary   -> summary
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(harvest::list).post(harvest::create))
        .route("/{id}", get(harvest::get_by_id).delete(harvest::delete))
        .route("/stats/summary", get(harvest::summary))
}
