//! Route definitions for the `/brigades` resource, including collectors.

use axum::routing::get;
use axum::Router;

use crate::handlers::{brigade, collector};
use crate::state::AppState;

/// Routes mounted at `/brigades`.
///
/// ```text
/// GET    /                  -> list
/// POST   /                  -> create
/// GET    /{id}              -> get_by_id
/// DELETE /{id}              -> delete
///
/// GET    /collectors        -> collector::list
/// POST   /collectors        -> collector::create
/// GET    /collectors/{id}   -> collector::get_by_id
/// PUT    /collectors/{id}   -> collector::update
/// DELETE /collectors/{id}   -> collector::delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(brigade::list).post(brigade::create))
        .route("/{id}", get(brigade::get_by_id).delete(brigade::delete))
        .route("/collectors", get(collector::list).post(collector::create))
        .route(
            "/collectors/{id}",
            get(collector::get_by_id)
                .put(collector::update)
                .delete(collector::delete),
        )
}
