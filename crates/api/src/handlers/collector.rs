//! Handlers for the `/brigades/collectors` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use gardenspace_core::collector::validate_birth_year;
use gardenspace_core::error::CoreError;
use gardenspace_core::types::DbId;
use gardenspace_core::validation::validate_input;
use gardenspace_db::models::collector::{
    Collector, CollectorWithBrigade, CreateCollector, UpdateCollector,
};
use gardenspace_db::repositories::CollectorRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::handlers::brigade::ensure_brigade_exists;
use crate::state::AppState;

/// Query parameters for `GET /brigades/collectors`.
#[derive(Debug, Deserialize)]
pub struct CollectorListParams {
    pub brigade_id: Option<DbId>,
}

/// POST /api/brigades/collectors
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateCollector>,
) -> AppResult<(StatusCode, Json<Collector>)> {
    validate_input(&input)?;
    validate_birth_year(input.birth_year)?;

    let mut tx = state.pool.begin().await?;
    ensure_brigade_exists(&mut *tx, input.brigade_id).await?;
    let collector = CollectorRepo::create(&mut *tx, &input).await?;
    tx.commit().await?;

    tracing::info!(
        collector_id = collector.id,
        brigade_id = collector.brigade_id,
        "Collector created"
    );
    Ok((StatusCode::CREATED, Json(collector)))
}

/// GET /api/brigades/collectors[?brigade_id=N]
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<CollectorListParams>,
) -> AppResult<Json<Vec<CollectorWithBrigade>>> {
    let collectors = CollectorRepo::list_with_brigade(&state.pool, params.brigade_id).await?;
    tracing::debug!(count = collectors.len(), "Listed collectors");
    Ok(Json(collectors))
}

/// GET /api/brigades/collectors/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Collector>> {
    let collector = CollectorRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(not_found(id))?;
    Ok(Json(collector))
}

/// PUT /api/brigades/collectors/{id}
///
/// Only the supplied fields change.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCollector>,
) -> AppResult<Json<Collector>> {
    validate_input(&input)?;
    if let Some(year) = input.birth_year {
        validate_birth_year(year)?;
    }

    let mut tx = state.pool.begin().await?;
    CollectorRepo::find_by_id(&mut *tx, id)
        .await?
        .ok_or(not_found(id))?;
    if let Some(brigade_id) = input.brigade_id {
        ensure_brigade_exists(&mut *tx, brigade_id).await?;
    }
    let collector = CollectorRepo::update(&mut *tx, id, &input)
        .await?
        .ok_or(not_found(id))?;
    tx.commit().await?;

    tracing::info!(collector_id = id, "Collector updated");
    Ok(Json(collector))
}

/// DELETE /api/brigades/collectors/{id}
///
/// Unconditional; the collector's harvest logs are removed with it.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if CollectorRepo::delete(&state.pool, id).await? {
        tracing::info!(collector_id = id, "Collector deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Collector",
        id,
    })
}
