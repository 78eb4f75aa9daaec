//! Handlers for the `/brigades` resource.

use std::collections::HashMap;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use gardenspace_core::brigade::ensure_brigade_empty;
use gardenspace_core::error::CoreError;
use gardenspace_core::types::DbId;
use gardenspace_core::validation::validate_input;
use gardenspace_db::models::brigade::{Brigade, BrigadeWithCollectors, CreateBrigade};
use gardenspace_db::models::collector::Collector;
use gardenspace_db::repositories::{BrigadeRepo, CollectorRepo, HarvestLogRepo};
use sqlx::PgExecutor;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/brigades
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateBrigade>,
) -> AppResult<(StatusCode, Json<Brigade>)> {
    validate_input(&input)?;

    let mut tx = state.pool.begin().await?;
    if BrigadeRepo::find_by_name(&mut *tx, &input.name)
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "Brigade '{}' already exists",
            input.name
        ))));
    }
    let brigade = BrigadeRepo::create(&mut *tx, &input).await?;
    tx.commit().await?;

    tracing::info!(brigade_id = brigade.id, name = %brigade.name, "Brigade created");
    Ok((StatusCode::CREATED, Json(brigade)))
}

/// GET /api/brigades
///
/// Every brigade with its collectors, ordered by brigade name.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<BrigadeWithCollectors>>> {
    let mut tx = state.pool.begin().await?;
    let brigades = BrigadeRepo::list(&mut *tx).await?;
    let collectors = CollectorRepo::list(&mut *tx, None).await?;
    tx.commit().await?;

    let mut by_brigade: HashMap<DbId, Vec<Collector>> = HashMap::new();
    for collector in collectors {
        by_brigade
            .entry(collector.brigade_id)
            .or_default()
            .push(collector);
    }

    let result: Vec<BrigadeWithCollectors> = brigades
        .into_iter()
        .map(|brigade| BrigadeWithCollectors {
            collectors: by_brigade.remove(&brigade.id).unwrap_or_default(),
            brigade,
        })
        .collect();

    tracing::debug!(count = result.len(), "Listed brigades");
    Ok(Json(result))
}

/// GET /api/brigades/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<BrigadeWithCollectors>> {
    let mut tx = state.pool.begin().await?;
    let brigade = ensure_brigade_exists(&mut *tx, id).await?;
    let collectors = CollectorRepo::list(&mut *tx, Some(id)).await?;
    tx.commit().await?;

    Ok(Json(BrigadeWithCollectors {
        brigade,
        collectors,
    }))
}

/// DELETE /api/brigades/{id}
///
/// Refused with 409 while any collector still belongs to the brigade or any
/// harvest log was recorded against it.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let mut tx = state.pool.begin().await?;

    BrigadeRepo::lock_by_id(&mut *tx, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Brigade",
            id,
        }))?;

    let collector_count = CollectorRepo::count_by_brigade(&mut *tx, id).await?;
    let harvest_log_count = HarvestLogRepo::count_by_brigade(&mut *tx, id).await?;
    ensure_brigade_empty(id, collector_count, harvest_log_count)?;

    BrigadeRepo::delete(&mut *tx, id).await?;
    tx.commit().await?;

    tracing::info!(brigade_id = id, "Brigade deleted");
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Verify that a brigade exists, returning the full row.
pub(crate) async fn ensure_brigade_exists<'e>(
    conn: impl PgExecutor<'e>,
    id: DbId,
) -> AppResult<Brigade> {
    BrigadeRepo::find_by_id(conn, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Brigade",
            id,
        }))
}
