//! Handlers for the `/harvest` resource and its summary report.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use gardenspace_core::error::CoreError;
use gardenspace_core::harvest::ensure_collector_in_brigade;
use gardenspace_core::types::DbId;
use gardenspace_core::validation::validate_input;
use gardenspace_db::models::harvest::{
    CreateHarvestLog, DateRange, HarvestLogFilter, HarvestLogWithDetails, HarvestSummary,
};
use gardenspace_db::repositories::{CollectorRepo, HarvestLogRepo, HarvestStatsRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::brigade::ensure_brigade_exists;
use crate::state::AppState;

/// POST /api/harvest
///
/// The collector must currently belong to the brigade named in the log.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateHarvestLog>,
) -> AppResult<(StatusCode, Json<HarvestLogWithDetails>)> {
    validate_input(&input)?;

    let mut tx = state.pool.begin().await?;

    // Share lock: the collector cannot be moved to another brigade before commit.
    let collector = CollectorRepo::find_by_id_for_share(&mut *tx, input.collector_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Collector",
            id: input.collector_id,
        }))?;
    let brigade = ensure_brigade_exists(&mut *tx, input.brigade_id).await?;
    ensure_collector_in_brigade(collector.id, collector.brigade_id, brigade.id)?;

    let log = HarvestLogRepo::create(&mut *tx, &input).await?;
    tx.commit().await?;

    tracing::info!(
        harvest_log_id = log.id,
        collector_id = collector.id,
        brigade_id = brigade.id,
        "Harvest logged"
    );
    Ok((
        StatusCode::CREATED,
        Json(HarvestLogWithDetails {
            log,
            collector_name: collector.full_name,
            brigade_name: brigade.name,
        }),
    ))
}

/// GET /api/harvest[?start_date&end_date&collector_id&brigade_id&crop_type]
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<HarvestLogFilter>,
) -> AppResult<Json<Vec<HarvestLogWithDetails>>> {
    let logs = HarvestLogRepo::list(&state.pool, &filter).await?;
    tracing::debug!(count = logs.len(), "Listed harvest logs");
    Ok(Json(logs))
}

/// GET /api/harvest/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<HarvestLogWithDetails>> {
    let log = HarvestLogRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(not_found(id))?;
    Ok(Json(log))
}

/// GET /api/harvest/stats/summary[?start_date&end_date]
pub async fn summary(
    State(state): State<AppState>,
    Query(range): Query<DateRange>,
) -> AppResult<Json<HarvestSummary>> {
    let summary = HarvestStatsRepo::summary(&state.pool, range).await?;
    Ok(Json(summary))
}

/// DELETE /api/harvest/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if HarvestLogRepo::delete(&state.pool, id).await? {
        tracing::info!(harvest_log_id = id, "Harvest log deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "HarvestLog",
        id,
    })
}
