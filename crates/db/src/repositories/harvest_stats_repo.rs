//! Harvest reporting: totals and per-crop / per-brigade breakdowns.

use sqlx::PgPool;

use crate::models::harvest::{BrigadeTotal, CropTotal, DateRange, HarvestSummary};

const RANGE_FILTER: &str = "($1::DATE IS NULL OR h.harvest_date >= $1)
               AND ($2::DATE IS NULL OR h.harvest_date <= $2)";

/// Aggregate queries over `harvest_logs`.
pub struct HarvestStatsRepo;

impl HarvestStatsRepo {
    /// Summarise harvests within an inclusive date range.
    ///
    /// All three aggregates read from one `REPEATABLE READ` snapshot so the
    /// totals always agree with the groups. Groups are sorted by name.
    pub async fn summary(pool: &PgPool, range: DateRange) -> Result<HarvestSummary, sqlx::Error> {
        let mut tx = pool.begin().await?;
        sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ READ ONLY")
            .execute(&mut *tx)
            .await?;

        let totals_query = format!(
            "SELECT COALESCE(SUM(h.quantity), 0)::DOUBLE PRECISION, COUNT(*)
             FROM harvest_logs h
             WHERE {RANGE_FILTER}"
        );
        let (total_quantity, total_logs): (f64, i64) = sqlx::query_as(&totals_query)
            .bind(range.start_date)
            .bind(range.end_date)
            .fetch_one(&mut *tx)
            .await?;

        let crop_query = format!(
            "SELECT h.crop_type AS crop, SUM(h.quantity)::DOUBLE PRECISION AS quantity
             FROM harvest_logs h
             WHERE {RANGE_FILTER}
             GROUP BY h.crop_type
             ORDER BY h.crop_type ASC"
        );
        let by_crop = sqlx::query_as::<_, CropTotal>(&crop_query)
            .bind(range.start_date)
            .bind(range.end_date)
            .fetch_all(&mut *tx)
            .await?;

        let brigade_query = format!(
            "SELECT b.name AS brigade, SUM(h.quantity)::DOUBLE PRECISION AS quantity
             FROM harvest_logs h
             JOIN brigades b ON b.id = h.brigade_id
             WHERE {RANGE_FILTER}
             GROUP BY b.id, b.name
             ORDER BY b.name ASC"
        );
        let by_brigade = sqlx::query_as::<_, BrigadeTotal>(&brigade_query)
            .bind(range.start_date)
            .bind(range.end_date)
            .fetch_all(&mut *tx)
            .await?;

        tx.commit().await?;

        tracing::debug!(
            total_logs,
            crops = by_crop.len(),
            brigades = by_brigade.len(),
            "Harvest summary computed"
        );

        Ok(HarvestSummary {
            total_quantity,
            total_logs,
            by_crop,
            by_brigade,
        })
    }
}
