//! Repository for the `harvest_logs` table.

use gardenspace_core::types::DbId;
use sqlx::PgExecutor;

use crate::models::harvest::{CreateHarvestLog, HarvestLog, HarvestLogFilter, HarvestLogWithDetails};

const COLUMNS: &str = "id, collector_id, brigade_id, harvest_date, crop_type, quantity, \
                       quality_grade, notes, created_at";

const DETAIL_COLUMNS: &str = "h.id, h.collector_id, h.brigade_id, h.harvest_date, h.crop_type, \
                              h.quantity, h.quality_grade, h.notes, h.created_at, \
                              c.full_name AS collector_name, b.name AS brigade_name";

const DETAIL_JOINS: &str = "FROM harvest_logs h
             JOIN collectors c ON c.id = h.collector_id
             JOIN brigades b ON b.id = h.brigade_id";

/// Provides create, lookup, filtered listing and delete for harvest logs.
pub struct HarvestLogRepo;

impl HarvestLogRepo {
    /// Insert a new harvest log. `created_at` is assigned by the database.
    pub async fn create<'e>(
        conn: impl PgExecutor<'e>,
        input: &CreateHarvestLog,
    ) -> Result<HarvestLog, sqlx::Error> {
        let query = format!(
            "INSERT INTO harvest_logs
                (collector_id, brigade_id, harvest_date, crop_type, quantity, quality_grade, notes)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, HarvestLog>(&query)
            .bind(input.collector_id)
            .bind(input.brigade_id)
            .bind(input.harvest_date)
            .bind(&input.crop_type)
            .bind(input.quantity)
            .bind(&input.quality_grade)
            .bind(&input.notes)
            .fetch_one(conn)
            .await
    }

    /// Find a harvest log by ID with collector and brigade names.
    pub async fn find_by_id<'e>(
        conn: impl PgExecutor<'e>,
        id: DbId,
    ) -> Result<Option<HarvestLogWithDetails>, sqlx::Error> {
        let query = format!("SELECT {DETAIL_COLUMNS} {DETAIL_JOINS} WHERE h.id = $1");
        sqlx::query_as::<_, HarvestLogWithDetails>(&query)
            .bind(id)
            .fetch_optional(conn)
            .await
    }

    /// List harvest logs matching every supplied filter.
    ///
    /// Date bounds are inclusive. `crop_type` matches as a case-insensitive
    /// substring. Newest harvest first, ties broken by descending ID.
    pub async fn list<'e>(
        conn: impl PgExecutor<'e>,
        filter: &HarvestLogFilter,
    ) -> Result<Vec<HarvestLogWithDetails>, sqlx::Error> {
        let query = format!(
            "SELECT {DETAIL_COLUMNS} {DETAIL_JOINS}
             WHERE ($1::DATE IS NULL OR h.harvest_date >= $1)
               AND ($2::DATE IS NULL OR h.harvest_date <= $2)
               AND ($3::BIGINT IS NULL OR h.collector_id = $3)
               AND ($4::BIGINT IS NULL OR h.brigade_id = $4)
               AND ($5::TEXT IS NULL OR strpos(lower(h.crop_type), lower($5)) > 0)
             ORDER BY h.harvest_date DESC, h.id DESC"
        );
        sqlx::query_as::<_, HarvestLogWithDetails>(&query)
            .bind(filter.start_date)
            .bind(filter.end_date)
            .bind(filter.collector_id)
            .bind(filter.brigade_id)
            .bind(&filter.crop_type)
            .fetch_all(conn)
            .await
    }

    /// Number of harvest logs recorded against a brigade.
    pub async fn count_by_brigade<'e>(
        conn: impl PgExecutor<'e>,
        brigade_id: DbId,
    ) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM harvest_logs WHERE brigade_id = $1")
                .bind(brigade_id)
                .fetch_one(conn)
                .await?;
        Ok(count)
    }

    /// Delete a harvest log. Returns `true` if a row was removed.
    pub async fn delete<'e>(conn: impl PgExecutor<'e>, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM harvest_logs WHERE id = $1")
            .bind(id)
            .execute(conn)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
