//! Repository for the `collectors` table.

use gardenspace_core::types::DbId;
use sqlx::PgExecutor;

use crate::models::collector::{Collector, CollectorWithBrigade, CreateCollector, UpdateCollector};

const COLUMNS: &str = "id, full_name, photo, personal_characteristic, birth_year, brigade_id, \
                       created_at, updated_at";

/// Collector columns prefixed with the `c` alias, plus the joined brigade name.
const JOINED_COLUMNS: &str = "c.id, c.full_name, c.photo, c.personal_characteristic, \
                              c.birth_year, c.brigade_id, c.created_at, c.updated_at, \
                              b.name AS brigade_name";

/// Provides CRUD operations for collectors.
pub struct CollectorRepo;

impl CollectorRepo {
    /// Insert a new collector, returning the created row.
    pub async fn create<'e>(
        conn: impl PgExecutor<'e>,
        input: &CreateCollector,
    ) -> Result<Collector, sqlx::Error> {
        let query = format!(
            "INSERT INTO collectors (full_name, photo, personal_characteristic, birth_year, brigade_id)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Collector>(&query)
            .bind(&input.full_name)
            .bind(&input.photo)
            .bind(&input.personal_characteristic)
            .bind(input.birth_year)
            .bind(input.brigade_id)
            .fetch_one(conn)
            .await
    }

    /// Find a collector by internal ID.
    pub async fn find_by_id<'e>(
        conn: impl PgExecutor<'e>,
        id: DbId,
    ) -> Result<Option<Collector>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM collectors WHERE id = $1");
        sqlx::query_as::<_, Collector>(&query)
            .bind(id)
            .fetch_optional(conn)
            .await
    }

    /// Find a collector and hold a share lock on the row until the
    /// transaction ends, so its brigade cannot change underneath the caller.
    pub async fn find_by_id_for_share<'e>(
        conn: impl PgExecutor<'e>,
        id: DbId,
    ) -> Result<Option<Collector>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM collectors WHERE id = $1 FOR SHARE");
        sqlx::query_as::<_, Collector>(&query)
            .bind(id)
            .fetch_optional(conn)
            .await
    }

    /// List collectors, optionally restricted to one brigade, ordered by ID.
    pub async fn list<'e>(
        conn: impl PgExecutor<'e>,
        brigade_id: Option<DbId>,
    ) -> Result<Vec<Collector>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM collectors
             WHERE ($1::BIGINT IS NULL OR brigade_id = $1)
             ORDER BY id ASC"
        );
        sqlx::query_as::<_, Collector>(&query)
            .bind(brigade_id)
            .fetch_all(conn)
            .await
    }

    /// List collectors with their brigade name, optionally filtered by brigade.
    pub async fn list_with_brigade<'e>(
        conn: impl PgExecutor<'e>,
        brigade_id: Option<DbId>,
    ) -> Result<Vec<CollectorWithBrigade>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS}
             FROM collectors c
             JOIN brigades b ON b.id = c.brigade_id
             WHERE ($1::BIGINT IS NULL OR c.brigade_id = $1)
             ORDER BY c.id ASC"
        );
        sqlx::query_as::<_, CollectorWithBrigade>(&query)
            .bind(brigade_id)
            .fetch_all(conn)
            .await
    }

    /// Number of collectors currently assigned to a brigade.
    pub async fn count_by_brigade<'e>(
        conn: impl PgExecutor<'e>,
        brigade_id: DbId,
    ) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM collectors WHERE brigade_id = $1")
                .bind(brigade_id)
                .fetch_one(conn)
                .await?;
        Ok(count)
    }

    /// Update a collector. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update<'e>(
        conn: impl PgExecutor<'e>,
        id: DbId,
        input: &UpdateCollector,
    ) -> Result<Option<Collector>, sqlx::Error> {
        let query = format!(
            "UPDATE collectors SET
                full_name = COALESCE($2, full_name),
                photo = COALESCE($3, photo),
                personal_characteristic = COALESCE($4, personal_characteristic),
                birth_year = COALESCE($5, birth_year),
                brigade_id = COALESCE($6, brigade_id),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Collector>(&query)
            .bind(id)
            .bind(&input.full_name)
            .bind(&input.photo)
            .bind(&input.personal_characteristic)
            .bind(input.birth_year)
            .bind(input.brigade_id)
            .fetch_optional(conn)
            .await
    }

    /// Delete a collector. Their harvest logs go with them (`ON DELETE CASCADE`).
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete<'e>(conn: impl PgExecutor<'e>, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM collectors WHERE id = $1")
            .bind(id)
            .execute(conn)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
