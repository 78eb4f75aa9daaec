//! Repository for the `brigades` table.

use gardenspace_core::types::DbId;
use sqlx::PgExecutor;

use crate::models::brigade::{Brigade, CreateBrigade};

const COLUMNS: &str = "id, name, created_at";

/// Provides CRUD operations for brigades.
pub struct BrigadeRepo;

impl BrigadeRepo {
    /// Insert a new brigade. Duplicate names violate `uq_brigades_name`.
    pub async fn create<'e>(
        conn: impl PgExecutor<'e>,
        input: &CreateBrigade,
    ) -> Result<Brigade, sqlx::Error> {
        let query = format!("INSERT INTO brigades (name) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Brigade>(&query)
            .bind(&input.name)
            .fetch_one(conn)
            .await
    }

    /// Find a brigade by internal ID.
    pub async fn find_by_id<'e>(
        conn: impl PgExecutor<'e>,
        id: DbId,
    ) -> Result<Option<Brigade>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM brigades WHERE id = $1");
        sqlx::query_as::<_, Brigade>(&query)
            .bind(id)
            .fetch_optional(conn)
            .await
    }

    /// Find a brigade by exact name.
    pub async fn find_by_name<'e>(
        conn: impl PgExecutor<'e>,
        name: &str,
    ) -> Result<Option<Brigade>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM brigades WHERE name = $1");
        sqlx::query_as::<_, Brigade>(&query)
            .bind(name)
            .fetch_optional(conn)
            .await
    }

    /// Lock a brigade row for the rest of the transaction.
    ///
    /// Used before deletion so no collector can be attached concurrently.
    pub async fn lock_by_id<'e>(
        conn: impl PgExecutor<'e>,
        id: DbId,
    ) -> Result<Option<Brigade>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM brigades WHERE id = $1 FOR UPDATE");
        sqlx::query_as::<_, Brigade>(&query)
            .bind(id)
            .fetch_optional(conn)
            .await
    }

    /// List all brigades ordered by name.
    pub async fn list<'e>(conn: impl PgExecutor<'e>) -> Result<Vec<Brigade>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM brigades ORDER BY name ASC, id ASC");
        sqlx::query_as::<_, Brigade>(&query).fetch_all(conn).await
    }

    /// Delete a brigade. Returns `true` if a row was removed.
    pub async fn delete<'e>(conn: impl PgExecutor<'e>, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM brigades WHERE id = $1")
            .bind(id)
            .execute(conn)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
