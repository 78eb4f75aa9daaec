//! Repository for the `users` table.

use gardenspace_core::types::DbId;
use sqlx::PgExecutor;

use crate::models::user::{CreateUser, User};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, username, full_name, password_hash, birth_date, address, gender, \
                       hobby, vk_profile, blood_group, rh_factor, created_at";

/// Provides create and lookup operations for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user, returning the created row.
    ///
    /// A concurrent registration with the same username or VK profile fails
    /// here with a unique violation on `uq_users_username` / `uq_users_vk_profile`.
    pub async fn create<'e>(
        conn: impl PgExecutor<'e>,
        input: &CreateUser,
    ) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (username, full_name, password_hash, birth_date, address, \
                                gender, hobby, vk_profile, blood_group, rh_factor)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&input.username)
            .bind(&input.full_name)
            .bind(&input.password_hash)
            .bind(input.birth_date)
            .bind(&input.address)
            .bind(&input.gender)
            .bind(&input.hobby)
            .bind(&input.vk_profile)
            .bind(&input.blood_group)
            .bind(&input.rh_factor)
            .fetch_one(conn)
            .await
    }

    /// Find a user by internal ID.
    pub async fn find_by_id<'e>(
        conn: impl PgExecutor<'e>,
        id: DbId,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(conn)
            .await
    }

    /// Find a user by username (case-sensitive).
    pub async fn find_by_username<'e>(
        conn: impl PgExecutor<'e>,
        username: &str,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE username = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(username)
            .fetch_optional(conn)
            .await
    }

    /// Whether any user already has this VK profile bound.
    pub async fn vk_profile_exists<'e>(
        conn: impl PgExecutor<'e>,
        vk_profile: &str,
    ) -> Result<bool, sqlx::Error> {
        let (exists,): (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM users WHERE vk_profile = $1)")
                .bind(vk_profile)
                .fetch_one(conn)
                .await?;
        Ok(exists)
    }
}
