//! User entity model and DTOs.

use gardenspace_core::types::{Date, DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Full user row from the `users` table.
///
/// Contains the password hash -- NEVER serialize this to API responses directly.
/// Use [`UserResponse`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub username: String,
    pub full_name: String,
    pub password_hash: String,
    pub birth_date: Date,
    pub address: String,
    pub gender: String,
    pub hobby: Option<String>,
    pub vk_profile: Option<String>,
    pub blood_group: String,
    pub rh_factor: String,
    pub created_at: Timestamp,
}

/// Safe user representation for API responses (no password hash).
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: DbId,
    pub username: String,
    pub full_name: String,
    pub birth_date: Date,
    pub address: String,
    pub gender: String,
    pub hobby: Option<String>,
    pub vk_profile: Option<String>,
    pub blood_group: String,
    pub rh_factor: String,
    pub created_at: Timestamp,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            full_name: user.full_name,
            birth_date: user.birth_date,
            address: user.address,
            gender: user.gender,
            hobby: user.hobby,
            vk_profile: user.vk_profile,
            blood_group: user.blood_group,
            rh_factor: user.rh_factor,
            created_at: user.created_at,
        }
    }
}

/// Short identity block embedded in auth responses.
#[derive(Debug, Clone, Serialize)]
pub struct UserSummary {
    pub id: DbId,
    pub username: String,
    pub full_name: String,
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            full_name: user.full_name.clone(),
        }
    }
}

/// DTO for inserting a new user. The password is already hashed.
#[derive(Debug)]
pub struct CreateUser {
    pub username: String,
    pub full_name: String,
    pub password_hash: String,
    pub birth_date: Date,
    pub address: String,
    pub gender: String,
    pub hobby: Option<String>,
    pub vk_profile: Option<String>,
    pub blood_group: String,
    pub rh_factor: String,
}
