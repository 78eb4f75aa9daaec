//! Collector entity model and DTOs.

use gardenspace_core::types::{DbId, Timestamp};
use gardenspace_core::validation::not_blank;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `collectors` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Collector {
    pub id: DbId,
    pub full_name: String,
    pub photo: Option<String>,
    pub personal_characteristic: Option<String>,
    pub birth_year: i32,
    pub brigade_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Collector row joined with the name of its brigade.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CollectorWithBrigade {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub collector: Collector,
    pub brigade_name: String,
}

/// DTO for creating a collector.
///
/// `birth_year` bounds depend on the current date and are checked with
/// [`gardenspace_core::collector::validate_birth_year`].
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCollector {
    #[validate(custom(function = "not_blank"), length(max = 100))]
    pub full_name: String,
    pub photo: Option<String>,
    #[validate(length(max = 500))]
    pub personal_characteristic: Option<String>,
    pub birth_year: i32,
    pub brigade_id: DbId,
}

/// DTO for patching a collector. Absent fields keep their stored value.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateCollector {
    #[validate(custom(function = "not_blank"), length(max = 100))]
    pub full_name: Option<String>,
    pub photo: Option<String>,
    #[validate(length(max = 500))]
    pub personal_characteristic: Option<String>,
    pub birth_year: Option<i32>,
    pub brigade_id: Option<DbId>,
}
