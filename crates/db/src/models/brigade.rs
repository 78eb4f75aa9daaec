//! Brigade entity model and DTOs.

use gardenspace_core::types::{DbId, Timestamp};
use gardenspace_core::validation::not_blank;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::collector::Collector;

/// A row from the `brigades` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Brigade {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
}

/// A brigade together with the collectors assigned to it.
#[derive(Debug, Clone, Serialize)]
pub struct BrigadeWithCollectors {
    #[serde(flatten)]
    pub brigade: Brigade,
    pub collectors: Vec<Collector>,
}

/// DTO for creating a brigade.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateBrigade {
    #[validate(custom(function = "not_blank"), length(max = 50))]
    pub name: String,
}
