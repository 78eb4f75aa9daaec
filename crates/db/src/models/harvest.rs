//! Harvest log models, list filters and report rows.

use gardenspace_core::harvest::validate_quality_grade;
use gardenspace_core::types::{Date, DbId, Timestamp};
use gardenspace_core::validation::not_blank;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `harvest_logs` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct HarvestLog {
    pub id: DbId,
    pub collector_id: DbId,
    pub brigade_id: DbId,
    pub harvest_date: Date,
    pub crop_type: String,
    pub quantity: f64,
    pub quality_grade: String,
    pub notes: Option<String>,
    pub created_at: Timestamp,
}

/// Harvest log with collector and brigade names resolved.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct HarvestLogWithDetails {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub log: HarvestLog,
    pub collector_name: String,
    pub brigade_name: String,
}

/// DTO for recording a harvest.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateHarvestLog {
    pub collector_id: DbId,
    pub brigade_id: DbId,
    pub harvest_date: Date,
    #[validate(custom(function = "not_blank"), length(max = 100))]
    pub crop_type: String,
    #[validate(range(exclusive_min = 0.0))]
    pub quantity: f64,
    #[validate(custom(function = "validate_quality_grade"))]
    pub quality_grade: String,
    #[validate(length(max = 500))]
    pub notes: Option<String>,
}

/// Optional filters for listing harvest logs. Date bounds are inclusive.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct HarvestLogFilter {
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub collector_id: Option<DbId>,
    pub brigade_id: Option<DbId>,
    /// Case-insensitive substring of the crop type.
    pub crop_type: Option<String>,
}

/// Inclusive date range for the summary report.
#[derive(Debug, Default, Clone, Copy, Deserialize)]
pub struct DateRange {
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
}

/// Total quantity harvested for one crop.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct CropTotal {
    pub crop: String,
    pub quantity: f64,
}

/// Total quantity harvested by one brigade.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct BrigadeTotal {
    pub brigade: String,
    pub quantity: f64,
}

/// Aggregate harvest statistics over a date range.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HarvestSummary {
    pub total_quantity: f64,
    pub total_logs: i64,
    pub by_crop: Vec<CropTotal>,
    pub by_brigade: Vec<BrigadeTotal>,
}
