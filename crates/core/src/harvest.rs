//! Harvest log vocabulary and consistency rules.

use validator::ValidationError;

use crate::error::CoreError;
use crate::types::DbId;
use crate::validation::invalid;

pub const GRADE_A: &str = "A";
pub const GRADE_B: &str = "B";
pub const GRADE_C: &str = "C";

/// All accepted quality grades.
pub const QUALITY_GRADES: &[&str] = &[GRADE_A, GRADE_B, GRADE_C];

/// Quality grade must be one of [`QUALITY_GRADES`].
pub fn validate_quality_grade(grade: &str) -> Result<(), ValidationError> {
    if QUALITY_GRADES.contains(&grade) {
        Ok(())
    } else {
        Err(invalid(
            "quality_grade",
            format!(
                "invalid grade '{grade}', must be one of: {}",
                QUALITY_GRADES.join(", ")
            ),
        ))
    }
}

/// A log may only be recorded for a brigade the collector currently belongs to.
pub fn ensure_collector_in_brigade(
    collector_id: DbId,
    collector_brigade_id: DbId,
    brigade_id: DbId,
) -> Result<(), CoreError> {
    if collector_brigade_id != brigade_id {
        return Err(CoreError::Conflict(format!(
            "Collector {collector_id} is not in brigade {brigade_id}"
        )));
    }
    Ok(())
}
