//! Collector field rules.

use chrono::Datelike;

use crate::error::CoreError;

/// Earliest accepted birth year.
pub const MIN_BIRTH_YEAR: i32 = 1900;

/// Latest accepted birth year: the current calendar year (UTC).
pub fn max_birth_year() -> i32 {
    chrono::Utc::now().year()
}

/// Birth year must fall within `MIN_BIRTH_YEAR..=max_birth_year()`.
pub fn validate_birth_year(year: i32) -> Result<(), CoreError> {
    let max = max_birth_year();
    if !(MIN_BIRTH_YEAR..=max).contains(&year) {
        return Err(CoreError::Validation(format!(
            "birth_year: must be between {MIN_BIRTH_YEAR} and {max}, got {year}"
        )));
    }
    Ok(())
}
