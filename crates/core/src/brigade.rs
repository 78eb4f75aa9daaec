//! Brigade membership rules.

use crate::error::CoreError;
use crate::types::DbId;

/// A brigade may only be deleted once no collector and no harvest log
/// references it.
pub fn ensure_brigade_empty(
    brigade_id: DbId,
    collector_count: i64,
    harvest_log_count: i64,
) -> Result<(), CoreError> {
    if collector_count > 0 {
        return Err(CoreError::Conflict(format!(
            "Brigade {brigade_id} has dependents: {collector_count} collector(s) still assigned"
        )));
    }
    if harvest_log_count > 0 {
        return Err(CoreError::Conflict(format!(
            "Brigade {brigade_id} has dependents: {harvest_log_count} harvest log(s) recorded"
        )));
    }
    Ok(())
}
