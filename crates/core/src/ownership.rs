//! Ownership checks for user-scoped records.

use crate::error::CoreError;
use crate::types::DbId;

/// Ensure the caller owns the record.
///
/// Non-owners receive `Forbidden`; callers resolve existence first so a
/// missing record is reported as `NotFound` instead.
pub fn ensure_owner(owner_id: DbId, caller_id: DbId) -> Result<(), CoreError> {
    if owner_id == caller_id {
        Ok(())
    } else {
        Err(CoreError::Forbidden(
            "You do not have access to this project".to_string(),
        ))
    }
}
