//! Post-visit feedback rules.

use crate::error::CoreError;
use crate::scheduling::appointment_status;

/// Validate a feedback score. Scores are a 1-5 rating scale.
pub fn validate_score(score: i16) -> Result<(), CoreError> {
    if !(1..=5).contains(&score) {
        return Err(CoreError::Validation(
            "Score must be between 1 and 5".into(),
        ));
    }
    Ok(())
}

/// The cross-entity guard: feedback may only be attached to a completed
/// appointment. Callers must evaluate this inside the same transaction as
/// the insert so the status cannot change between check and write.
pub fn validate_appointment_completed(status_id: i16) -> Result<(), CoreError> {
    if status_id != appointment_status::COMPLETED {
        return Err(CoreError::Validation(
            "Feedback can only be submitted for completed appointments".into(),
        ));
    }
    Ok(())
}
