//! Client profile rules and derived fields.

use chrono::NaiveDate;
use validator::ValidateEmail;

use crate::error::CoreError;

/// Age in whole years on the given date, or `None` without a birth date.
///
/// Computed as `floor(days_since_birth / 365.25)`. This ignores exact
/// leap-year alignment and is intended for display, not legal age-gating.
pub fn age_on(birth_date: Option<NaiveDate>, on: NaiveDate) -> Option<i64> {
    let birth = birth_date?;
    let days = (on - birth).num_days();
    Some((days as f64 / 365.25).floor() as i64)
}

/// A display name must be non-empty.
pub fn validate_name(name: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation("Name is required".into()));
    }
    Ok(())
}

/// An email must be syntactically valid.
pub fn validate_email(email: &str) -> Result<(), CoreError> {
    if !email.validate_email() {
        return Err(CoreError::Validation(format!("Invalid email: {email}")));
    }
    Ok(())
}

/// Validate a person's required fields before a write.
pub fn validate_person(name: &str, email: &str) -> Result<(), CoreError> {
    validate_name(name)?;
    validate_email(email)
}
