//! Treatment catalog rules.

use rust_decimal::Decimal;

use crate::error::CoreError;

/// Category of a treatment offering.
///
/// Stored as lowercase TEXT codes in the `treatments` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreatmentCategory {
    Preventive,
    Aesthetic,
    Clinical,
    Rehabilitation,
}

impl TreatmentCategory {
    pub const ALL: [TreatmentCategory; 4] = [
        TreatmentCategory::Preventive,
        TreatmentCategory::Aesthetic,
        TreatmentCategory::Clinical,
        TreatmentCategory::Rehabilitation,
    ];

    /// The database code for this category.
    pub fn as_str(self) -> &'static str {
        match self {
            TreatmentCategory::Preventive => "preventive",
            TreatmentCategory::Aesthetic => "aesthetic",
            TreatmentCategory::Clinical => "clinical",
            TreatmentCategory::Rehabilitation => "rehabilitation",
        }
    }

    /// Parse a database code, rejecting unknown values.
    pub fn parse(value: &str) -> Result<TreatmentCategory, CoreError> {
        TreatmentCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == value)
            .ok_or_else(|| CoreError::Validation(format!("Unknown treatment category: {value}")))
    }
}

/// A treatment's duration must be a positive number of minutes.
pub fn validate_duration(duration_mins: i32) -> Result<(), CoreError> {
    if duration_mins <= 0 {
        return Err(CoreError::Validation(
            "Duration must be a positive number of minutes".into(),
        ));
    }
    Ok(())
}

/// A treatment's price must not be negative.
pub fn validate_price(price: Decimal) -> Result<(), CoreError> {
    if price < Decimal::ZERO {
        return Err(CoreError::Validation("Price must not be negative".into()));
    }
    Ok(())
}

/// Validate a treatment offering's fields before a write.
///
/// Duration must be a positive number of minutes and the price must not be
/// negative. The category string must parse to a known [`TreatmentCategory`].
pub fn validate_treatment(
    duration_mins: i32,
    price: Decimal,
    category: &str,
) -> Result<(), CoreError> {
    validate_duration(duration_mins)?;
    validate_price(price)?;
    TreatmentCategory::parse(category)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_treatment() {
        assert!(validate_treatment(45, Decimal::new(12000, 2), "clinical").is_ok());
    }

    #[test]
    fn test_zero_duration_rejected() {
        assert!(validate_treatment(0, Decimal::ZERO, "clinical").is_err());
    }

    #[test]
    fn test_negative_price_rejected() {
        assert!(validate_treatment(30, Decimal::new(-1, 2), "preventive").is_err());
    }

    #[test]
    fn test_free_treatment_allowed() {
        assert!(validate_treatment(30, Decimal::ZERO, "preventive").is_ok());
    }

    #[test]
    fn test_unknown_category_rejected() {
        assert!(validate_treatment(30, Decimal::ZERO, "surgical").is_err());
    }

    #[test]
    fn test_category_round_trip() {
        for category in TreatmentCategory::ALL {
            assert_eq!(TreatmentCategory::parse(category.as_str()).unwrap(), category);
        }
    }
}
