//! Treatment catalog entity model and DTOs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use solea_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A catalog row from the `treatments` table.
///
/// `category` holds one of the lowercase codes accepted by
/// `solea_core::catalog::TreatmentCategory`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Treatment {
    pub id: DbId,
    pub name: String,
    pub description: String,
    /// Average duration in minutes; always positive.
    pub duration_mins: i32,
    /// Fixed-point price with two decimal places.
    pub price: Decimal,
    pub category: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new treatment offering.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTreatment {
    pub name: String,
    pub description: String,
    pub duration_mins: i32,
    pub price: Decimal,
    pub category: String,
}

/// DTO for updating an existing treatment offering. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTreatment {
    pub name: Option<String>,
    pub description: Option<String>,
    pub duration_mins: Option<i32>,
    pub price: Option<Decimal>,
    pub category: Option<String>,
}
