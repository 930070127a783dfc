//! Progress report entity model and DTOs.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use solea_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A progress report row from the `progress_reports` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProgressReport {
    pub id: DbId,
    pub person_id: DbId,
    /// System-assigned on insert.
    pub report_date: NaiveDate,
    /// Progress percentage with two decimal places.
    pub progress: Decimal,
    pub recommendations: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new progress report.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProgressReport {
    pub person_id: DbId,
    pub progress: Decimal,
    pub recommendations: Option<String>,
}

/// DTO for updating an existing progress report. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProgressReport {
    pub progress: Option<Decimal>,
    pub recommendations: Option<String>,
}
