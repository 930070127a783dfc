//! Activity log entity model and DTOs.
//!
//! Records gamified activities and the score earned in each; a person's
//! accumulated score is the sum of their rows.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use solea_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// An activity row from the `activity_logs` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ActivityLog {
    pub id: DbId,
    pub person_id: DbId,
    pub description: String,
    pub score: i32,
    /// System-assigned on insert.
    pub activity_date: NaiveDate,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new activity log entry.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateActivityLog {
    pub person_id: DbId,
    pub description: String,
    pub score: i32,
}

/// DTO for updating an existing activity log entry. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateActivityLog {
    pub description: Option<String>,
    pub score: Option<i32>,
}
