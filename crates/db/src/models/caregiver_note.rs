//! Caregiver note entity model and DTOs.
//!
//! Free-text feedback recorded by a client's caregiver or guardian.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use solea_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A caregiver note row from the `caregiver_notes` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CaregiverNote {
    pub id: DbId,
    pub person_id: DbId,
    pub content: String,
    /// System-assigned on insert.
    pub noted_on: NaiveDate,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new caregiver note.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCaregiverNote {
    pub person_id: DbId,
    pub content: String,
}

/// DTO for updating an existing caregiver note.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCaregiverNote {
    pub content: Option<String>,
}
