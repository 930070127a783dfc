//! Availability slot entity model and DTOs.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use solea_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A recurring weekly time window from the `availability_slots` table.
///
/// `weekday` holds one of the lowercase codes accepted by
/// `solea_core::scheduling::Weekday`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AvailabilitySlot {
    pub id: DbId,
    pub weekday: String,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new availability slot.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSlot {
    pub weekday: String,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

/// DTO for updating an existing availability slot. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateSlot {
    pub weekday: Option<String>,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
}
