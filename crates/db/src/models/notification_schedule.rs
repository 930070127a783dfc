//! Notification schedule entity model and DTOs.
//!
//! Pairs an upcoming visit date with the date a reminder should go out.
//! Delivery itself is out of scope; this is record keeping.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use solea_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A notification schedule row from the `notification_schedules` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct NotificationSchedule {
    pub id: DbId,
    pub person_id: DbId,
    pub appointment_date: NaiveDate,
    pub notify_on: NaiveDate,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new notification schedule.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateNotificationSchedule {
    pub person_id: DbId,
    pub appointment_date: NaiveDate,
    pub notify_on: NaiveDate,
}

/// DTO for updating an existing notification schedule. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateNotificationSchedule {
    pub appointment_date: Option<NaiveDate>,
    pub notify_on: Option<NaiveDate>,
}
