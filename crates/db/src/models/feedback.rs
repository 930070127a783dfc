//! Post-visit feedback entity model and DTOs.
//!
//! Feedback is immutable after creation: there is no update DTO.

use serde::{Deserialize, Serialize};
use solea_core::types::{DbId, Timestamp};
use sqlx::FromRow;

use crate::models::appointment::AppointmentDetail;
use crate::models::person::PersonResponse;

/// A feedback row from the `feedback` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Feedback {
    pub id: DbId,
    pub appointment_id: DbId,
    /// Always the appointment's client; assigned by the repository.
    pub person_id: DbId,
    /// 1-5 rating.
    pub score: i16,
    pub comment: Option<String>,
    /// System-assigned at insert; never updated.
    pub created_at: Timestamp,
}

/// Detail representation embedding the client and the full appointment.
#[derive(Debug, Serialize)]
pub struct FeedbackDetail {
    pub id: DbId,
    pub client: PersonResponse,
    pub appointment: AppointmentDetail,
    pub score: i16,
    pub comment: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for creating feedback against a completed appointment.
///
/// The client is derived from the appointment; callers cannot attach
/// feedback on another person's behalf.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateFeedback {
    pub appointment_id: DbId,
    pub score: i16,
    pub comment: Option<String>,
}
