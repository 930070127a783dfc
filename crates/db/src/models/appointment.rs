//! Appointment entity model and DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use solea_core::scheduling::state_machine;
use solea_core::types::{DbId, Timestamp};
use sqlx::FromRow;

use crate::models::person::PersonResponse;
use crate::models::practitioner::PractitionerDetail;
use crate::models::status::StatusId;
use crate::models::treatment::Treatment;

/// An appointment row from the `appointments` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Appointment {
    pub id: DbId,
    pub person_id: DbId,
    pub practitioner_id: DbId,
    pub appointment_date: NaiveDate,
    pub status_id: StatusId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Detail representation embedding the client, the practitioner (with
/// availability), and the booked treatments by full value.
#[derive(Debug, Serialize)]
pub struct AppointmentDetail {
    pub id: DbId,
    pub client: PersonResponse,
    pub practitioner: PractitionerDetail,
    pub treatments: Vec<Treatment>,
    pub appointment_date: NaiveDate,
    pub status_id: StatusId,
    pub status: &'static str,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl AppointmentDetail {
    pub fn assemble(
        appointment: Appointment,
        client: PersonResponse,
        practitioner: PractitionerDetail,
        treatments: Vec<Treatment>,
    ) -> Self {
        AppointmentDetail {
            id: appointment.id,
            client,
            practitioner,
            treatments,
            appointment_date: appointment.appointment_date,
            status_id: appointment.status_id,
            status: state_machine::status_name(appointment.status_id),
            created_at: appointment.created_at,
            updated_at: appointment.updated_at,
        }
    }
}

/// DTO for creating a new appointment. Always starts in `pending` status.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAppointment {
    pub person_id: DbId,
    pub practitioner_id: DbId,
    /// Defaults to today when omitted.
    pub appointment_date: Option<NaiveDate>,
    /// Booked treatments; may be empty.
    #[serde(default)]
    pub treatment_ids: Vec<DbId>,
}

/// DTO for updating an existing appointment.
///
/// Status is never set through updates; use the transition operations.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateAppointment {
    pub appointment_date: Option<NaiveDate>,
    /// When present, fully replaces the booked treatment set.
    pub treatment_ids: Option<Vec<DbId>>,
}
