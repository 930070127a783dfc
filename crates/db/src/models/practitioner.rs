//! Practitioner entity model and DTOs.

use serde::{Deserialize, Serialize};
use solea_core::types::{DbId, Timestamp};
use sqlx::FromRow;

use crate::models::availability::AvailabilitySlot;

/// A service-provider row from the `practitioners` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Practitioner {
    pub id: DbId,
    pub name: String,
    /// Short specialization line, e.g. pediatric care.
    pub specialization: String,
    pub email: String,
    pub phone_whatsapp: Option<String>,
    pub social_url: Option<String>,
    pub photo_path: Option<String>,
    pub address: Option<String>,
    pub district: Option<String>,
    /// Free-text description of the practitioner's specialty and experience.
    pub specialty_bio: String,
    /// Gates visibility to booking flows; defaults to false.
    pub approved: bool,
    /// Optional link to an authentication identity.
    pub user_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Detail representation embedding the practitioner's availability slots
/// by full value.
#[derive(Debug, Serialize)]
pub struct PractitionerDetail {
    #[serde(flatten)]
    pub practitioner: Practitioner,
    pub availability: Vec<AvailabilitySlot>,
}

/// DTO for creating a new practitioner.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePractitioner {
    pub name: String,
    pub specialization: String,
    pub email: String,
    pub phone_whatsapp: Option<String>,
    pub social_url: Option<String>,
    pub photo_path: Option<String>,
    pub address: Option<String>,
    pub district: Option<String>,
    pub specialty_bio: String,
    pub user_id: Option<DbId>,
}

/// DTO for updating an existing practitioner. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePractitioner {
    pub name: Option<String>,
    pub specialization: Option<String>,
    pub email: Option<String>,
    pub phone_whatsapp: Option<String>,
    pub social_url: Option<String>,
    pub photo_path: Option<String>,
    pub address: Option<String>,
    pub district: Option<String>,
    pub specialty_bio: Option<String>,
    pub approved: Option<bool>,
    pub user_id: Option<DbId>,
}
