//! Client (person) entity model and DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use solea_core::people::age_on;
use solea_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A client row from the `people` table.
#[derive(Debug, Clone, FromRow)]
pub struct Person {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub birth_date: Option<NaiveDate>,
    pub phone: Option<String>,
    pub national_id: Option<String>,
    /// Opaque reference into file storage; the API never reads the blob.
    pub photo_path: Option<String>,
    /// Optional link to an authentication identity.
    pub user_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// API representation of a person, including the derived `age` field.
#[derive(Debug, Clone, Serialize)]
pub struct PersonResponse {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub birth_date: Option<NaiveDate>,
    pub phone: Option<String>,
    pub national_id: Option<String>,
    pub photo_path: Option<String>,
    pub user_id: Option<DbId>,
    /// Whole years since `birth_date`, or `null` when unknown.
    pub age: Option<i64>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<Person> for PersonResponse {
    fn from(person: Person) -> Self {
        let age = age_on(person.birth_date, chrono::Utc::now().date_naive());
        PersonResponse {
            id: person.id,
            name: person.name,
            email: person.email,
            birth_date: person.birth_date,
            phone: person.phone,
            national_id: person.national_id,
            photo_path: person.photo_path,
            user_id: person.user_id,
            age,
            created_at: person.created_at,
            updated_at: person.updated_at,
        }
    }
}

/// DTO for creating a new person.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePerson {
    pub name: String,
    pub email: String,
    pub birth_date: Option<NaiveDate>,
    pub phone: Option<String>,
    pub national_id: Option<String>,
    pub photo_path: Option<String>,
    pub user_id: Option<DbId>,
}

/// DTO for updating an existing person. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePerson {
    pub name: Option<String>,
    pub email: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub phone: Option<String>,
    pub national_id: Option<String>,
    pub photo_path: Option<String>,
    pub user_id: Option<DbId>,
}
