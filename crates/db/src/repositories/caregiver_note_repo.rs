//! Repository for the `caregiver_notes` table.

use solea_core::listing::{clamp_limit, clamp_offset, ListConfig};
use solea_core::types::DbId;
use sqlx::PgPool;

use crate::error::DbError;
use crate::models::caregiver_note::{CaregiverNote, CreateCaregiverNote, UpdateCaregiverNote};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, person_id, content, noted_on, created_at, updated_at";

/// Order keys accepted by the list endpoint.
const LIST_CONFIG: ListConfig = ListConfig {
    orderable: &[("date", "noted_on DESC")],
    default_order: "noted_on DESC",
};

/// Provides CRUD operations for caregiver notes.
pub struct CaregiverNoteRepo;

impl CaregiverNoteRepo {
    /// Insert a new caregiver note, returning the created row. The note
    /// date is assigned by the database.
    pub async fn create(
        pool: &PgPool,
        input: &CreateCaregiverNote,
    ) -> Result<CaregiverNote, DbError> {
        let query = format!(
            "INSERT INTO caregiver_notes (person_id, content)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        let note = sqlx::query_as::<_, CaregiverNote>(&query)
            .bind(input.person_id)
            .bind(&input.content)
            .fetch_one(pool)
            .await?;
        Ok(note)
    }

    /// Find a caregiver note by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<CaregiverNote>, DbError> {
        let query = format!("SELECT {COLUMNS} FROM caregiver_notes WHERE id = $1");
        let note = sqlx::query_as::<_, CaregiverNote>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(note)
    }

    /// List caregiver notes, optionally filtered by person.
    pub async fn list(
        pool: &PgPool,
        person_id: Option<DbId>,
        order: Option<&str>,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<CaregiverNote>, DbError> {
        let order = LIST_CONFIG.resolve_order(order)?;
        let query = format!(
            "SELECT {COLUMNS} FROM caregiver_notes
             WHERE ($1::bigint IS NULL OR person_id = $1)
             ORDER BY {order}
             LIMIT $2 OFFSET $3"
        );
        let notes = sqlx::query_as::<_, CaregiverNote>(&query)
            .bind(person_id)
            .bind(clamp_limit(limit))
            .bind(clamp_offset(offset))
            .fetch_all(pool)
            .await?;
        Ok(notes)
    }

    /// Update a caregiver note. Only non-`None` fields are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCaregiverNote,
    ) -> Result<Option<CaregiverNote>, DbError> {
        let query = format!(
            "UPDATE caregiver_notes SET
                content = COALESCE($2, content)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let note = sqlx::query_as::<_, CaregiverNote>(&query)
            .bind(id)
            .bind(&input.content)
            .fetch_optional(pool)
            .await?;
        Ok(note)
    }

    /// Delete a caregiver note by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, DbError> {
        let result = sqlx::query("DELETE FROM caregiver_notes WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
