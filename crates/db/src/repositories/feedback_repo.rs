//! Repository for the `feedback` table.
//!
//! Feedback is the one place with a cross-entity write guard: a row may
//! only be attached to a completed appointment, and the status check must
//! commit atomically with the insert. Every write path goes through
//! [`FeedbackRepo::create`].

use solea_core::error::CoreError;
use solea_core::feedback::{validate_appointment_completed, validate_score};
use solea_core::listing::{clamp_limit, clamp_offset, ListConfig};
use solea_core::types::DbId;
use sqlx::PgPool;

use crate::error::DbError;
use crate::models::feedback::{CreateFeedback, Feedback, FeedbackDetail};
use crate::models::person::Person;
use crate::models::status::StatusId;
use crate::repositories::appointment_repo::AppointmentRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, appointment_id, person_id, score, comment, created_at";

/// Order keys accepted by the list endpoint.
const LIST_CONFIG: ListConfig = ListConfig {
    orderable: &[("created", "created_at DESC"), ("score", "score DESC")],
    default_order: "created_at DESC",
};

/// Provides create/read/delete operations for feedback. There is no
/// update: feedback is immutable once submitted.
pub struct FeedbackRepo;

impl FeedbackRepo {
    /// Insert feedback for a completed appointment.
    ///
    /// The appointment row is locked for the duration of the transaction
    /// so it cannot be cancelled between the status check and the insert.
    /// The feedback's person is always the appointment's client. A second
    /// submission for the same appointment violates the 1:1 constraint
    /// and surfaces as a conflict.
    pub async fn create(pool: &PgPool, input: &CreateFeedback) -> Result<Feedback, DbError> {
        validate_score(input.score)?;

        let mut tx = pool.begin().await?;

        let Some((person_id, status_id)) = sqlx::query_as::<_, (DbId, StatusId)>(
            "SELECT person_id, status_id FROM appointments WHERE id = $1 FOR UPDATE",
        )
        .bind(input.appointment_id)
        .fetch_optional(&mut *tx)
        .await?
        else {
            return Err(CoreError::NotFound {
                entity: "Appointment",
                id: input.appointment_id,
            }
            .into());
        };

        validate_appointment_completed(status_id)?;

        let query = format!(
            "INSERT INTO feedback (appointment_id, person_id, score, comment)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        let feedback = sqlx::query_as::<_, Feedback>(&query)
            .bind(input.appointment_id)
            .bind(person_id)
            .bind(input.score)
            .bind(&input.comment)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(feedback)
    }

    /// Find feedback by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Feedback>, DbError> {
        let query = format!("SELECT {COLUMNS} FROM feedback WHERE id = $1");
        let feedback = sqlx::query_as::<_, Feedback>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(feedback)
    }

    /// Find feedback for a given appointment, if any.
    pub async fn find_by_appointment(
        pool: &PgPool,
        appointment_id: DbId,
    ) -> Result<Option<Feedback>, DbError> {
        let query = format!("SELECT {COLUMNS} FROM feedback WHERE appointment_id = $1");
        let feedback = sqlx::query_as::<_, Feedback>(&query)
            .bind(appointment_id)
            .fetch_optional(pool)
            .await?;
        Ok(feedback)
    }

    /// Find feedback with its client and full appointment embedded.
    pub async fn find_detail(pool: &PgPool, id: DbId) -> Result<Option<FeedbackDetail>, DbError> {
        let Some(feedback) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };

        // Related rows are guaranteed by foreign keys.
        let client = sqlx::query_as::<_, Person>(
            "SELECT id, name, email, birth_date, phone, national_id, photo_path, user_id, \
             created_at, updated_at FROM people WHERE id = $1",
        )
        .bind(feedback.person_id)
        .fetch_one(pool)
        .await?;

        let appointment = AppointmentRepo::find_detail(pool, feedback.appointment_id)
            .await?
            .ok_or(CoreError::Internal(
                "Feedback references a missing appointment".into(),
            ))?;

        Ok(Some(FeedbackDetail {
            id: feedback.id,
            client: client.into(),
            appointment,
            score: feedback.score,
            comment: feedback.comment,
            created_at: feedback.created_at,
        }))
    }

    /// List feedback, optionally filtered by client and/or score.
    pub async fn list(
        pool: &PgPool,
        person_id: Option<DbId>,
        score: Option<i16>,
        order: Option<&str>,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<Feedback>, DbError> {
        let order = LIST_CONFIG.resolve_order(order)?;
        let query = format!(
            "SELECT {COLUMNS} FROM feedback
             WHERE ($1::bigint IS NULL OR person_id = $1)
               AND ($2::smallint IS NULL OR score = $2)
             ORDER BY {order}
             LIMIT $3 OFFSET $4"
        );
        let feedback = sqlx::query_as::<_, Feedback>(&query)
            .bind(person_id)
            .bind(score)
            .bind(clamp_limit(limit))
            .bind(clamp_offset(offset))
            .fetch_all(pool)
            .await?;
        Ok(feedback)
    }

    /// Delete feedback by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, DbError> {
        let result = sqlx::query("DELETE FROM feedback WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
