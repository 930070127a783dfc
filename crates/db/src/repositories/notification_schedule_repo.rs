//! Repository for the `notification_schedules` table.

use solea_core::listing::{clamp_limit, clamp_offset, ListConfig};
use solea_core::types::DbId;
use sqlx::PgPool;

use crate::error::DbError;
use crate::models::notification_schedule::{
    CreateNotificationSchedule, NotificationSchedule, UpdateNotificationSchedule,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, person_id, appointment_date, notify_on, created_at, updated_at";

/// Order keys accepted by the list endpoint.
const LIST_CONFIG: ListConfig = ListConfig {
    orderable: &[
        ("notify", "notify_on ASC"),
        ("date", "appointment_date ASC"),
    ],
    default_order: "notify_on ASC",
};

/// Provides CRUD operations for notification schedules.
pub struct NotificationScheduleRepo;

impl NotificationScheduleRepo {
    /// Insert a new notification schedule, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateNotificationSchedule,
    ) -> Result<NotificationSchedule, DbError> {
        let query = format!(
            "INSERT INTO notification_schedules (person_id, appointment_date, notify_on)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        let schedule = sqlx::query_as::<_, NotificationSchedule>(&query)
            .bind(input.person_id)
            .bind(input.appointment_date)
            .bind(input.notify_on)
            .fetch_one(pool)
            .await?;
        Ok(schedule)
    }

    /// Find a notification schedule by its internal ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<NotificationSchedule>, DbError> {
        let query = format!("SELECT {COLUMNS} FROM notification_schedules WHERE id = $1");
        let schedule = sqlx::query_as::<_, NotificationSchedule>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(schedule)
    }

    /// List notification schedules, optionally filtered by person.
    pub async fn list(
        pool: &PgPool,
        person_id: Option<DbId>,
        order: Option<&str>,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<NotificationSchedule>, DbError> {
        let order = LIST_CONFIG.resolve_order(order)?;
        let query = format!(
            "SELECT {COLUMNS} FROM notification_schedules
             WHERE ($1::bigint IS NULL OR person_id = $1)
             ORDER BY {order}
             LIMIT $2 OFFSET $3"
        );
        let schedules = sqlx::query_as::<_, NotificationSchedule>(&query)
            .bind(person_id)
            .bind(clamp_limit(limit))
            .bind(clamp_offset(offset))
            .fetch_all(pool)
            .await?;
        Ok(schedules)
    }

    /// Update a notification schedule. Only non-`None` fields are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateNotificationSchedule,
    ) -> Result<Option<NotificationSchedule>, DbError> {
        let query = format!(
            "UPDATE notification_schedules SET
                appointment_date = COALESCE($2, appointment_date),
                notify_on = COALESCE($3, notify_on)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let schedule = sqlx::query_as::<_, NotificationSchedule>(&query)
            .bind(id)
            .bind(input.appointment_date)
            .bind(input.notify_on)
            .fetch_optional(pool)
            .await?;
        Ok(schedule)
    }

    /// Delete a notification schedule by ID. Returns `true` if a row was
    /// removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, DbError> {
        let result = sqlx::query("DELETE FROM notification_schedules WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
