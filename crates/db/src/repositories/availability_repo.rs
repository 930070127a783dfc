//! Repository for the `availability_slots` table.

use solea_core::listing::{clamp_limit, clamp_offset, ListConfig};
use solea_core::scheduling::{validate_slot_range, Weekday};
use solea_core::types::DbId;
use sqlx::PgPool;

use crate::error::DbError;
use crate::models::availability::{AvailabilitySlot, CreateSlot, UpdateSlot};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, weekday, start_time, end_time, created_at, updated_at";

/// Order keys accepted by the list endpoint.
const LIST_CONFIG: ListConfig = ListConfig {
    orderable: &[
        ("weekday", "weekday ASC, start_time ASC"),
        ("start", "start_time ASC"),
    ],
    default_order: "weekday ASC, start_time ASC",
};

/// Provides CRUD operations for availability slots.
pub struct AvailabilityRepo;

impl AvailabilityRepo {
    /// Insert a new slot, returning the created row.
    ///
    /// Rejects unknown weekday codes and ranges where the start time is
    /// not strictly before the end time. Overlapping slots are permitted.
    pub async fn create(pool: &PgPool, input: &CreateSlot) -> Result<AvailabilitySlot, DbError> {
        Weekday::parse(&input.weekday)?;
        validate_slot_range(input.start_time, input.end_time)?;
        let query = format!(
            "INSERT INTO availability_slots (weekday, start_time, end_time)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        let slot = sqlx::query_as::<_, AvailabilitySlot>(&query)
            .bind(&input.weekday)
            .bind(input.start_time)
            .bind(input.end_time)
            .fetch_one(pool)
            .await?;
        Ok(slot)
    }

    /// Find a slot by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<AvailabilitySlot>, DbError> {
        let query = format!("SELECT {COLUMNS} FROM availability_slots WHERE id = $1");
        let slot = sqlx::query_as::<_, AvailabilitySlot>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(slot)
    }

    /// List slots, optionally filtered by weekday.
    pub async fn list(
        pool: &PgPool,
        weekday: Option<&str>,
        order: Option<&str>,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<AvailabilitySlot>, DbError> {
        if let Some(day) = weekday {
            Weekday::parse(day)?;
        }
        let order = LIST_CONFIG.resolve_order(order)?;
        let query = format!(
            "SELECT {COLUMNS} FROM availability_slots
             WHERE ($1::text IS NULL OR weekday = $1)
             ORDER BY {order}
             LIMIT $2 OFFSET $3"
        );
        let slots = sqlx::query_as::<_, AvailabilitySlot>(&query)
            .bind(weekday)
            .bind(clamp_limit(limit))
            .bind(clamp_offset(offset))
            .fetch_all(pool)
            .await?;
        Ok(slots)
    }

    /// Update a slot. Only non-`None` fields in `input` are applied.
    ///
    /// The time-range invariant spans both columns, so the row is locked
    /// and the effective values validated before the write.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateSlot,
    ) -> Result<Option<AvailabilitySlot>, DbError> {
        if let Some(day) = &input.weekday {
            Weekday::parse(day)?;
        }

        let mut tx = pool.begin().await?;

        let query = format!("SELECT {COLUMNS} FROM availability_slots WHERE id = $1 FOR UPDATE");
        let Some(current) = sqlx::query_as::<_, AvailabilitySlot>(&query)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };

        let start = input.start_time.unwrap_or(current.start_time);
        let end = input.end_time.unwrap_or(current.end_time);
        validate_slot_range(start, end)?;

        let query = format!(
            "UPDATE availability_slots SET
                weekday = COALESCE($2, weekday),
                start_time = $3,
                end_time = $4
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let slot = sqlx::query_as::<_, AvailabilitySlot>(&query)
            .bind(id)
            .bind(&input.weekday)
            .bind(start)
            .bind(end)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(slot))
    }

    /// Delete a slot by ID, removing its practitioner links.
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, DbError> {
        let result = sqlx::query("DELETE FROM availability_slots WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
