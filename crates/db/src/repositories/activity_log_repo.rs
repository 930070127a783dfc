//! Repository for the `activity_logs` table.

use solea_core::listing::{clamp_limit, clamp_offset, ListConfig};
use solea_core::types::DbId;
use sqlx::PgPool;

use crate::error::DbError;
use crate::models::activity_log::{ActivityLog, CreateActivityLog, UpdateActivityLog};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, person_id, description, score, activity_date, created_at, updated_at";

/// Order keys accepted by the list endpoint.
const LIST_CONFIG: ListConfig = ListConfig {
    orderable: &[("date", "activity_date DESC"), ("score", "score DESC")],
    default_order: "activity_date DESC",
};

/// Provides CRUD operations for activity log entries.
pub struct ActivityLogRepo;

impl ActivityLogRepo {
    /// Insert a new activity entry, returning the created row. The
    /// activity date is assigned by the database.
    pub async fn create(pool: &PgPool, input: &CreateActivityLog) -> Result<ActivityLog, DbError> {
        let query = format!(
            "INSERT INTO activity_logs (person_id, description, score)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        let entry = sqlx::query_as::<_, ActivityLog>(&query)
            .bind(input.person_id)
            .bind(&input.description)
            .bind(input.score)
            .fetch_one(pool)
            .await?;
        Ok(entry)
    }

    /// Find an activity entry by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<ActivityLog>, DbError> {
        let query = format!("SELECT {COLUMNS} FROM activity_logs WHERE id = $1");
        let entry = sqlx::query_as::<_, ActivityLog>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(entry)
    }

    /// List activity entries, optionally filtered by person.
    pub async fn list(
        pool: &PgPool,
        person_id: Option<DbId>,
        order: Option<&str>,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<ActivityLog>, DbError> {
        let order = LIST_CONFIG.resolve_order(order)?;
        let query = format!(
            "SELECT {COLUMNS} FROM activity_logs
             WHERE ($1::bigint IS NULL OR person_id = $1)
             ORDER BY {order}
             LIMIT $2 OFFSET $3"
        );
        let entries = sqlx::query_as::<_, ActivityLog>(&query)
            .bind(person_id)
            .bind(clamp_limit(limit))
            .bind(clamp_offset(offset))
            .fetch_all(pool)
            .await?;
        Ok(entries)
    }

    /// A person's accumulated score across all activities.
    pub async fn total_score(pool: &PgPool, person_id: DbId) -> Result<i64, DbError> {
        let total = sqlx::query_scalar::<_, i64>(
            "SELECT COALESCE(SUM(score), 0) FROM activity_logs WHERE person_id = $1",
        )
        .bind(person_id)
        .fetch_one(pool)
        .await?;
        Ok(total)
    }

    /// Update an activity entry. Only non-`None` fields are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateActivityLog,
    ) -> Result<Option<ActivityLog>, DbError> {
        let query = format!(
            "UPDATE activity_logs SET
                description = COALESCE($2, description),
                score = COALESCE($3, score)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let entry = sqlx::query_as::<_, ActivityLog>(&query)
            .bind(id)
            .bind(&input.description)
            .bind(input.score)
            .fetch_optional(pool)
            .await?;
        Ok(entry)
    }

    /// Delete an activity entry by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, DbError> {
        let result = sqlx::query("DELETE FROM activity_logs WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
