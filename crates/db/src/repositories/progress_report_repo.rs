//! Repository for the `progress_reports` table.

use solea_core::listing::{clamp_limit, clamp_offset, ListConfig};
use solea_core::types::DbId;
use sqlx::PgPool;

use crate::error::DbError;
use crate::models::progress_report::{CreateProgressReport, ProgressReport, UpdateProgressReport};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, person_id, report_date, progress, recommendations, created_at, updated_at";

/// Order keys accepted by the list endpoint.
const LIST_CONFIG: ListConfig = ListConfig {
    orderable: &[("date", "report_date DESC"), ("progress", "progress DESC")],
    default_order: "report_date DESC",
};

/// Provides CRUD operations for progress reports.
pub struct ProgressReportRepo;

impl ProgressReportRepo {
    /// Insert a new progress report, returning the created row. The
    /// report date is assigned by the database.
    pub async fn create(
        pool: &PgPool,
        input: &CreateProgressReport,
    ) -> Result<ProgressReport, DbError> {
        let query = format!(
            "INSERT INTO progress_reports (person_id, progress, recommendations)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        let report = sqlx::query_as::<_, ProgressReport>(&query)
            .bind(input.person_id)
            .bind(input.progress)
            .bind(&input.recommendations)
            .fetch_one(pool)
            .await?;
        Ok(report)
    }

    /// Find a progress report by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<ProgressReport>, DbError> {
        let query = format!("SELECT {COLUMNS} FROM progress_reports WHERE id = $1");
        let report = sqlx::query_as::<_, ProgressReport>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(report)
    }

    /// List progress reports, optionally filtered by person.
    pub async fn list(
        pool: &PgPool,
        person_id: Option<DbId>,
        order: Option<&str>,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<ProgressReport>, DbError> {
        let order = LIST_CONFIG.resolve_order(order)?;
        let query = format!(
            "SELECT {COLUMNS} FROM progress_reports
             WHERE ($1::bigint IS NULL OR person_id = $1)
             ORDER BY {order}
             LIMIT $2 OFFSET $3"
        );
        let reports = sqlx::query_as::<_, ProgressReport>(&query)
            .bind(person_id)
            .bind(clamp_limit(limit))
            .bind(clamp_offset(offset))
            .fetch_all(pool)
            .await?;
        Ok(reports)
    }

    /// Update a progress report. Only non-`None` fields are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProgressReport,
    ) -> Result<Option<ProgressReport>, DbError> {
        let query = format!(
            "UPDATE progress_reports SET
                progress = COALESCE($2, progress),
                recommendations = COALESCE($3, recommendations)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let report = sqlx::query_as::<_, ProgressReport>(&query)
            .bind(id)
            .bind(input.progress)
            .bind(&input.recommendations)
            .fetch_optional(pool)
            .await?;
        Ok(report)
    }

    /// Delete a progress report by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, DbError> {
        let result = sqlx::query("DELETE FROM progress_reports WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
