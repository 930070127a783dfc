//! Repository for the `treatments` catalog table.

use solea_core::catalog::{self, TreatmentCategory};
use solea_core::listing::{clamp_limit, clamp_offset, ListConfig};
use solea_core::types::DbId;
use sqlx::PgPool;

use crate::error::DbError;
use crate::models::treatment::{CreateTreatment, Treatment, UpdateTreatment};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, name, description, duration_mins, price, category, created_at, updated_at";

/// Order keys accepted by the list endpoint.
const LIST_CONFIG: ListConfig = ListConfig {
    orderable: &[
        ("name", "name ASC"),
        ("price", "price ASC"),
        ("duration", "duration_mins ASC"),
    ],
    default_order: "name ASC",
};

/// Provides CRUD operations for treatment offerings.
pub struct TreatmentRepo;

impl TreatmentRepo {
    /// Insert a new treatment offering, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateTreatment) -> Result<Treatment, DbError> {
        catalog::validate_treatment(input.duration_mins, input.price, &input.category)?;
        let query = format!(
            "INSERT INTO treatments (name, description, duration_mins, price, category)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        let treatment = sqlx::query_as::<_, Treatment>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.duration_mins)
            .bind(input.price)
            .bind(&input.category)
            .fetch_one(pool)
            .await?;
        Ok(treatment)
    }

    /// Find a treatment by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Treatment>, DbError> {
        let query = format!("SELECT {COLUMNS} FROM treatments WHERE id = $1");
        let treatment = sqlx::query_as::<_, Treatment>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(treatment)
    }

    /// List treatments, optionally filtered by a name search term and/or
    /// category.
    pub async fn list(
        pool: &PgPool,
        q: Option<&str>,
        category: Option<&str>,
        order: Option<&str>,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<Treatment>, DbError> {
        if let Some(cat) = category {
            TreatmentCategory::parse(cat)?;
        }
        let order = LIST_CONFIG.resolve_order(order)?;
        let query = format!(
            "SELECT {COLUMNS} FROM treatments
             WHERE ($1::text IS NULL OR name ILIKE '%' || $1 || '%')
               AND ($2::text IS NULL OR category = $2)
             ORDER BY {order}
             LIMIT $3 OFFSET $4"
        );
        let treatments = sqlx::query_as::<_, Treatment>(&query)
            .bind(q)
            .bind(category)
            .bind(clamp_limit(limit))
            .bind(clamp_offset(offset))
            .fetch_all(pool)
            .await?;
        Ok(treatments)
    }

    /// Update a treatment. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTreatment,
    ) -> Result<Option<Treatment>, DbError> {
        if let Some(duration) = input.duration_mins {
            catalog::validate_duration(duration)?;
        }
        if let Some(price) = input.price {
            catalog::validate_price(price)?;
        }
        if let Some(category) = &input.category {
            TreatmentCategory::parse(category)?;
        }
        let query = format!(
            "UPDATE treatments SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                duration_mins = COALESCE($4, duration_mins),
                price = COALESCE($5, price),
                category = COALESCE($6, category)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let treatment = sqlx::query_as::<_, Treatment>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.duration_mins)
            .bind(input.price)
            .bind(&input.category)
            .fetch_optional(pool)
            .await?;
        Ok(treatment)
    }

    /// Delete a treatment by ID, removing its appointment links.
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, DbError> {
        let result = sqlx::query("DELETE FROM treatments WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
