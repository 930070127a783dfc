//! Repository for the `people` table.

use solea_core::listing::{clamp_limit, clamp_offset, ListConfig};
use solea_core::people;
use solea_core::types::DbId;
use sqlx::PgPool;

use crate::error::DbError;
use crate::models::person::{CreatePerson, Person, UpdatePerson};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, name, email, birth_date, phone, national_id, photo_path, user_id, created_at, updated_at";

/// Order keys accepted by the list endpoint.
const LIST_CONFIG: ListConfig = ListConfig {
    orderable: &[
        ("name", "name ASC"),
        ("email", "email ASC"),
        ("created", "created_at DESC"),
    ],
    default_order: "name ASC",
};

/// Provides CRUD operations for clients.
pub struct PersonRepo;

impl PersonRepo {
    /// Insert a new person, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreatePerson) -> Result<Person, DbError> {
        people::validate_person(&input.name, &input.email)?;
        let query = format!(
            "INSERT INTO people (name, email, birth_date, phone, national_id, photo_path, user_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        let person = sqlx::query_as::<_, Person>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(input.birth_date)
            .bind(&input.phone)
            .bind(&input.national_id)
            .bind(&input.photo_path)
            .bind(input.user_id)
            .fetch_one(pool)
            .await?;
        Ok(person)
    }

    /// Find a person by their internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Person>, DbError> {
        let query = format!("SELECT {COLUMNS} FROM people WHERE id = $1");
        let person = sqlx::query_as::<_, Person>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(person)
    }

    /// Find the person linked to an authentication identity, if any.
    pub async fn find_by_user_id(pool: &PgPool, user_id: DbId) -> Result<Option<Person>, DbError> {
        let query = format!("SELECT {COLUMNS} FROM people WHERE user_id = $1");
        let person = sqlx::query_as::<_, Person>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await?;
        Ok(person)
    }

    /// List people, optionally filtered by a search term matching name,
    /// email, or national ID.
    pub async fn list(
        pool: &PgPool,
        q: Option<&str>,
        order: Option<&str>,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<Person>, DbError> {
        let order = LIST_CONFIG.resolve_order(order)?;
        let query = format!(
            "SELECT {COLUMNS} FROM people
             WHERE ($1::text IS NULL
                    OR name ILIKE '%' || $1 || '%'
                    OR email ILIKE '%' || $1 || '%'
                    OR national_id ILIKE '%' || $1 || '%')
             ORDER BY {order}
             LIMIT $2 OFFSET $3"
        );
        let people = sqlx::query_as::<_, Person>(&query)
            .bind(q)
            .bind(clamp_limit(limit))
            .bind(clamp_offset(offset))
            .fetch_all(pool)
            .await?;
        Ok(people)
    }

    /// Update a person. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePerson,
    ) -> Result<Option<Person>, DbError> {
        if let Some(name) = &input.name {
            people::validate_name(name)?;
        }
        if let Some(email) = &input.email {
            people::validate_email(email)?;
        }
        let query = format!(
            "UPDATE people SET
                name = COALESCE($2, name),
                email = COALESCE($3, email),
                birth_date = COALESCE($4, birth_date),
                phone = COALESCE($5, phone),
                national_id = COALESCE($6, national_id),
                photo_path = COALESCE($7, photo_path),
                user_id = COALESCE($8, user_id)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let person = sqlx::query_as::<_, Person>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.email)
            .bind(input.birth_date)
            .bind(&input.phone)
            .bind(&input.national_id)
            .bind(&input.photo_path)
            .bind(input.user_id)
            .fetch_optional(pool)
            .await?;
        Ok(person)
    }

    /// Delete a person by ID, cascading to their appointments, feedback,
    /// and engagement records. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, DbError> {
        let result = sqlx::query("DELETE FROM people WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
