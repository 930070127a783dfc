//! Repository for the `practitioners` table and its availability links.

use solea_core::listing::{clamp_limit, clamp_offset, ListConfig};
use solea_core::people;
use solea_core::types::DbId;
use sqlx::PgPool;

use crate::error::DbError;
use crate::models::availability::AvailabilitySlot;
use crate::models::practitioner::{
    CreatePractitioner, Practitioner, PractitionerDetail, UpdatePractitioner,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, specialization, email, phone_whatsapp, social_url, photo_path, \
     address, district, specialty_bio, approved, user_id, created_at, updated_at";

/// Order keys accepted by the list endpoint.
const LIST_CONFIG: ListConfig = ListConfig {
    orderable: &[
        ("name", "name ASC"),
        ("email", "email ASC"),
        ("created", "created_at DESC"),
    ],
    default_order: "name ASC",
};

/// Slot columns qualified for the junction join.
const SLOT_COLUMNS: &str =
    "s.id, s.weekday, s.start_time, s.end_time, s.created_at, s.updated_at";

/// Provides CRUD and availability-link operations for practitioners.
pub struct PractitionerRepo;

impl PractitionerRepo {
    /// Insert a new practitioner, returning the created row.
    ///
    /// New practitioners start unapproved and are hidden from booking
    /// flows until the flag is set through an update.
    pub async fn create(
        pool: &PgPool,
        input: &CreatePractitioner,
    ) -> Result<Practitioner, DbError> {
        people::validate_person(&input.name, &input.email)?;
        let query = format!(
            "INSERT INTO practitioners
                (name, specialization, email, phone_whatsapp, social_url, photo_path,
                 address, district, specialty_bio, user_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING {COLUMNS}"
        );
        let practitioner = sqlx::query_as::<_, Practitioner>(&query)
            .bind(&input.name)
            .bind(&input.specialization)
            .bind(&input.email)
            .bind(&input.phone_whatsapp)
            .bind(&input.social_url)
            .bind(&input.photo_path)
            .bind(&input.address)
            .bind(&input.district)
            .bind(&input.specialty_bio)
            .bind(input.user_id)
            .fetch_one(pool)
            .await?;
        Ok(practitioner)
    }

    /// Find a practitioner by their internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Practitioner>, DbError> {
        let query = format!("SELECT {COLUMNS} FROM practitioners WHERE id = $1");
        let practitioner = sqlx::query_as::<_, Practitioner>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(practitioner)
    }

    /// Find a practitioner with their availability slots embedded.
    pub async fn find_detail(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<PractitionerDetail>, DbError> {
        let Some(practitioner) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };
        let availability = Self::slots_for(pool, id).await?;
        Ok(Some(PractitionerDetail {
            practitioner,
            availability,
        }))
    }

    /// List the availability slots linked to a practitioner, ordered by
    /// weekday and start time.
    pub async fn slots_for(pool: &PgPool, id: DbId) -> Result<Vec<AvailabilitySlot>, DbError> {
        let query = format!(
            "SELECT {SLOT_COLUMNS} FROM availability_slots s
             JOIN practitioner_slots ps ON ps.slot_id = s.id
             WHERE ps.practitioner_id = $1
             ORDER BY s.weekday ASC, s.start_time ASC"
        );
        let slots = sqlx::query_as::<_, AvailabilitySlot>(&query)
            .bind(id)
            .fetch_all(pool)
            .await?;
        Ok(slots)
    }

    /// List practitioners, optionally filtered by a search term matching
    /// name, email, or specialization.
    ///
    /// Booking flows list only approved practitioners; pass
    /// `include_unapproved` for administrative views.
    pub async fn list(
        pool: &PgPool,
        q: Option<&str>,
        include_unapproved: bool,
        order: Option<&str>,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<Practitioner>, DbError> {
        let order = LIST_CONFIG.resolve_order(order)?;
        let query = format!(
            "SELECT {COLUMNS} FROM practitioners
             WHERE ($1::text IS NULL
                    OR name ILIKE '%' || $1 || '%'
                    OR email ILIKE '%' || $1 || '%'
                    OR specialization ILIKE '%' || $1 || '%')
               AND ($2 OR approved)
             ORDER BY {order}
             LIMIT $3 OFFSET $4"
        );
        let practitioners = sqlx::query_as::<_, Practitioner>(&query)
            .bind(q)
            .bind(include_unapproved)
            .bind(clamp_limit(limit))
            .bind(clamp_offset(offset))
            .fetch_all(pool)
            .await?;
        Ok(practitioners)
    }

    /// Update a practitioner. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePractitioner,
    ) -> Result<Option<Practitioner>, DbError> {
        if let Some(name) = &input.name {
            people::validate_name(name)?;
        }
        if let Some(email) = &input.email {
            people::validate_email(email)?;
        }
        let query = format!(
            "UPDATE practitioners SET
                name = COALESCE($2, name),
                specialization = COALESCE($3, specialization),
                email = COALESCE($4, email),
                phone_whatsapp = COALESCE($5, phone_whatsapp),
                social_url = COALESCE($6, social_url),
                photo_path = COALESCE($7, photo_path),
                address = COALESCE($8, address),
                district = COALESCE($9, district),
                specialty_bio = COALESCE($10, specialty_bio),
                approved = COALESCE($11, approved),
                user_id = COALESCE($12, user_id)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let practitioner = sqlx::query_as::<_, Practitioner>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.specialization)
            .bind(&input.email)
            .bind(&input.phone_whatsapp)
            .bind(&input.social_url)
            .bind(&input.photo_path)
            .bind(&input.address)
            .bind(&input.district)
            .bind(&input.specialty_bio)
            .bind(input.approved)
            .bind(input.user_id)
            .fetch_optional(pool)
            .await?;
        Ok(practitioner)
    }

    /// Replace the practitioner's availability link set in one transaction.
    ///
    /// Returns `None` if no practitioner with the given `id` exists.
    /// Unknown slot ids surface as foreign-key violations.
    pub async fn set_slots(
        pool: &PgPool,
        id: DbId,
        slot_ids: &[DbId],
    ) -> Result<Option<Vec<AvailabilitySlot>>, DbError> {
        let mut tx = pool.begin().await?;

        let exists = sqlx::query_scalar::<_, DbId>(
            "SELECT id FROM practitioners WHERE id = $1 FOR UPDATE",
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;
        if exists.is_none() {
            return Ok(None);
        }

        sqlx::query("DELETE FROM practitioner_slots WHERE practitioner_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        for slot_id in slot_ids {
            sqlx::query(
                "INSERT INTO practitioner_slots (practitioner_id, slot_id) VALUES ($1, $2)",
            )
            .bind(id)
            .bind(slot_id)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        let slots = Self::slots_for(pool, id).await?;
        Ok(Some(slots))
    }

    /// Delete a practitioner by ID, cascading to their appointments and
    /// those appointments' feedback. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, DbError> {
        let result = sqlx::query("DELETE FROM practitioners WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
