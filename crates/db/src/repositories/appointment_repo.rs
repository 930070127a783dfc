//! Repository for the `appointments` table, its treatment links, and the
//! status state machine.

use solea_core::error::CoreError;
use solea_core::listing::{clamp_limit, clamp_offset, ListConfig};
use solea_core::scheduling::state_machine;
use solea_core::types::DbId;
use sqlx::PgPool;

use crate::error::DbError;
use crate::models::appointment::{
    Appointment, AppointmentDetail, CreateAppointment, UpdateAppointment,
};
use crate::models::person::Person;
use crate::models::status::{AppointmentStatus, StatusId};
use crate::models::treatment::Treatment;
use crate::repositories::practitioner_repo::PractitionerRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, person_id, practitioner_id, appointment_date, status_id, created_at, updated_at";

/// Order keys accepted by the list endpoint.
const LIST_CONFIG: ListConfig = ListConfig {
    orderable: &[
        ("date", "appointment_date ASC"),
        ("created", "created_at DESC"),
    ],
    default_order: "appointment_date ASC",
};

/// Treatment columns qualified for the junction join.
const TREATMENT_COLUMNS: &str =
    "t.id, t.name, t.description, t.duration_mins, t.price, t.category, t.created_at, t.updated_at";

/// Provides CRUD and status-transition operations for appointments.
pub struct AppointmentRepo;

impl AppointmentRepo {
    /// Insert a new appointment in `pending` status together with its
    /// treatment links, in one transaction.
    ///
    /// The date defaults to today when omitted. An empty treatment set is
    /// permitted. Unknown person, practitioner, or treatment ids surface
    /// as foreign-key violations.
    pub async fn create(pool: &PgPool, input: &CreateAppointment) -> Result<Appointment, DbError> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO appointments (person_id, practitioner_id, appointment_date)
             VALUES ($1, $2, COALESCE($3, CURRENT_DATE))
             RETURNING {COLUMNS}"
        );
        let appointment = sqlx::query_as::<_, Appointment>(&query)
            .bind(input.person_id)
            .bind(input.practitioner_id)
            .bind(input.appointment_date)
            .fetch_one(&mut *tx)
            .await?;

        for treatment_id in &input.treatment_ids {
            sqlx::query(
                "INSERT INTO appointment_treatments (appointment_id, treatment_id)
                 VALUES ($1, $2)",
            )
            .bind(appointment.id)
            .bind(treatment_id)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(appointment)
    }

    /// Find an appointment by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Appointment>, DbError> {
        let query = format!("SELECT {COLUMNS} FROM appointments WHERE id = $1");
        let appointment = sqlx::query_as::<_, Appointment>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(appointment)
    }

    /// List the treatments booked on an appointment, ordered by name.
    pub async fn treatments_for(pool: &PgPool, id: DbId) -> Result<Vec<Treatment>, DbError> {
        let query = format!(
            "SELECT {TREATMENT_COLUMNS} FROM treatments t
             JOIN appointment_treatments at ON at.treatment_id = t.id
             WHERE at.appointment_id = $1
             ORDER BY t.name ASC"
        );
        let treatments = sqlx::query_as::<_, Treatment>(&query)
            .bind(id)
            .fetch_all(pool)
            .await?;
        Ok(treatments)
    }

    /// Find an appointment with its client, practitioner (including
    /// availability), and treatments embedded by full value.
    pub async fn find_detail(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<AppointmentDetail>, DbError> {
        let Some(appointment) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };

        // Related rows are guaranteed by foreign keys.
        let client = sqlx::query_as::<_, Person>(
            "SELECT id, name, email, birth_date, phone, national_id, photo_path, user_id, \
             created_at, updated_at FROM people WHERE id = $1",
        )
        .bind(appointment.person_id)
        .fetch_one(pool)
        .await?;

        let practitioner = PractitionerRepo::find_detail(pool, appointment.practitioner_id)
            .await?
            .ok_or(CoreError::Internal(
                "Appointment references a missing practitioner".into(),
            ))?;

        let treatments = Self::treatments_for(pool, id).await?;

        Ok(Some(AppointmentDetail::assemble(
            appointment,
            client.into(),
            practitioner,
            treatments,
        )))
    }

    /// List appointments, optionally filtered by status, client, and/or
    /// practitioner.
    pub async fn list(
        pool: &PgPool,
        status_id: Option<StatusId>,
        person_id: Option<DbId>,
        practitioner_id: Option<DbId>,
        order: Option<&str>,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<Appointment>, DbError> {
        let order = LIST_CONFIG.resolve_order(order)?;
        let query = format!(
            "SELECT {COLUMNS} FROM appointments
             WHERE ($1::smallint IS NULL OR status_id = $1)
               AND ($2::bigint IS NULL OR person_id = $2)
               AND ($3::bigint IS NULL OR practitioner_id = $3)
             ORDER BY {order}
             LIMIT $4 OFFSET $5"
        );
        let appointments = sqlx::query_as::<_, Appointment>(&query)
            .bind(status_id)
            .bind(person_id)
            .bind(practitioner_id)
            .bind(clamp_limit(limit))
            .bind(clamp_offset(offset))
            .fetch_all(pool)
            .await?;
        Ok(appointments)
    }

    /// Update an appointment's date and/or replace its treatment set.
    ///
    /// Status never changes through updates; use the transition
    /// operations. Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateAppointment,
    ) -> Result<Option<Appointment>, DbError> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE appointments SET
                appointment_date = COALESCE($2, appointment_date)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let Some(appointment) = sqlx::query_as::<_, Appointment>(&query)
            .bind(id)
            .bind(input.appointment_date)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };

        if let Some(treatment_ids) = &input.treatment_ids {
            sqlx::query("DELETE FROM appointment_treatments WHERE appointment_id = $1")
                .bind(id)
                .execute(&mut *tx)
                .await?;
            for treatment_id in treatment_ids {
                sqlx::query(
                    "INSERT INTO appointment_treatments (appointment_id, treatment_id)
                     VALUES ($1, $2)",
                )
                .bind(id)
                .bind(treatment_id)
                .execute(&mut *tx)
                .await?;
            }
        }

        tx.commit().await?;
        Ok(Some(appointment))
    }

    /// Mark an appointment confirmed.
    pub async fn confirm(pool: &PgPool, id: DbId) -> Result<Option<Appointment>, DbError> {
        Self::transition(pool, id, AppointmentStatus::Confirmed).await
    }

    /// Mark an appointment completed.
    pub async fn complete(pool: &PgPool, id: DbId) -> Result<Option<Appointment>, DbError> {
        Self::transition(pool, id, AppointmentStatus::Completed).await
    }

    /// Cancel an appointment.
    pub async fn cancel(pool: &PgPool, id: DbId) -> Result<Option<Appointment>, DbError> {
        Self::transition(pool, id, AppointmentStatus::Cancelled).await
    }

    /// Apply a status transition with the row locked so the check and the
    /// write commit atomically.
    ///
    /// Transitions out of terminal states fail with a conflict; returns
    /// `None` if no row with the given `id` exists.
    async fn transition(
        pool: &PgPool,
        id: DbId,
        target: AppointmentStatus,
    ) -> Result<Option<Appointment>, DbError> {
        let mut tx = pool.begin().await?;

        let Some(current) = sqlx::query_scalar::<_, StatusId>(
            "SELECT status_id FROM appointments WHERE id = $1 FOR UPDATE",
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        else {
            return Ok(None);
        };

        state_machine::validate_transition(current, target.id())
            .map_err(CoreError::Conflict)?;

        let query = format!(
            "UPDATE appointments SET status_id = $2 WHERE id = $1 RETURNING {COLUMNS}"
        );
        let appointment = sqlx::query_as::<_, Appointment>(&query)
            .bind(id)
            .bind(target.id())
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(appointment))
    }

    /// Delete an appointment by ID, cascading to its feedback and
    /// treatment links. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, DbError> {
        let result = sqlx::query("DELETE FROM appointments WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
