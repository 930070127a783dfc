//! Handlers for the `/appointments` resource.
//!
//! Besides CRUD, three transition endpoints move an appointment through
//! its lifecycle: confirm, complete, cancel. Transitions out of terminal
//! states are rejected with 409.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use solea_core::error::CoreError;
use solea_core::types::DbId;
use solea_db::models::appointment::{
    Appointment, AppointmentDetail, CreateAppointment, UpdateAppointment,
};
use solea_db::models::status::StatusId;
use solea_db::repositories::AppointmentRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Query parameters for the appointment list endpoint.
#[derive(Debug, Deserialize)]
pub struct AppointmentListParams {
    pub status_id: Option<StatusId>,
    pub person_id: Option<DbId>,
    pub practitioner_id: Option<DbId>,
    pub order: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// POST /api/v1/appointments
///
/// Creates the appointment in `pending` status with its treatment links.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateAppointment>,
) -> AppResult<(StatusCode, Json<Appointment>)> {
    let appointment = AppointmentRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(appointment)))
}

/// GET /api/v1/appointments
///
/// Supports `?status_id=`, `?person_id=`, and `?practitioner_id=` filters.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<AppointmentListParams>,
) -> AppResult<Json<Vec<Appointment>>> {
    let appointments = AppointmentRepo::list(
        &state.pool,
        params.status_id,
        params.person_id,
        params.practitioner_id,
        params.order.as_deref(),
        params.limit,
        params.offset,
    )
    .await?;
    Ok(Json(appointments))
}

/// GET /api/v1/appointments/{id}
///
/// Embeds the client, the practitioner (with availability), and the
/// booked treatments by full value.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<AppointmentDetail>> {
    let detail = AppointmentRepo::find_detail(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Appointment",
            id,
        }))?;
    Ok(Json(detail))
}

/// PUT /api/v1/appointments/{id}
///
/// Updates the date and/or replaces the treatment set. Status never
/// changes here; use the transition endpoints.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateAppointment>,
) -> AppResult<Json<Appointment>> {
    let appointment = AppointmentRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Appointment",
            id,
        }))?;
    Ok(Json(appointment))
}

/// POST /api/v1/appointments/{id}/confirm
pub async fn confirm(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Appointment>> {
    let appointment = AppointmentRepo::confirm(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Appointment",
            id,
        }))?;
    Ok(Json(appointment))
}

/// POST /api/v1/appointments/{id}/complete
pub async fn complete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Appointment>> {
    let appointment = AppointmentRepo::complete(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Appointment",
            id,
        }))?;
    Ok(Json(appointment))
}

/// POST /api/v1/appointments/{id}/cancel
pub async fn cancel(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Appointment>> {
    let appointment = AppointmentRepo::cancel(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Appointment",
            id,
        }))?;
    Ok(Json(appointment))
}

/// DELETE /api/v1/appointments/{id}
///
/// Cascades to the appointment's feedback and treatment links.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = AppointmentRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Appointment",
            id,
        }))
    }
}
