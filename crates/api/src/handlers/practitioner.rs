//! Handlers for the `/practitioners` resource.
//!
//! Listing defaults to approved practitioners only, since the approval
//! flag gates visibility to booking flows. Administrative views pass
//! `?include_unapproved=true`.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use solea_core::error::CoreError;
use solea_core::types::DbId;
use solea_db::models::availability::AvailabilitySlot;
use solea_db::models::practitioner::{
    CreatePractitioner, Practitioner, PractitionerDetail, UpdatePractitioner,
};
use solea_db::repositories::PractitionerRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Query parameters for the practitioner list endpoint.
#[derive(Debug, Deserialize)]
pub struct PractitionerListParams {
    pub q: Option<String>,
    #[serde(default)]
    pub include_unapproved: bool,
    pub order: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Request body for `PUT /practitioners/{id}/slots`.
#[derive(Debug, Deserialize)]
pub struct SetSlotsRequest {
    pub slot_ids: Vec<DbId>,
}

/// POST /api/v1/practitioners
///
/// New practitioners start unapproved.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreatePractitioner>,
) -> AppResult<(StatusCode, Json<Practitioner>)> {
    let practitioner = PractitionerRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(practitioner)))
}

/// GET /api/v1/practitioners
///
/// Supports `?q=` matching name, email, or specialization.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PractitionerListParams>,
) -> AppResult<Json<Vec<Practitioner>>> {
    let practitioners = PractitionerRepo::list(
        &state.pool,
        params.q.as_deref(),
        params.include_unapproved,
        params.order.as_deref(),
        params.limit,
        params.offset,
    )
    .await?;
    Ok(Json(practitioners))
}

/// GET /api/v1/practitioners/{id}
///
/// Embeds the practitioner's availability slots by full value.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<PractitionerDetail>> {
    let detail = PractitionerRepo::find_detail(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Practitioner",
            id,
        }))?;
    Ok(Json(detail))
}

/// PUT /api/v1/practitioners/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePractitioner>,
) -> AppResult<Json<Practitioner>> {
    let practitioner = PractitionerRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Practitioner",
            id,
        }))?;
    Ok(Json(practitioner))
}

/// PUT /api/v1/practitioners/{id}/slots
///
/// Replaces the practitioner's availability link set and returns it.
pub async fn set_slots(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<SetSlotsRequest>,
) -> AppResult<Json<Vec<AvailabilitySlot>>> {
    let slots = PractitionerRepo::set_slots(&state.pool, id, &input.slot_ids)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Practitioner",
            id,
        }))?;
    Ok(Json(slots))
}

/// DELETE /api/v1/practitioners/{id}
///
/// Cascades to the practitioner's appointments and their feedback.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = PractitionerRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Practitioner",
            id,
        }))
    }
}
