//! Handlers for the `/availability-slots` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use solea_core::error::CoreError;
use solea_core::types::DbId;
use solea_db::models::availability::{AvailabilitySlot, CreateSlot, UpdateSlot};
use solea_db::repositories::AvailabilityRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Query parameters for the slot list endpoint.
#[derive(Debug, Deserialize)]
pub struct SlotListParams {
    pub weekday: Option<String>,
    pub order: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// POST /api/v1/availability-slots
///
/// Rejects ranges where the start time is not strictly before the end time.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateSlot>,
) -> AppResult<(StatusCode, Json<AvailabilitySlot>)> {
    let slot = AvailabilityRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(slot)))
}

/// GET /api/v1/availability-slots
///
/// Supports `?weekday=` filtering.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<SlotListParams>,
) -> AppResult<Json<Vec<AvailabilitySlot>>> {
    let slots = AvailabilityRepo::list(
        &state.pool,
        params.weekday.as_deref(),
        params.order.as_deref(),
        params.limit,
        params.offset,
    )
    .await?;
    Ok(Json(slots))
}

/// GET /api/v1/availability-slots/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<AvailabilitySlot>> {
    let slot = AvailabilityRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "AvailabilitySlot",
            id,
        }))?;
    Ok(Json(slot))
}

/// PUT /api/v1/availability-slots/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateSlot>,
) -> AppResult<Json<AvailabilitySlot>> {
    let slot = AvailabilityRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "AvailabilitySlot",
            id,
        }))?;
    Ok(Json(slot))
}

/// DELETE /api/v1/availability-slots/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = AvailabilityRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "AvailabilitySlot",
            id,
        }))
    }
}
