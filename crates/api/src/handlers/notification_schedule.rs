//! Handlers for the `/notification-schedules` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use solea_core::error::CoreError;
use solea_core::types::DbId;
use solea_db::models::notification_schedule::{
    CreateNotificationSchedule, NotificationSchedule, UpdateNotificationSchedule,
};
use solea_db::repositories::NotificationScheduleRepo;

use crate::error::{AppError, AppResult};
use crate::query::PersonScopedParams;
use crate::state::AppState;

/// POST /api/v1/notification-schedules
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateNotificationSchedule>,
) -> AppResult<(StatusCode, Json<NotificationSchedule>)> {
    let schedule = NotificationScheduleRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(schedule)))
}

/// GET /api/v1/notification-schedules
///
/// Supports `?person_id=` filtering.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PersonScopedParams>,
) -> AppResult<Json<Vec<NotificationSchedule>>> {
    let schedules = NotificationScheduleRepo::list(
        &state.pool,
        params.person_id,
        params.order.as_deref(),
        params.limit,
        params.offset,
    )
    .await?;
    Ok(Json(schedules))
}

/// GET /api/v1/notification-schedules/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<NotificationSchedule>> {
    let schedule = NotificationScheduleRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "NotificationSchedule",
            id,
        }))?;
    Ok(Json(schedule))
}

/// PUT /api/v1/notification-schedules/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateNotificationSchedule>,
) -> AppResult<Json<NotificationSchedule>> {
    let schedule = NotificationScheduleRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "NotificationSchedule",
            id,
        }))?;
    Ok(Json(schedule))
}

/// DELETE /api/v1/notification-schedules/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = NotificationScheduleRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "NotificationSchedule",
            id,
        }))
    }
}
