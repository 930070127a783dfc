//! Handlers for the `/activity-logs` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use solea_core::error::CoreError;
use solea_core::types::DbId;
use solea_db::models::activity_log::{ActivityLog, CreateActivityLog, UpdateActivityLog};
use solea_db::repositories::ActivityLogRepo;

use crate::error::{AppError, AppResult};
use crate::query::PersonScopedParams;
use crate::state::AppState;

/// Response body for the accumulated-score endpoint.
#[derive(Debug, Serialize)]
pub struct TotalScoreResponse {
    pub person_id: DbId,
    pub total_score: i64,
}

/// POST /api/v1/activity-logs
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateActivityLog>,
) -> AppResult<(StatusCode, Json<ActivityLog>)> {
    let entry = ActivityLogRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(entry)))
}

/// GET /api/v1/activity-logs
///
/// Supports `?person_id=` filtering.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PersonScopedParams>,
) -> AppResult<Json<Vec<ActivityLog>>> {
    let entries = ActivityLogRepo::list(
        &state.pool,
        params.person_id,
        params.order.as_deref(),
        params.limit,
        params.offset,
    )
    .await?;
    Ok(Json(entries))
}

/// GET /api/v1/activity-logs/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ActivityLog>> {
    let entry = ActivityLogRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ActivityLog",
            id,
        }))?;
    Ok(Json(entry))
}

/// GET /api/v1/people/{id}/activity-score
///
/// A person's accumulated score across all logged activities.
pub async fn total_score(
    State(state): State<AppState>,
    Path(person_id): Path<DbId>,
) -> AppResult<Json<TotalScoreResponse>> {
    let total = ActivityLogRepo::total_score(&state.pool, person_id).await?;
    Ok(Json(TotalScoreResponse {
        person_id,
        total_score: total,
    }))
}

/// PUT /api/v1/activity-logs/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateActivityLog>,
) -> AppResult<Json<ActivityLog>> {
    let entry = ActivityLogRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ActivityLog",
            id,
        }))?;
    Ok(Json(entry))
}

/// DELETE /api/v1/activity-logs/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = ActivityLogRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "ActivityLog",
            id,
        }))
    }
}
