//! Handlers for the `/progress-reports` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use solea_core::error::CoreError;
use solea_core::types::DbId;
use solea_db::models::progress_report::{
    CreateProgressReport, ProgressReport, UpdateProgressReport,
};
use solea_db::repositories::ProgressReportRepo;

use crate::error::{AppError, AppResult};
use crate::query::PersonScopedParams;
use crate::state::AppState;

/// POST /api/v1/progress-reports
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateProgressReport>,
) -> AppResult<(StatusCode, Json<ProgressReport>)> {
    let report = ProgressReportRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(report)))
}

/// GET /api/v1/progress-reports
///
/// Supports `?person_id=` filtering.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PersonScopedParams>,
) -> AppResult<Json<Vec<ProgressReport>>> {
    let reports = ProgressReportRepo::list(
        &state.pool,
        params.person_id,
        params.order.as_deref(),
        params.limit,
        params.offset,
    )
    .await?;
    Ok(Json(reports))
}

/// GET /api/v1/progress-reports/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ProgressReport>> {
    let report = ProgressReportRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ProgressReport",
            id,
        }))?;
    Ok(Json(report))
}

/// PUT /api/v1/progress-reports/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProgressReport>,
) -> AppResult<Json<ProgressReport>> {
    let report = ProgressReportRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ProgressReport",
            id,
        }))?;
    Ok(Json(report))
}

/// DELETE /api/v1/progress-reports/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = ProgressReportRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "ProgressReport",
            id,
        }))
    }
}
