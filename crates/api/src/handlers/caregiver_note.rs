//! Handlers for the `/caregiver-notes` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use solea_core::error::CoreError;
use solea_core::types::DbId;
use solea_db::models::caregiver_note::{CaregiverNote, CreateCaregiverNote, UpdateCaregiverNote};
use solea_db::repositories::CaregiverNoteRepo;

use crate::error::{AppError, AppResult};
use crate::query::PersonScopedParams;
use crate::state::AppState;

/// POST /api/v1/caregiver-notes
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateCaregiverNote>,
) -> AppResult<(StatusCode, Json<CaregiverNote>)> {
    let note = CaregiverNoteRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(note)))
}

/// GET /api/v1/caregiver-notes
///
/// Supports `?person_id=` filtering.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PersonScopedParams>,
) -> AppResult<Json<Vec<CaregiverNote>>> {
    let notes = CaregiverNoteRepo::list(
        &state.pool,
        params.person_id,
        params.order.as_deref(),
        params.limit,
        params.offset,
    )
    .await?;
    Ok(Json(notes))
}

/// GET /api/v1/caregiver-notes/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<CaregiverNote>> {
    let note = CaregiverNoteRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "CaregiverNote",
            id,
        }))?;
    Ok(Json(note))
}

/// PUT /api/v1/caregiver-notes/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCaregiverNote>,
) -> AppResult<Json<CaregiverNote>> {
    let note = CaregiverNoteRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "CaregiverNote",
            id,
        }))?;
    Ok(Json(note))
}

/// DELETE /api/v1/caregiver-notes/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = CaregiverNoteRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "CaregiverNote",
            id,
        }))
    }
}
