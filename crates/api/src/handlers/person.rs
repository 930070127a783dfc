//! Handlers for the `/people` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use solea_core::error::CoreError;
use solea_core::types::DbId;
use solea_db::models::person::{CreatePerson, PersonResponse, UpdatePerson};
use solea_db::repositories::PersonRepo;

use crate::error::{AppError, AppResult};
use crate::query::ListParams;
use crate::state::AppState;

/// POST /api/v1/people
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreatePerson>,
) -> AppResult<(StatusCode, Json<PersonResponse>)> {
    let person = PersonRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(person.into())))
}

/// GET /api/v1/people
///
/// Supports `?q=` matching name, email, or national ID.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<Vec<PersonResponse>>> {
    let people = PersonRepo::list(
        &state.pool,
        params.q.as_deref(),
        params.order.as_deref(),
        params.limit,
        params.offset,
    )
    .await?;
    Ok(Json(people.into_iter().map(Into::into).collect()))
}

/// GET /api/v1/people/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<PersonResponse>> {
    let person = PersonRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Person",
            id,
        }))?;
    Ok(Json(person.into()))
}

/// PUT /api/v1/people/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePerson>,
) -> AppResult<Json<PersonResponse>> {
    let person = PersonRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Person",
            id,
        }))?;
    Ok(Json(person.into()))
}

/// DELETE /api/v1/people/{id}
///
/// Cascades to the person's appointments, feedback, and engagement records.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = PersonRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Person",
            id,
        }))
    }
}
