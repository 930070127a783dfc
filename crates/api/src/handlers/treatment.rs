//! Handlers for the `/treatments` catalog resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use solea_core::error::CoreError;
use solea_core::types::DbId;
use solea_db::models::treatment::{CreateTreatment, Treatment, UpdateTreatment};
use solea_db::repositories::TreatmentRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Query parameters for the treatment list endpoint.
#[derive(Debug, Deserialize)]
pub struct TreatmentListParams {
    pub q: Option<String>,
    pub category: Option<String>,
    pub order: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// POST /api/v1/treatments
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateTreatment>,
) -> AppResult<(StatusCode, Json<Treatment>)> {
    let treatment = TreatmentRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(treatment)))
}

/// GET /api/v1/treatments
///
/// Supports `?q=` matching the name and `?category=` filtering.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<TreatmentListParams>,
) -> AppResult<Json<Vec<Treatment>>> {
    let treatments = TreatmentRepo::list(
        &state.pool,
        params.q.as_deref(),
        params.category.as_deref(),
        params.order.as_deref(),
        params.limit,
        params.offset,
    )
    .await?;
    Ok(Json(treatments))
}

/// GET /api/v1/treatments/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Treatment>> {
    let treatment = TreatmentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Treatment",
            id,
        }))?;
    Ok(Json(treatment))
}

/// PUT /api/v1/treatments/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTreatment>,
) -> AppResult<Json<Treatment>> {
    let treatment = TreatmentRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Treatment",
            id,
        }))?;
    Ok(Json(treatment))
}

/// DELETE /api/v1/treatments/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = TreatmentRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Treatment",
            id,
        }))
    }
}
