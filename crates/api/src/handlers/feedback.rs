//! Handlers for the `/feedback` resource.
//!
//! Feedback is create/read/delete only: a row can exist once per
//! completed appointment and is immutable afterwards.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use solea_core::error::CoreError;
use solea_core::types::DbId;
use solea_db::models::feedback::{CreateFeedback, Feedback, FeedbackDetail};
use solea_db::repositories::FeedbackRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Query parameters for the feedback list endpoint.
#[derive(Debug, Deserialize)]
pub struct FeedbackListParams {
    pub person_id: Option<DbId>,
    pub score: Option<i16>,
    pub order: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// POST /api/v1/feedback
///
/// Rejected with 400 unless the appointment is completed, and with 409
/// when feedback already exists for it.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateFeedback>,
) -> AppResult<(StatusCode, Json<Feedback>)> {
    let feedback = FeedbackRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(feedback)))
}

/// GET /api/v1/feedback
///
/// Supports `?person_id=` and `?score=` filters.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<FeedbackListParams>,
) -> AppResult<Json<Vec<Feedback>>> {
    let feedback = FeedbackRepo::list(
        &state.pool,
        params.person_id,
        params.score,
        params.order.as_deref(),
        params.limit,
        params.offset,
    )
    .await?;
    Ok(Json(feedback))
}

/// GET /api/v1/feedback/{id}
///
/// Embeds the client and the full appointment by value.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<FeedbackDetail>> {
    let detail = FeedbackRepo::find_detail(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Feedback",
            id,
        }))?;
    Ok(Json(detail))
}

/// DELETE /api/v1/feedback/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = FeedbackRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Feedback",
            id,
        }))
    }
}
