//! Route definitions for the engagement resources: progress reports,
//! activity logs, caregiver notes, and notification schedules.
//!
//! Each follows the same CRUD shape and filters by `?person_id=`.

use axum::routing::get;
use axum::Router;

use crate::handlers::{activity_log, caregiver_note, notification_schedule, progress_report};
use crate::state::AppState;

/// Routes mounted at `/progress-reports`.
pub fn progress_reports_router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(progress_report::list).post(progress_report::create),
        )
        .route(
            "/{id}",
            get(progress_report::get_by_id)
                .put(progress_report::update)
                .delete(progress_report::delete),
        )
}

/// Routes mounted at `/activity-logs`.
pub fn activity_logs_router() -> Router<AppState> {
    Router::new()
        .route("/", get(activity_log::list).post(activity_log::create))
        .route(
            "/{id}",
            get(activity_log::get_by_id)
                .put(activity_log::update)
                .delete(activity_log::delete),
        )
}

/// Routes mounted at `/caregiver-notes`.
pub fn caregiver_notes_router() -> Router<AppState> {
    Router::new()
        .route("/", get(caregiver_note::list).post(caregiver_note::create))
        .route(
            "/{id}",
            get(caregiver_note::get_by_id)
                .put(caregiver_note::update)
                .delete(caregiver_note::delete),
        )
}

/// Routes mounted at `/notification-schedules`.
pub fn notification_schedules_router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(notification_schedule::list).post(notification_schedule::create),
        )
        .route(
            "/{id}",
            get(notification_schedule::get_by_id)
                .put(notification_schedule::update)
                .delete(notification_schedule::delete),
        )
}
