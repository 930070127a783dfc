pub mod auth;
pub mod clinic;
pub mod engagement;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                      login (public)
/// /auth/refresh                    refresh (public)
/// /auth/logout                     logout (requires auth)
/// /auth/me                         caller identity + linked person
///
/// /people                          list, create
/// /people/{id}                     get, update, delete
/// /people/{id}/activity-score      accumulated activity score
///
/// /availability-slots              list, create
/// /availability-slots/{id}         get, update, delete
///
/// /practitioners                   list, create
/// /practitioners/{id}              get (with availability), update, delete
/// /practitioners/{id}/slots        replace availability link set (PUT)
///
/// /treatments                      list, create
/// /treatments/{id}                 get, update, delete
///
/// /appointments                    list, create
/// /appointments/{id}               get (nested detail), update, delete
/// /appointments/{id}/confirm       status transition (POST)
/// /appointments/{id}/complete      status transition (POST)
/// /appointments/{id}/cancel        status transition (POST)
///
/// /feedback                        list, create (completed appts only)
/// /feedback/{id}                   get (nested detail), delete
///
/// /progress-reports[/{id}]         CRUD
/// /activity-logs[/{id}]            CRUD
/// /caregiver-notes[/{id}]          CRUD
/// /notification-schedules[/{id}]   CRUD
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/people", clinic::people_router())
        .nest("/availability-slots", clinic::availability_router())
        .nest("/practitioners", clinic::practitioners_router())
        .nest("/treatments", clinic::treatments_router())
        .nest("/appointments", clinic::appointments_router())
        .nest("/feedback", clinic::feedback_router())
        .nest("/progress-reports", engagement::progress_reports_router())
        .nest("/activity-logs", engagement::activity_logs_router())
        .nest("/caregiver-notes", engagement::caregiver_notes_router())
        .nest(
            "/notification-schedules",
            engagement::notification_schedules_router(),
        )
}
