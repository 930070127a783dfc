//! Route definitions for the clinical resources: people, availability
//! slots, practitioners, treatments, appointments, and feedback.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::{
    activity_log, appointment, availability, feedback, person, practitioner, treatment,
};
use crate::state::AppState;

/// Routes mounted at `/people`.
///
/// ```text
/// GET    /                    list (search: name, email, national id)
/// POST   /                    create
/// GET    /{id}                get_by_id (includes derived age)
/// PUT    /{id}                update
/// DELETE /{id}                delete (cascades)
/// GET    /{id}/activity-score accumulated activity score
/// ```
pub fn people_router() -> Router<AppState> {
    Router::new()
        .route("/", get(person::list).post(person::create))
        .route(
            "/{id}",
            get(person::get_by_id)
                .put(person::update)
                .delete(person::delete),
        )
        .route("/{id}/activity-score", get(activity_log::total_score))
}

/// Routes mounted at `/availability-slots`.
///
/// ```text
/// GET    /          list (filter: weekday)
/// POST   /          create (rejects start >= end)
/// GET    /{id}      get_by_id
/// PUT    /{id}      update
/// DELETE /{id}      delete
/// ```
pub fn availability_router() -> Router<AppState> {
    Router::new()
        .route("/", get(availability::list).post(availability::create))
        .route(
            "/{id}",
            get(availability::get_by_id)
                .put(availability::update)
                .delete(availability::delete),
        )
}

/// Routes mounted at `/practitioners`.
///
/// ```text
/// GET    /            list (approved only unless ?include_unapproved=true)
/// POST   /            create
/// GET    /{id}        get_by_id (embeds availability)
/// PUT    /{id}        update (including the approval flag)
/// DELETE /{id}        delete (cascades)
/// PUT    /{id}/slots  replace availability link set
/// ```
pub fn practitioners_router() -> Router<AppState> {
    Router::new()
        .route("/", get(practitioner::list).post(practitioner::create))
        .route(
            "/{id}",
            get(practitioner::get_by_id)
                .put(practitioner::update)
                .delete(practitioner::delete),
        )
        .route("/{id}/slots", put(practitioner::set_slots))
}

/// Routes mounted at `/treatments`.
///
/// ```text
/// GET    /          list (search: name; filter: category)
/// POST   /          create
/// GET    /{id}      get_by_id
/// PUT    /{id}      update
/// DELETE /{id}      delete
/// ```
pub fn treatments_router() -> Router<AppState> {
    Router::new()
        .route("/", get(treatment::list).post(treatment::create))
        .route(
            "/{id}",
            get(treatment::get_by_id)
                .put(treatment::update)
                .delete(treatment::delete),
        )
}

/// Routes mounted at `/appointments`.
///
/// ```text
/// GET    /               list (filters: status, person, practitioner)
/// POST   /               create (starts pending)
/// GET    /{id}           get_by_id (embeds client, practitioner, treatments)
/// PUT    /{id}           update (date, treatment set)
/// DELETE /{id}           delete (cascades to feedback)
/// POST   /{id}/confirm   pending -> confirmed
/// POST   /{id}/complete  -> completed (terminal)
/// POST   /{id}/cancel    -> cancelled (terminal)
/// ```
pub fn appointments_router() -> Router<AppState> {
    Router::new()
        .route("/", get(appointment::list).post(appointment::create))
        .route(
            "/{id}",
            get(appointment::get_by_id)
                .put(appointment::update)
                .delete(appointment::delete),
        )
        .route("/{id}/confirm", post(appointment::confirm))
        .route("/{id}/complete", post(appointment::complete))
        .route("/{id}/cancel", post(appointment::cancel))
}

/// Routes mounted at `/feedback`.
///
/// No update route: feedback is immutable once submitted.
///
/// ```text
/// GET    /          list (filters: person, score)
/// POST   /          create (completed appointments only)
/// GET    /{id}      get_by_id (embeds client and appointment)
/// DELETE /{id}      delete
/// ```
pub fn feedback_router() -> Router<AppState> {
    Router::new()
        .route("/", get(feedback::list).post(feedback::create))
        .route("/{id}", get(feedback::get_by_id).delete(feedback::delete))
}
