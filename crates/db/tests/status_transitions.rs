//! Integration tests for the appointment status state machine.
//!
//! The strict policy is under test: transitions out of the terminal
//! states (`completed`, `cancelled`) are rejected with a conflict.

use solea_core::error::CoreError;
use solea_db::models::appointment::CreateAppointment;
use solea_db::models::person::CreatePerson;
use solea_db::models::practitioner::CreatePractitioner;
use solea_db::models::status::AppointmentStatus;
use solea_db::repositories::{AppointmentRepo, PersonRepo, PractitionerRepo};
use solea_db::DbError;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn seed_appointment(pool: &PgPool) -> i64 {
    let person = PersonRepo::create(
        pool,
        &CreatePerson {
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            birth_date: None,
            phone: None,
            national_id: None,
            photo_path: None,
            user_id: None,
        },
    )
    .await
    .unwrap();

    let practitioner = PractitionerRepo::create(
        pool,
        &CreatePractitioner {
            name: "Dr. Souza".to_string(),
            specialization: "General podiatry".to_string(),
            email: "souza@example.com".to_string(),
            phone_whatsapp: None,
            social_url: None,
            photo_path: None,
            address: None,
            district: None,
            specialty_bio: "General practice.".to_string(),
            user_id: None,
        },
    )
    .await
    .unwrap();

    AppointmentRepo::create(
        pool,
        &CreateAppointment {
            person_id: person.id,
            practitioner_id: practitioner.id,
            appointment_date: None,
            treatment_ids: vec![],
        },
    )
    .await
    .unwrap()
    .id
}

fn is_conflict(err: &DbError) -> bool {
    matches!(err, DbError::Domain(CoreError::Conflict(_)))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_pending_confirm_complete(pool: PgPool) {
    let id = seed_appointment(&pool).await;

    let confirmed = AppointmentRepo::confirm(&pool, id).await.unwrap().unwrap();
    assert_eq!(confirmed.status_id, AppointmentStatus::Confirmed.id());

    let completed = AppointmentRepo::complete(&pool, id).await.unwrap().unwrap();
    assert_eq!(completed.status_id, AppointmentStatus::Completed.id());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_pending_can_complete_directly(pool: PgPool) {
    let id = seed_appointment(&pool).await;

    let completed = AppointmentRepo::complete(&pool, id).await.unwrap().unwrap();
    assert_eq!(completed.status_id, AppointmentStatus::Completed.id());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_cancel_from_pending_and_confirmed(pool: PgPool) {
    let first = seed_appointment(&pool).await;
    let cancelled = AppointmentRepo::cancel(&pool, first).await.unwrap().unwrap();
    assert_eq!(cancelled.status_id, AppointmentStatus::Cancelled.id());

    let second = seed_appointment(&pool).await;
    AppointmentRepo::confirm(&pool, second).await.unwrap();
    let cancelled = AppointmentRepo::cancel(&pool, second).await.unwrap().unwrap();
    assert_eq!(cancelled.status_id, AppointmentStatus::Cancelled.id());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_completed_cannot_be_cancelled(pool: PgPool) {
    let id = seed_appointment(&pool).await;
    AppointmentRepo::complete(&pool, id).await.unwrap();

    let err = AppointmentRepo::cancel(&pool, id).await.unwrap_err();
    assert!(is_conflict(&err));

    // Status is unchanged.
    let appointment = AppointmentRepo::find_by_id(&pool, id).await.unwrap().unwrap();
    assert_eq!(appointment.status_id, AppointmentStatus::Completed.id());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_cancelled_cannot_be_completed(pool: PgPool) {
    let id = seed_appointment(&pool).await;
    AppointmentRepo::cancel(&pool, id).await.unwrap();

    let err = AppointmentRepo::complete(&pool, id).await.unwrap_err();
    assert!(is_conflict(&err));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_confirm_is_not_repeatable(pool: PgPool) {
    let id = seed_appointment(&pool).await;
    AppointmentRepo::confirm(&pool, id).await.unwrap();

    let err = AppointmentRepo::confirm(&pool, id).await.unwrap_err();
    assert!(is_conflict(&err));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_transition_on_missing_appointment(pool: PgPool) {
    let result = AppointmentRepo::complete(&pool, 999_999).await.unwrap();
    assert!(result.is_none());
}
