//! Integration tests for clinic entity CRUD operations.
//!
//! Exercises the repository layer against a real database:
//! - Create the full entity graph (person -> practitioner -> appointment)
//! - Slot time-range validation
//! - Cascade delete behaviour
//! - Detail assembly with embedded related entities
//! - List ordering allowlists

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use solea_core::error::CoreError;
use solea_db::models::appointment::CreateAppointment;
use solea_db::models::availability::{CreateSlot, UpdateSlot};
use solea_db::models::person::{CreatePerson, UpdatePerson};
use solea_db::models::practitioner::CreatePractitioner;
use solea_db::models::treatment::CreateTreatment;
use solea_db::repositories::{
    AppointmentRepo, AvailabilityRepo, PersonRepo, PractitionerRepo, TreatmentRepo,
};
use solea_db::DbError;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_person(name: &str, email: &str) -> CreatePerson {
    CreatePerson {
        name: name.to_string(),
        email: email.to_string(),
        birth_date: NaiveDate::from_ymd_opt(2000, 1, 1),
        phone: None,
        national_id: None,
        photo_path: None,
        user_id: None,
    }
}

fn new_practitioner(name: &str, email: &str) -> CreatePractitioner {
    CreatePractitioner {
        name: name.to_string(),
        specialization: "Pediatric foot care".to_string(),
        email: email.to_string(),
        phone_whatsapp: None,
        social_url: None,
        photo_path: None,
        address: None,
        district: None,
        specialty_bio: "Ten years of clinical practice.".to_string(),
        user_id: None,
    }
}

fn new_slot(weekday: &str, start: (u32, u32), end: (u32, u32)) -> CreateSlot {
    CreateSlot {
        weekday: weekday.to_string(),
        start_time: NaiveTime::from_hms_opt(start.0, start.1, 0).unwrap(),
        end_time: NaiveTime::from_hms_opt(end.0, end.1, 0).unwrap(),
    }
}

fn new_treatment(name: &str, duration_mins: i32, price_cents: i64) -> CreateTreatment {
    CreateTreatment {
        name: name.to_string(),
        description: "A treatment from the catalog.".to_string(),
        duration_mins,
        price: Decimal::new(price_cents, 2),
        category: "clinical".to_string(),
    }
}

fn new_appointment(person_id: i64, practitioner_id: i64, treatment_ids: Vec<i64>) -> CreateAppointment {
    CreateAppointment {
        person_id,
        practitioner_id,
        appointment_date: NaiveDate::from_ymd_opt(2026, 3, 10),
        treatment_ids,
    }
}

fn is_validation_error(err: &DbError) -> bool {
    matches!(err, DbError::Domain(CoreError::Validation(_)))
}

// ---------------------------------------------------------------------------
// Test: Full graph creation
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_full_graph(pool: PgPool) {
    let person = PersonRepo::create(&pool, &new_person("Ana Lima", "ana@example.com"))
        .await
        .unwrap();
    assert_eq!(person.name, "Ana Lima");

    let practitioner =
        PractitionerRepo::create(&pool, &new_practitioner("Dr. Souza", "souza@example.com"))
            .await
            .unwrap();
    assert!(!practitioner.approved); // default

    let slot = AvailabilityRepo::create(&pool, &new_slot("monday", (9, 0), (12, 0)))
        .await
        .unwrap();
    let linked = PractitionerRepo::set_slots(&pool, practitioner.id, &[slot.id])
        .await
        .unwrap()
        .unwrap();
    assert_eq!(linked.len(), 1);
    assert_eq!(linked[0].id, slot.id);

    let treatment = TreatmentRepo::create(&pool, &new_treatment("Nail care", 45, 12000))
        .await
        .unwrap();
    assert_eq!(treatment.price, Decimal::new(12000, 2));

    let appointment = AppointmentRepo::create(
        &pool,
        &new_appointment(person.id, practitioner.id, vec![treatment.id]),
    )
    .await
    .unwrap();
    assert_eq!(appointment.status_id, 1); // pending default
    assert_eq!(appointment.person_id, person.id);

    let treatments = AppointmentRepo::treatments_for(&pool, appointment.id)
        .await
        .unwrap();
    assert_eq!(treatments.len(), 1);
    assert_eq!(treatments[0].id, treatment.id);
}

// ---------------------------------------------------------------------------
// Test: Slot time-range validation
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_slot_rejects_equal_times(pool: PgPool) {
    let err = AvailabilityRepo::create(&pool, &new_slot("tuesday", (9, 0), (9, 0)))
        .await
        .unwrap_err();
    assert!(is_validation_error(&err));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_slot_rejects_reversed_times(pool: PgPool) {
    let err = AvailabilityRepo::create(&pool, &new_slot("tuesday", (14, 0), (9, 0)))
        .await
        .unwrap_err();
    assert!(is_validation_error(&err));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_slot_rejects_unknown_weekday(pool: PgPool) {
    let err = AvailabilityRepo::create(&pool, &new_slot("someday", (9, 0), (10, 0)))
        .await
        .unwrap_err();
    assert!(is_validation_error(&err));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_slot_update_validates_effective_range(pool: PgPool) {
    let slot = AvailabilityRepo::create(&pool, &new_slot("friday", (9, 0), (12, 0)))
        .await
        .unwrap();

    // Moving only the start past the existing end must be rejected.
    let err = AvailabilityRepo::update(
        &pool,
        slot.id,
        &UpdateSlot {
            weekday: None,
            start_time: NaiveTime::from_hms_opt(13, 0, 0),
            end_time: None,
        },
    )
    .await
    .unwrap_err();
    assert!(is_validation_error(&err));

    // Moving both together is fine.
    let updated = AvailabilityRepo::update(
        &pool,
        slot.id,
        &UpdateSlot {
            weekday: None,
            start_time: NaiveTime::from_hms_opt(13, 0, 0),
            end_time: NaiveTime::from_hms_opt(17, 0, 0),
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(updated.start_time, NaiveTime::from_hms_opt(13, 0, 0).unwrap());
}

// ---------------------------------------------------------------------------
// Test: Person validation and update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_person_rejects_bad_email(pool: PgPool) {
    let err = PersonRepo::create(&pool, &new_person("Ana", "not-an-email"))
        .await
        .unwrap_err();
    assert!(is_validation_error(&err));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_person_partial_update(pool: PgPool) {
    let person = PersonRepo::create(&pool, &new_person("Ana", "ana@example.com"))
        .await
        .unwrap();

    let updated = PersonRepo::update(
        &pool,
        person.id,
        &UpdatePerson {
            name: None,
            email: None,
            birth_date: None,
            phone: Some("+55 11 99999-0000".to_string()),
            national_id: None,
            photo_path: None,
            user_id: None,
        },
    )
    .await
    .unwrap()
    .unwrap();

    assert_eq!(updated.name, "Ana"); // untouched
    assert_eq!(updated.phone.as_deref(), Some("+55 11 99999-0000"));
}

// ---------------------------------------------------------------------------
// Test: Treatment validation
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_treatment_rejects_zero_duration(pool: PgPool) {
    let err = TreatmentRepo::create(&pool, &new_treatment("Broken", 0, 1000))
        .await
        .unwrap_err();
    assert!(is_validation_error(&err));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_treatment_rejects_negative_price(pool: PgPool) {
    let err = TreatmentRepo::create(&pool, &new_treatment("Broken", 30, -100))
        .await
        .unwrap_err();
    assert!(is_validation_error(&err));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_treatment_rejects_unknown_category(pool: PgPool) {
    let mut input = new_treatment("Broken", 30, 1000);
    input.category = "surgical".to_string();
    let err = TreatmentRepo::create(&pool, &input).await.unwrap_err();
    assert!(is_validation_error(&err));
}

// ---------------------------------------------------------------------------
// Test: Cascade deletes
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_cascade_delete_practitioner(pool: PgPool) {
    let person = PersonRepo::create(&pool, &new_person("Bob", "bob@example.com"))
        .await
        .unwrap();
    let practitioner =
        PractitionerRepo::create(&pool, &new_practitioner("Dr. Dias", "dias@example.com"))
            .await
            .unwrap();
    let appointment = AppointmentRepo::create(
        &pool,
        &new_appointment(person.id, practitioner.id, vec![]),
    )
    .await
    .unwrap();

    let deleted = PractitionerRepo::delete(&pool, practitioner.id)
        .await
        .unwrap();
    assert!(deleted);

    // The appointment is gone; the person is untouched.
    assert!(AppointmentRepo::find_by_id(&pool, appointment.id)
        .await
        .unwrap()
        .is_none());
    assert!(PersonRepo::find_by_id(&pool, person.id)
        .await
        .unwrap()
        .is_some());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_cascade_delete_person(pool: PgPool) {
    let person = PersonRepo::create(&pool, &new_person("Cara", "cara@example.com"))
        .await
        .unwrap();
    let practitioner =
        PractitionerRepo::create(&pool, &new_practitioner("Dr. Reis", "reis@example.com"))
            .await
            .unwrap();
    let appointment = AppointmentRepo::create(
        &pool,
        &new_appointment(person.id, practitioner.id, vec![]),
    )
    .await
    .unwrap();

    assert!(PersonRepo::delete(&pool, person.id).await.unwrap());

    assert!(AppointmentRepo::find_by_id(&pool, appointment.id)
        .await
        .unwrap()
        .is_none());
    assert!(PractitionerRepo::find_by_id(&pool, practitioner.id)
        .await
        .unwrap()
        .is_some());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_slot_unlinks_practitioners(pool: PgPool) {
    let practitioner =
        PractitionerRepo::create(&pool, &new_practitioner("Dr. Melo", "melo@example.com"))
            .await
            .unwrap();
    let slot = AvailabilityRepo::create(&pool, &new_slot("wednesday", (8, 0), (11, 0)))
        .await
        .unwrap();
    PractitionerRepo::set_slots(&pool, practitioner.id, &[slot.id])
        .await
        .unwrap();

    assert!(AvailabilityRepo::delete(&pool, slot.id).await.unwrap());

    let remaining = PractitionerRepo::slots_for(&pool, practitioner.id)
        .await
        .unwrap();
    assert!(remaining.is_empty());
}

// ---------------------------------------------------------------------------
// Test: Detail assembly embeds full related entities
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_appointment_detail_embeds_treatments(pool: PgPool) {
    let person = PersonRepo::create(&pool, &new_person("Ana", "ana@example.com"))
        .await
        .unwrap();
    let practitioner =
        PractitionerRepo::create(&pool, &new_practitioner("Dr. Souza", "souza@example.com"))
            .await
            .unwrap();
    let slot = AvailabilityRepo::create(&pool, &new_slot("monday", (9, 0), (12, 0)))
        .await
        .unwrap();
    PractitionerRepo::set_slots(&pool, practitioner.id, &[slot.id])
        .await
        .unwrap();

    let first = TreatmentRepo::create(&pool, &new_treatment("Nail care", 45, 12000))
        .await
        .unwrap();
    let second = TreatmentRepo::create(&pool, &new_treatment("Callus removal", 30, 8000))
        .await
        .unwrap();

    let appointment = AppointmentRepo::create(
        &pool,
        &new_appointment(person.id, practitioner.id, vec![first.id, second.id]),
    )
    .await
    .unwrap();

    let detail = AppointmentRepo::find_detail(&pool, appointment.id)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(detail.client.id, person.id);
    assert_eq!(detail.client.email, "ana@example.com");
    assert_eq!(detail.practitioner.practitioner.id, practitioner.id);
    assert_eq!(detail.practitioner.availability.len(), 1);
    assert_eq!(detail.status, "pending");

    // Both offerings embedded with their full field sets, not just ids.
    assert_eq!(detail.treatments.len(), 2);
    let nail = detail
        .treatments
        .iter()
        .find(|t| t.name == "Nail care")
        .unwrap();
    assert_eq!(nail.duration_mins, 45);
    assert_eq!(nail.price, Decimal::new(12000, 2));
    let callus = detail
        .treatments
        .iter()
        .find(|t| t.name == "Callus removal")
        .unwrap();
    assert_eq!(callus.duration_mins, 30);
    assert_eq!(callus.price, Decimal::new(8000, 2));
}

// ---------------------------------------------------------------------------
// Test: Listing filters and ordering allowlists
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_practitioner_list_approval_gate(pool: PgPool) {
    let approved =
        PractitionerRepo::create(&pool, &new_practitioner("Dr. Approved", "a@example.com"))
            .await
            .unwrap();
    PractitionerRepo::update(
        &pool,
        approved.id,
        &solea_db::models::practitioner::UpdatePractitioner {
            name: None,
            specialization: None,
            email: None,
            phone_whatsapp: None,
            social_url: None,
            photo_path: None,
            address: None,
            district: None,
            specialty_bio: None,
            approved: Some(true),
            user_id: None,
        },
    )
    .await
    .unwrap();
    PractitionerRepo::create(&pool, &new_practitioner("Dr. Hidden", "h@example.com"))
        .await
        .unwrap();

    let visible = PractitionerRepo::list(&pool, None, false, None, None, None)
        .await
        .unwrap();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id, approved.id);

    let all = PractitionerRepo::list(&pool, None, true, None, None, None)
        .await
        .unwrap();
    assert_eq!(all.len(), 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_person_search_and_order_allowlist(pool: PgPool) {
    PersonRepo::create(&pool, &new_person("Ana Lima", "ana@example.com"))
        .await
        .unwrap();
    PersonRepo::create(&pool, &new_person("Bruno Reis", "bruno@example.com"))
        .await
        .unwrap();

    let found = PersonRepo::list(&pool, Some("lima"), None, None, None)
        .await
        .unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "Ana Lima");

    // Unknown order keys never reach SQL.
    let err = PersonRepo::list(&pool, None, Some("password"), None, None)
        .await
        .unwrap_err();
    assert!(is_validation_error(&err));
}
