//! Integration tests for the engagement records keyed to a person:
//! progress reports, activity logs, caregiver notes, and notification
//! schedules.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use solea_db::models::activity_log::CreateActivityLog;
use solea_db::models::caregiver_note::CreateCaregiverNote;
use solea_db::models::notification_schedule::CreateNotificationSchedule;
use solea_db::models::person::CreatePerson;
use solea_db::models::progress_report::{CreateProgressReport, UpdateProgressReport};
use solea_db::repositories::{
    ActivityLogRepo, CaregiverNoteRepo, NotificationScheduleRepo, PersonRepo, ProgressReportRepo,
};
use sqlx::PgPool;

async fn seed_person(pool: &PgPool, name: &str, email: &str) -> i64 {
    PersonRepo::create(
        pool,
        &CreatePerson {
            name: name.to_string(),
            email: email.to_string(),
            birth_date: None,
            phone: None,
            national_id: None,
            photo_path: None,
            user_id: None,
        },
    )
    .await
    .unwrap()
    .id
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_progress_report_crud(pool: PgPool) {
    let person_id = seed_person(&pool, "Ana", "ana@example.com").await;

    let report = ProgressReportRepo::create(
        &pool,
        &CreateProgressReport {
            person_id,
            progress: Decimal::new(4250, 2), // 42.50%
            recommendations: Some("Keep daily stretches.".to_string()),
        },
    )
    .await
    .unwrap();
    assert_eq!(report.progress, Decimal::new(4250, 2));

    let updated = ProgressReportRepo::update(
        &pool,
        report.id,
        &UpdateProgressReport {
            progress: Some(Decimal::new(5000, 2)),
            recommendations: None,
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(updated.progress, Decimal::new(5000, 2));
    assert_eq!(
        updated.recommendations.as_deref(),
        Some("Keep daily stretches.")
    );

    assert!(ProgressReportRepo::delete(&pool, report.id).await.unwrap());
    assert!(ProgressReportRepo::find_by_id(&pool, report.id)
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_activity_log_total_score(pool: PgPool) {
    let person_id = seed_person(&pool, "Bob", "bob@example.com").await;
    let other_id = seed_person(&pool, "Cara", "cara@example.com").await;

    for (desc, score) in [("Balance game", 30), ("Memory game", 45)] {
        ActivityLogRepo::create(
            &pool,
            &CreateActivityLog {
                person_id,
                description: desc.to_string(),
                score,
            },
        )
        .await
        .unwrap();
    }
    ActivityLogRepo::create(
        &pool,
        &CreateActivityLog {
            person_id: other_id,
            description: "Balance game".to_string(),
            score: 99,
        },
    )
    .await
    .unwrap();

    assert_eq!(ActivityLogRepo::total_score(&pool, person_id).await.unwrap(), 75);
    assert_eq!(ActivityLogRepo::total_score(&pool, other_id).await.unwrap(), 99);

    let entries = ActivityLogRepo::list(&pool, Some(person_id), None, None, None)
        .await
        .unwrap();
    assert_eq!(entries.len(), 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_caregiver_note_crud(pool: PgPool) {
    let person_id = seed_person(&pool, "Dan", "dan@example.com").await;

    let note = CaregiverNoteRepo::create(
        &pool,
        &CreateCaregiverNote {
            person_id,
            content: "Responded well to the last session.".to_string(),
        },
    )
    .await
    .unwrap();

    let found = CaregiverNoteRepo::find_by_id(&pool, note.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.content, "Responded well to the last session.");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_notification_schedule_crud(pool: PgPool) {
    let person_id = seed_person(&pool, "Eva", "eva@example.com").await;

    let schedule = NotificationScheduleRepo::create(
        &pool,
        &CreateNotificationSchedule {
            person_id,
            appointment_date: NaiveDate::from_ymd_opt(2026, 4, 20).unwrap(),
            notify_on: NaiveDate::from_ymd_opt(2026, 4, 18).unwrap(),
        },
    )
    .await
    .unwrap();
    assert_eq!(
        schedule.notify_on,
        NaiveDate::from_ymd_opt(2026, 4, 18).unwrap()
    );

    let listed = NotificationScheduleRepo::list(&pool, Some(person_id), None, None, None)
        .await
        .unwrap();
    assert_eq!(listed.len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_person_delete_cascades_engagement(pool: PgPool) {
    let person_id = seed_person(&pool, "Finn", "finn@example.com").await;

    let report = ProgressReportRepo::create(
        &pool,
        &CreateProgressReport {
            person_id,
            progress: Decimal::new(1000, 2),
            recommendations: None,
        },
    )
    .await
    .unwrap();
    let entry = ActivityLogRepo::create(
        &pool,
        &CreateActivityLog {
            person_id,
            description: "Game".to_string(),
            score: 10,
        },
    )
    .await
    .unwrap();
    let note = CaregiverNoteRepo::create(
        &pool,
        &CreateCaregiverNote {
            person_id,
            content: "Note".to_string(),
        },
    )
    .await
    .unwrap();

    assert!(PersonRepo::delete(&pool, person_id).await.unwrap());

    assert!(ProgressReportRepo::find_by_id(&pool, report.id)
        .await
        .unwrap()
        .is_none());
    assert!(ActivityLogRepo::find_by_id(&pool, entry.id)
        .await
        .unwrap()
        .is_none());
    assert!(CaregiverNoteRepo::find_by_id(&pool, note.id)
        .await
        .unwrap()
        .is_none());
}
