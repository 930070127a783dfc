//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Write paths enforce the
//! domain invariants from `solea_core`; multi-statement invariants run
//! inside a single transaction.

pub mod activity_log_repo;
pub mod appointment_repo;
pub mod availability_repo;
pub mod caregiver_note_repo;
pub mod feedback_repo;
pub mod notification_schedule_repo;
pub mod person_repo;
pub mod practitioner_repo;
pub mod progress_report_repo;
pub mod session_repo;
pub mod treatment_repo;
pub mod user_repo;

pub use activity_log_repo::ActivityLogRepo;
pub use appointment_repo::AppointmentRepo;
pub use availability_repo::AvailabilityRepo;
pub use caregiver_note_repo::CaregiverNoteRepo;
pub use feedback_repo::FeedbackRepo;
pub use notification_schedule_repo::NotificationScheduleRepo;
pub use person_repo::PersonRepo;
pub use practitioner_repo::PractitionerRepo;
pub use progress_report_repo::ProgressReportRepo;
pub use session_repo::SessionRepo;
pub use treatment_repo::TreatmentRepo;
pub use user_repo::UserRepo;
