//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches
//! - Where the API embeds related entities or derived fields, a
//!   `Serialize` response/detail struct assembled by the repository

pub mod activity_log;
pub mod appointment;
pub mod availability;
pub mod caregiver_note;
pub mod feedback;
pub mod notification_schedule;
pub mod person;
pub mod practitioner;
pub mod progress_report;
pub mod session;
pub mod status;
pub mod treatment;
pub mod user;
