//! HTTP handlers, one module per resource.

pub mod activity_log;
pub mod appointment;
pub mod auth;
pub mod availability;
pub mod caregiver_note;
pub mod feedback;
pub mod notification_schedule;
pub mod person;
pub mod practitioner;
pub mod progress_report;
pub mod treatment;
