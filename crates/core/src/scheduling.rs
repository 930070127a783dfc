//! Availability-slot rules and the appointment state machine.
//!
//! This module lives in `core` (zero internal deps) so it can be used by
//! both the repository layer and any future worker or CLI tooling.

use chrono::NaiveTime;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Weekdays
// ---------------------------------------------------------------------------

/// Day of the week an availability slot recurs on.
///
/// Stored as lowercase TEXT codes in the `availability_slots` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// All weekdays in calendar order.
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// The database code for this weekday.
    pub fn as_str(self) -> &'static str {
        match self {
            Weekday::Monday => "monday",
            Weekday::Tuesday => "tuesday",
            Weekday::Wednesday => "wednesday",
            Weekday::Thursday => "thursday",
            Weekday::Friday => "friday",
            Weekday::Saturday => "saturday",
            Weekday::Sunday => "sunday",
        }
    }

    /// Parse a database code, rejecting unknown values.
    pub fn parse(value: &str) -> Result<Weekday, CoreError> {
        Weekday::ALL
            .into_iter()
            .find(|d| d.as_str() == value)
            .ok_or_else(|| CoreError::Validation(format!("Unknown weekday: {value}")))
    }
}

/// Validate an availability slot's time range.
///
/// The end time must be strictly after the start time; equal or reversed
/// times are rejected. No cross-slot overlap check is performed --
/// overlapping slots for the same practitioner are permitted.
pub fn validate_slot_range(start: NaiveTime, end: NaiveTime) -> Result<(), CoreError> {
    if start >= end {
        return Err(CoreError::Validation(
            "End time must be after start time".into(),
        ));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Appointment state machine
// ---------------------------------------------------------------------------

/// Appointment status IDs matching `appointment_statuses` seed data
/// (1-based SMALLSERIAL).
pub mod appointment_status {
    pub const PENDING: i16 = 1;
    pub const CONFIRMED: i16 = 2;
    pub const COMPLETED: i16 = 3;
    pub const CANCELLED: i16 = 4;
}

/// Transition rules for appointment statuses.
///
/// `completed` and `cancelled` are terminal. `cancelled` is reachable from
/// any non-terminal state; `completed` is reachable from both `pending`
/// and `confirmed` (an appointment never explicitly confirmed can still be
/// carried out).
pub mod state_machine {
    use super::appointment_status as status;

    /// Returns the set of valid target status IDs reachable from `from`.
    ///
    /// Terminal states return an empty slice because no further
    /// transitions are allowed.
    pub fn valid_transitions(from: i16) -> &'static [i16] {
        match from {
            status::PENDING => &[status::CONFIRMED, status::COMPLETED, status::CANCELLED],
            status::CONFIRMED => &[status::COMPLETED, status::CANCELLED],
            status::COMPLETED | status::CANCELLED => &[],
            // Unknown status: no transitions allowed
            _ => &[],
        }
    }

    /// Check whether a transition from `from` to `to` is valid.
    pub fn can_transition(from: i16, to: i16) -> bool {
        valid_transitions(from).contains(&to)
    }

    /// Validate a state transition, returning an error message for invalid ones.
    pub fn validate_transition(from: i16, to: i16) -> Result<(), String> {
        if can_transition(from, to) {
            Ok(())
        } else {
            let from_name = status_name(from);
            let to_name = status_name(to);
            Err(format!(
                "Invalid status transition: {from_name} ({from}) -> {to_name} ({to})"
            ))
        }
    }

    /// Human-readable name for a status ID (for error messages).
    pub fn status_name(id: i16) -> &'static str {
        match id {
            status::PENDING => "pending",
            status::CONFIRMED => "confirmed",
            status::COMPLETED => "completed",
            status::CANCELLED => "cancelled",
            _ => "unknown",
        }
    }
}
