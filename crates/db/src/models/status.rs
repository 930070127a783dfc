//! Status helper enum mapping to the SMALLSERIAL lookup table.
//!
//! The enum variants' discriminants match the seed data order (1-based)
//! in the `appointment_statuses` database table and the constants in
//! `solea_core::scheduling::appointment_status`.

/// Status ID type matching SMALLINT/SMALLSERIAL in the database.
pub type StatusId = i16;

macro_rules! define_status_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $val:expr ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[repr(i16)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum $name {
            $( $(#[$vmeta])* $variant = $val ),+
        }

        impl $name {
            /// Return the database status ID.
            pub fn id(self) -> StatusId {
                self as StatusId
            }
        }

        impl From<$name> for StatusId {
            fn from(value: $name) -> Self {
                value as StatusId
            }
        }
    };
}

define_status_enum! {
    /// Appointment lifecycle status.
    AppointmentStatus {
        Pending = 1,
        Confirmed = 2,
        Completed = 3,
        Cancelled = 4,
    }
}
