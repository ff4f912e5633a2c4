//! Submission status enum mapping to the SMALLINT lookup table.
//!
//! Variant discriminants match the seed data order (1-based) in the
//! `submission_statuses` database table.

use crate::error::CoreError;

/// Status ID type matching SMALLINT/SMALLSERIAL in the database.
pub type StatusId = i16;

macro_rules! define_status_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $val:expr => $label:expr ),+ $(,)?
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

            /// The wire/export name of this status.
            pub fn as_str(self) -> &'static str {
                match self {
                    $( Self::$variant => $label ),+
                }
            }

            /// Resolve a database status ID back into the enum.
            pub fn from_id(id: StatusId) -> Result<Self, CoreError> {
                $(
                    if id == $val {
                        return Ok(Self::$variant);
                    }
                )+
                Err(CoreError::Internal(format!(
                    "Unknown {} id {id} in database",
                    stringify!($name),
                )))
            }

            /// Parse a wire name, as supplied by the status-update endpoint.
            pub fn parse(name: &str) -> Result<Self, CoreError> {
                $(
                    if name == $label {
                        return Ok(Self::$variant);
                    }
                )+
                Err(CoreError::Validation(format!(
                    "Unknown status '{name}'. Valid statuses: {}",
                    [$( $label ),+].join(", "),
                )))
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
    /// Review stage of a scholarship application.
    SubmissionStatus {
        Submitted = 1 => "submitted",
        UnderReview = 2 => "under_review",
        Shortlisted = 3 => "shortlisted",
        Accepted = 4 => "accepted",
        Rejected = 5 => "rejected",
    }
}
