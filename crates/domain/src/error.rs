//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`RoomWatchError`] at port boundaries.

use chrono::NaiveDate;

use crate::room::RoomId;

/// Top-level error shared by the domain, application and adapters.
#[derive(Debug, thiserror::Error)]
pub enum RoomWatchError {
    /// A domain invariant was violated.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// Fetching telemetry from the readings service failed.
    ///
    /// Network failures and undecodable bodies both collapse here.
    #[error("fetch failed: {0}")]
    Fetch(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The poller is no longer running and cannot take new selections.
    #[error("poller has stopped")]
    Stopped,
}

/// Reasons a [`Selection`](crate::selection::Selection) or catalog is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Room identifiers must not be empty.
    #[error("room identifier must not be empty")]
    EmptyRoomId,

    /// The room is not part of the configured catalog.
    #[error("unknown room {0}")]
    UnknownRoom(RoomId),

    /// The selected day lies after today.
    #[error("date {date} is in the future (today is {today})")]
    DateInFuture {
        /// The rejected date.
        date: NaiveDate,
        /// The reference day.
        today: NaiveDate,
    },

    /// The selected day is older than the history window.
    #[error("date {date} is older than {window_days} days before {today}")]
    DateTooOld {
        /// The rejected date.
        date: NaiveDate,
        /// The reference day.
        today: NaiveDate,
        /// Size of the history window, in days.
        window_days: u32,
    },

    /// A date string is not in `yyyy-MM-dd` form.
    #[error("invalid date: {0}")]
    InvalidDate(String),

    /// A room catalog must contain at least one room.
    #[error("room catalog must not be empty")]
    EmptyCatalog,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_unknown_room() {
        let err = ValidationError::UnknownRoom(RoomId::from("201"));
        assert_eq!(err.to_string(), "unknown room 201");
    }

    #[test]
    fn should_display_date_in_future() {
        let err = ValidationError::DateInFuture {
            date: NaiveDate::from_ymd_opt(2024, 3, 2).unwrap(),
            today: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        };
        assert_eq!(
            err.to_string(),
            "date 2024-03-02 is in the future (today is 2024-03-01)"
        );
    }

    #[test]
    fn should_wrap_validation_error() {
        let err: RoomWatchError = ValidationError::EmptyCatalog.into();
        assert!(matches!(
            err,
            RoomWatchError::Validation(ValidationError::EmptyCatalog)
        ));
        assert_eq!(err.to_string(), "validation error");
    }

    #[test]
    fn should_keep_fetch_source() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let err = RoomWatchError::Fetch(Box::new(io));
        let source = std::error::Error::source(&err).unwrap();
        assert_eq!(source.to_string(), "refused");
    }
}
