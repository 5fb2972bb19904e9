//! Selection — the user-chosen room and day for history queries.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::room::{RoomCatalog, RoomId};
use crate::time::HISTORY_WINDOW_DAYS;

/// The room and calendar day whose history is displayed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Selection {
    pub room: RoomId,
    pub date: NaiveDate,
}

impl Selection {
    /// Create a selection.
    #[must_use]
    pub fn new(room: impl Into<RoomId>, date: NaiveDate) -> Self {
        Self {
            room: room.into(),
            date,
        }
    }

    /// Return a copy pointing at another room, same day.
    #[must_use]
    pub fn with_room(&self, room: RoomId) -> Self {
        Self {
            room,
            date: self.date,
        }
    }

    /// Return a copy pointing at another day, same room.
    #[must_use]
    pub fn with_date(&self, date: NaiveDate) -> Self {
        Self {
            room: self.room.clone(),
            date,
        }
    }

    /// Check that the room is known and the day lies in
    /// `[today - HISTORY_WINDOW_DAYS, today]`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UnknownRoom`], [`ValidationError::DateInFuture`]
    /// or [`ValidationError::DateTooOld`].
    pub fn validate(&self, catalog: &RoomCatalog, today: NaiveDate) -> Result<(), ValidationError> {
        if !catalog.contains(&self.room) {
            return Err(ValidationError::UnknownRoom(self.room.clone()));
        }
        if self.date > today {
            return Err(ValidationError::DateInFuture {
                date: self.date,
                today,
            });
        }
        let oldest = today
            .checked_sub_days(Days::new(u64::from(HISTORY_WINDOW_DAYS)))
            .unwrap_or(NaiveDate::MIN);
        if self.date < oldest {
            return Err(ValidationError::DateTooOld {
                date: self.date,
                today,
                window_days: HISTORY_WINDOW_DAYS,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn should_accept_today() {
        let today = day(2024, 6, 10);
        let selection = Selection::new("100", today);
        assert!(selection.validate(&RoomCatalog::default(), today).is_ok());
    }

    #[test]
    fn should_accept_oldest_day_of_window() {
        let today = day(2024, 6, 10);
        let selection = Selection::new("109", day(2024, 6, 3));
        assert!(selection.validate(&RoomCatalog::default(), today).is_ok());
    }

    #[test]
    fn should_reject_day_before_window() {
        let today = day(2024, 6, 10);
        let selection = Selection::new("100", day(2024, 6, 2));
        assert!(matches!(
            selection.validate(&RoomCatalog::default(), today),
            Err(ValidationError::DateTooOld { window_days: 7, .. })
        ));
    }

    #[test]
    fn should_reject_future_day() {
        let today = day(2024, 6, 10);
        let selection = Selection::new("100", day(2024, 6, 11));
        assert!(matches!(
            selection.validate(&RoomCatalog::default(), today),
            Err(ValidationError::DateInFuture { .. })
        ));
    }

    #[test]
    fn should_reject_unknown_room() {
        let today = day(2024, 6, 10);
        let selection = Selection::new("110", today);
        assert_eq!(
            selection.validate(&RoomCatalog::default(), today),
            Err(ValidationError::UnknownRoom(RoomId::from("110")))
        );
    }

    #[test]
    fn should_replace_only_the_room() {
        let selection = Selection::new("100", day(2024, 6, 10));
        let moved = selection.with_room(RoomId::from("107"));
        assert_eq!(moved.room.as_str(), "107");
        assert_eq!(moved.date, selection.date);
    }

    #[test]
    fn should_replace_only_the_date() {
        let selection = Selection::new("100", day(2024, 6, 10));
        let moved = selection.with_date(day(2024, 6, 9));
        assert_eq!(moved.room, selection.room);
        assert_eq!(moved.date, day(2024, 6, 9));
    }
}
