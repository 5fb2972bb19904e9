//! Calendar-day helpers.

use chrono::{Local, NaiveDate};

use crate::error::ValidationError;

/// How many days back a history selection may reach.
pub const HISTORY_WINDOW_DAYS: u32 = 7;

/// Return the current local calendar day.
#[must_use]
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Format a day the way the readings service expects it (`yyyy-MM-dd`).
#[must_use]
pub fn format_day(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Parse a `yyyy-MM-dd` day.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidDate`] when `value` is not a valid day.
pub fn parse_day(value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| ValidationError::InvalidDate(value.to_owned()))
}
