//! Line commands read from stdin to change the selection at runtime.
//!
//! ```text
//! room 107
//! date 2026-10-15
//! ```

use chrono::NaiveDate;

use roomwatch_app::poller::PollerHandle;
use roomwatch_domain::error::{RoomWatchError, ValidationError};
use roomwatch_domain::room::RoomId;
use roomwatch_domain::time::parse_day;

/// A parsed selection command.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    /// Switch to another room, same day.
    Room(RoomId),
    /// Switch to another day, same room.
    Date(NaiveDate),
}

/// Reasons a command line is rejected.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("unknown command {0:?}, expected `room <id>` or `date <yyyy-MM-dd>`")]
    Unknown(String),
    #[error("`{0}` needs exactly one argument")]
    Arity(&'static str),
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

/// Parse one input line. Blank lines yield `None`.
///
/// # Errors
///
/// Returns a [`CommandError`] when the verb is unknown, the argument count is
/// wrong or the argument is not a valid room or day.
pub fn parse(line: &str) -> Result<Option<Command>, CommandError> {
    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        return Ok(None);
    };
    let (Some(argument), None) = (words.next(), words.next()) else {
        return match verb {
            "room" => Err(CommandError::Arity("room")),
            "date" => Err(CommandError::Arity("date")),
            other => Err(CommandError::Unknown(other.to_string())),
        };
    };

    match verb {
        "room" => Ok(Some(Command::Room(argument.parse()?))),
        "date" => Ok(Some(Command::Date(parse_day(argument)?))),
        other => Err(CommandError::Unknown(other.to_string())),
    }
}

/// Parse `line` and forward it to the poller, logging the outcome.
pub async fn apply(handle: &mut PollerHandle, line: &str) {
    let command = match parse(line) {
        Ok(Some(command)) => command,
        Ok(None) => return,
        Err(err) => {
            tracing::warn!(%err, "invalid command");
            return;
        }
    };

    let result = match command {
        Command::Room(room) => handle.select_room(room).await,
        Command::Date(date) => handle.select_date(date).await,
    };
    match result {
        Ok(()) => tracing::info!(
            room = %handle.selection().room,
            date = %handle.selection().date,
            "selection updated"
        ),
        Err(RoomWatchError::Validation(reason)) => {
            tracing::warn!(%reason, "selection rejected");
        }
        Err(err) => tracing::warn!(%err, "selection not applied"),
    }
}
