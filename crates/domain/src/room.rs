//! Room identifiers and the fixed catalog of monitored rooms.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Number of rooms in the default catalog.
pub const DEFAULT_ROOM_COUNT: usize = 10;

/// Identifier of a monitored room (e.g. `"100"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomId(String);

impl RoomId {
    /// Borrow the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RoomId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for RoomId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl FromStr for RoomId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyRoomId);
        }
        Ok(Self(trimmed.to_owned()))
    }
}

/// The enumerable set of rooms a selection may point at.
///
/// The default catalog holds `"100"` through `"109"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomCatalog {
    rooms: Vec<RoomId>,
}

impl Default for RoomCatalog {
    fn default() -> Self {
        let rooms = (0..DEFAULT_ROOM_COUNT)
            .map(|i| RoomId(format!("10{i}")))
            .collect();
        Self { rooms }
    }
}

impl RoomCatalog {
    /// Build a catalog from an explicit list of rooms.
    ///
    /// Duplicates are dropped, first occurrence wins.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyCatalog`] when `rooms` is empty.
    pub fn new(rooms: impl IntoIterator<Item = RoomId>) -> Result<Self, ValidationError> {
        let mut unique: Vec<RoomId> = Vec::new();
        for room in rooms {
            if !unique.contains(&room) {
                unique.push(room);
            }
        }
        if unique.is_empty() {
            return Err(ValidationError::EmptyCatalog);
        }
        Ok(Self { rooms: unique })
    }

    /// Check whether `room` belongs to this catalog.
    #[must_use]
    pub fn contains(&self, room: &RoomId) -> bool {
        self.rooms.contains(room)
    }

    /// Iterate over the rooms in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &RoomId> {
        self.rooms.iter()
    }

    /// Number of rooms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    /// Always `false`; a catalog is never empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// The first room, used as the default selection.
    #[must_use]
    pub fn first(&self) -> &RoomId {
        &self.rooms[0]
    }
}
