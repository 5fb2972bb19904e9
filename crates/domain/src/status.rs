//! Room status — the latest known snapshot for one room.

use serde::{Deserialize, Serialize};

use crate::room::RoomId;

/// Current temperature and humidity of one room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomStatus {
    pub room: RoomId,
    /// Temperature in °C.
    pub temperature: f64,
    /// Relative humidity in %.
    pub humidity: f64,
}

impl RoomStatus {
    /// Create a status snapshot.
    #[must_use]
    pub fn new(room: impl Into<RoomId>, temperature: f64, humidity: f64) -> Self {
        Self {
            room: room.into(),
            temperature,
            humidity,
        }
    }
}
