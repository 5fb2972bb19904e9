//! Published slot values.

use roomwatch_domain::reading::SensorReading;
use roomwatch_domain::selection::Selection;
use roomwatch_domain::status::RoomStatus;

/// Latest accepted history for the chart.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistorySnapshot {
    /// Room and day the readings belong to. `None` until a first response
    /// has been accepted.
    pub selection: Option<Selection>,
    pub readings: Vec<SensorReading>,
    /// Sequence number of the request that produced this value, `0` when
    /// nothing has been accepted yet.
    pub sequence: u64,
}

/// Latest accepted status set for the room cards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatusSnapshot {
    pub rooms: Vec<RoomStatus>,
    /// Sequence number of the request that produced this value, `0` when
    /// nothing has been accepted yet.
    pub sequence: u64,
}

impl HistorySnapshot {
    /// The most recent reading of the day, if any.
    #[must_use]
    pub fn latest(&self) -> Option<&SensorReading> {
        self.readings.last()
    }
}
