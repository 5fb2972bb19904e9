//! Sensor readings — one timestamped observation for one room.

use serde::{Deserialize, Serialize};

/// A single observation, as returned by the readings service.
///
/// A day's history is a `Vec<SensorReading>` ordered by `time` ascending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorReading {
    /// Time label, e.g. `"14:00"`.
    pub time: String,
    /// Temperature in °C.
    pub temperature: f64,
    /// Relative humidity in %.
    pub humidity: f64,
}

impl SensorReading {
    /// Create a reading.
    #[must_use]
    pub fn new(time: impl Into<String>, temperature: f64, humidity: f64) -> Self {
        Self {
            time: time.into(),
            temperature,
            humidity,
        }
    }
}
