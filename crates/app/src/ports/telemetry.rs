//! Telemetry port — read access to the readings service.

use std::future::Future;
use std::sync::Arc;

use chrono::NaiveDate;
use roomwatch_domain::error::RoomWatchError;
use roomwatch_domain::reading::SensorReading;
use roomwatch_domain::room::RoomId;
use roomwatch_domain::status::RoomStatus;

/// Source of sensor readings and room status snapshots.
///
/// Implementations perform no validation of their inputs: the caller is
/// responsible for only asking for known rooms and days inside the history
/// window.
pub trait TelemetrySource: Send + Sync {
    /// Fetch the readings of `room` for the calendar day `date`, ordered by
    /// time ascending.
    ///
    /// # Errors
    ///
    /// Returns [`RoomWatchError::Fetch`] when the request fails or the body
    /// cannot be decoded.
    fn fetch_history(
        &self,
        room: &RoomId,
        date: NaiveDate,
    ) -> impl Future<Output = Result<Vec<SensorReading>, RoomWatchError>> + Send;

    /// Fetch the current status of every room.
    ///
    /// # Errors
    ///
    /// Returns [`RoomWatchError::Fetch`] when the request fails or the body
    /// cannot be decoded.
    fn fetch_current_status(
        &self,
    ) -> impl Future<Output = Result<Vec<RoomStatus>, RoomWatchError>> + Send;
}

impl<T: TelemetrySource> TelemetrySource for Arc<T> {
    fn fetch_history(
        &self,
        room: &RoomId,
        date: NaiveDate,
    ) -> impl Future<Output = Result<Vec<SensorReading>, RoomWatchError>> + Send {
        (**self).fetch_history(room, date)
    }

    fn fetch_current_status(
        &self,
    ) -> impl Future<Output = Result<Vec<RoomStatus>, RoomWatchError>> + Send {
        (**self).fetch_current_status()
    }
}
