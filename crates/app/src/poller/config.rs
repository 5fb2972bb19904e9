//! Poller configuration.

use std::time::Duration;

use roomwatch_domain::room::RoomCatalog;

/// Default delay between two timer-driven polls.
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(5);

/// Explicit configuration handed to [`RoomTelemetryPoller::mount`](super::RoomTelemetryPoller::mount).
#[derive(Debug, Clone)]
pub struct PollerConfig {
    /// Delay between two timer-driven polls.
    pub interval: Duration,
    /// Rooms a selection may point at.
    pub catalog: RoomCatalog,
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self {
            interval: DEFAULT_INTERVAL,
            catalog: RoomCatalog::default(),
        }
    }
}

impl PollerConfig {
    #[must_use]
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    #[must_use]
    pub fn with_catalog(mut self, catalog: RoomCatalog) -> Self {
        self.catalog = catalog;
        self
    }
}
