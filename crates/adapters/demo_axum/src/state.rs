//! Shared state for the demo handlers.

use std::sync::Arc;

use roomwatch_domain::room::RoomCatalog;

/// State shared across all axum handlers.
#[derive(Debug, Clone)]
pub struct DemoState {
    /// Rooms the service knows about.
    pub catalog: Arc<RoomCatalog>,
}

impl DemoState {
    /// Create a state serving `catalog`.
    #[must_use]
    pub fn new(catalog: RoomCatalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }
}

impl Default for DemoState {
    fn default() -> Self {
        Self::new(RoomCatalog::default())
    }
}
