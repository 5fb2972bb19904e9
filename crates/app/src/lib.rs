//! # roomwatch-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **port trait** that adapters must implement (driven/outbound port):
//!   - `TelemetrySource` — fetch a room's daily history and the current status of all rooms
//! - Provide the **driving/inbound use-case**:
//!   - `RoomTelemetryPoller` — polls on mount, on selection change and on a fixed
//!     interval, and publishes each slot (history, status) independently
//! - Isolate fetch failures: they are logged and never reach subscribers
//!
//! ## Dependency rule
//! Depends on `roomwatch-domain` only (plus `tokio` for tasks, timers and channels).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod poller;
pub mod ports;
