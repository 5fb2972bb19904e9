//! # roomwatch-domain
//!
//! Pure domain model for the roomwatch room-environment monitor.
//!
//! ## Responsibilities
//! - Foundational types: room identifiers, error conventions, calendar dates
//! - Define **Sensor readings** (one timestamped observation for one room)
//! - Define **Room status** (latest snapshot for one room)
//! - Define the **Selection** (room + day) that parameterizes history queries
//! - Define the **Room catalog** (the fixed set of valid rooms)
//! - Enforce selection invariants (known room, date within the history window)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod room;
pub mod time;

pub mod reading;
pub mod selection;
pub mod status;
