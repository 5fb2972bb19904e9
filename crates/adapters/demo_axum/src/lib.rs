//! # roomwatch-adapter-demo-axum
//!
//! Demo readings service built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve `GET /api/readings/{room}/{yyyy-MM-dd}` with a simulated day of
//!   hourly readings for one room
//! - Serve `GET /api/current-status` with a simulated snapshot of every room
//!   in the catalog
//! - Serve `GET /health` for readiness checks
//!
//! The simulation is deterministic for a given room, day and hour, so the
//! same request always yields the same body within an hour.
//!
//! ## Dependency rule
//! Depends on `roomwatch-domain` only (for the wire types). Never leaks axum
//! types into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod simulation;
pub mod state;
