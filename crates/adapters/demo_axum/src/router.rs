//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use crate::api;
use crate::state::DemoState;

/// Build the demo service [`Router`].
///
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build(state: DemoState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/readings/{room}/{date}", get(api::readings))
        .route("/api/current-status", get(api::current_status))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
