//! JSON handlers for the readings endpoints.

use axum::Json;
use axum::extract::{Path, State};
use chrono::Local;

use roomwatch_domain::error::ValidationError;
use roomwatch_domain::reading::SensorReading;
use roomwatch_domain::room::RoomId;
use roomwatch_domain::status::RoomStatus;
use roomwatch_domain::time::parse_day;

use crate::error::ApiError;
use crate::simulation;
use crate::state::DemoState;

/// `GET /api/readings/{room}/{date}`
///
/// # Errors
///
/// 404 for a room outside the catalog, 400 for a malformed date.
pub async fn readings(
    State(state): State<DemoState>,
    Path((room, date)): Path<(String, String)>,
) -> Result<Json<Vec<SensorReading>>, ApiError> {
    let room = RoomId::from(room);
    if !state.catalog.contains(&room) {
        return Err(ValidationError::UnknownRoom(room).into());
    }
    let date = parse_day(&date)?;

    tracing::debug!(%room, %date, "serving simulated readings");
    Ok(Json(simulation::day_readings(&room, date)))
}

/// `GET /api/current-status`
pub async fn current_status(State(state): State<DemoState>) -> Json<Vec<RoomStatus>> {
    Json(simulation::current_status(
        &state.catalog,
        Local::now().naive_local(),
    ))
}
