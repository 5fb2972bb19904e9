//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use roomwatch_domain::error::{RoomWatchError, ValidationError};

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`RoomWatchError`] to an HTTP response with appropriate status code.
#[derive(Debug)]
pub struct ApiError(RoomWatchError);

impl From<RoomWatchError> for ApiError {
    fn from(err: RoomWatchError) -> Self {
        Self(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            RoomWatchError::Validation(err @ ValidationError::UnknownRoom(_)) => {
                (StatusCode::NOT_FOUND, err.to_string())
            }
            RoomWatchError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            RoomWatchError::Stopped => (
                StatusCode::SERVICE_UNAVAILABLE,
                RoomWatchError::Stopped.to_string(),
            ),
            RoomWatchError::Fetch(err) => {
                tracing::error!(error = %err, "upstream error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roomwatch_domain::room::RoomId;

    #[test]
    fn should_map_unknown_room_to_not_found() {
        let response = ApiError::from(ValidationError::UnknownRoom(RoomId::from("9"))).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn should_map_invalid_date_to_bad_request() {
        let response =
            ApiError::from(ValidationError::InvalidDate("yesterday".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn should_map_fetch_error_to_internal_error() {
        let response = ApiError::from(RoomWatchError::Fetch("boom".into())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn should_map_stopped_to_service_unavailable() {
        let response = ApiError::from(RoomWatchError::Stopped).into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
