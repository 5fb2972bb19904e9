//! HTTP adapter error types.

use reqwest::Url;

use roomwatch_domain::error::RoomWatchError;

/// Errors specific to the HTTP adapter.
#[derive(Debug, thiserror::Error)]
pub enum HttpError {
    /// The configured base URL cannot be used to build endpoint URLs.
    #[error("invalid base URL {0:?}")]
    InvalidBaseUrl(String),

    /// The underlying reqwest client could not be built.
    #[error("failed to build HTTP client")]
    Client(#[source] reqwest::Error),

    /// The request could not be sent or no response was received.
    #[error("request to {url} failed")]
    Request {
        /// Requested URL.
        url: Url,
        #[source]
        source: reqwest::Error,
    },

    /// The service answered with a non-success status code.
    #[error("{url} answered with HTTP {status}")]
    Status {
        /// Requested URL.
        url: Url,
        /// Status code received.
        status: u16,
    },

    /// The response body is not the expected JSON document.
    #[error("failed to decode response from {url}")]
    Decode {
        /// Requested URL.
        url: Url,
        #[source]
        source: reqwest::Error,
    },
}

impl HttpError {
    /// Convert into a [`RoomWatchError::Fetch`] for propagation across port
    /// boundaries.
    #[must_use]
    pub fn into_domain(self) -> RoomWatchError {
        RoomWatchError::Fetch(Box::new(self))
    }
}

impl From<HttpError> for RoomWatchError {
    fn from(err: HttpError) -> Self {
        err.into_domain()
    }
}
