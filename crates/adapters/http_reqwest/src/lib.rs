//! # roomwatch-adapter-http-reqwest
//!
//! HTTP adapter built on [reqwest](https://docs.rs/reqwest) — implements the
//! [`TelemetrySource`] port against the readings service.
//!
//! ## Endpoints
//!
//! | Operation | Request |
//! |-----------|---------|
//! | history | `GET {base}/api/readings/{room}/{yyyy-MM-dd}` |
//! | status | `GET {base}/api/current-status` |
//!
//! No authentication, headers or query parameters. Non-2xx responses and
//! undecodable bodies are reported as [`RoomWatchError::Fetch`].
//!
//! ## Dependency rule
//!
//! Depends on `roomwatch-app` (port traits) and `roomwatch-domain` only.

mod config;
mod endpoint;
mod error;

pub use config::HttpConfig;
pub use error::HttpError;

use chrono::NaiveDate;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

use roomwatch_app::ports::TelemetrySource;
use roomwatch_domain::error::RoomWatchError;
use roomwatch_domain::reading::SensorReading;
use roomwatch_domain::room::RoomId;
use roomwatch_domain::status::RoomStatus;

/// Client for the readings service.
#[derive(Debug, Clone)]
pub struct HttpTelemetryClient {
    client: Client,
    base_url: Url,
}

impl HttpTelemetryClient {
    /// Build a client from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidBaseUrl`] when the base URL is not an
    /// absolute `http`/`https` URL, or [`HttpError::Client`] when the
    /// underlying client cannot be built.
    pub fn new(config: &HttpConfig) -> Result<Self, HttpError> {
        let base_url = endpoint::parse_base(&config.base_url)?;

        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(HttpError::Client)?;

        Ok(Self { client, base_url })
    }

    /// Base URL every endpoint is resolved against.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, HttpError> {
        tracing::trace!(%url, "GET");

        let response = match self.client.get(url.clone()).send().await {
            Ok(response) => response,
            Err(source) => return Err(HttpError::Request { url, source }),
        };

        let status = response.status();
        if !status.is_success() {
            return Err(HttpError::Status {
                url,
                status: status.as_u16(),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|source| HttpError::Decode { url, source })
    }
}

impl TelemetrySource for HttpTelemetryClient {
    async fn fetch_history(
        &self,
        room: &RoomId,
        date: NaiveDate,
    ) -> Result<Vec<SensorReading>, RoomWatchError> {
        let url = endpoint::readings(&self.base_url, room, date);
        Ok(self.get_json(url).await?)
    }

    async fn fetch_current_status(&self) -> Result<Vec<RoomStatus>, RoomWatchError> {
        let url = endpoint::current_status(&self.base_url);
        Ok(self.get_json(url).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_client_from_default_config() {
        let client = HttpTelemetryClient::new(&HttpConfig::default()).unwrap();
        assert_eq!(client.base_url().as_str(), "http://localhost:8000/");
    }

    #[test]
    fn should_reject_relative_base_url() {
        let config = HttpConfig {
            base_url: "/api".to_string(),
            ..HttpConfig::default()
        };
        assert!(matches!(
            HttpTelemetryClient::new(&config),
            Err(HttpError::InvalidBaseUrl(_))
        ));
    }
}
