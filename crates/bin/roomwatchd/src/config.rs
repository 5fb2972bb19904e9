//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `roomwatch.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use std::net::SocketAddr;
use std::time::Duration;

use serde::Deserialize;

use roomwatch_adapter_http_reqwest::HttpConfig;
use roomwatch_app::poller::PollerConfig;
use roomwatch_domain::room::{RoomCatalog, RoomId};

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Readings-service client settings.
    pub api: HttpConfig,
    /// Polling settings.
    pub poller: PollerSettings,
    /// Built-in demo service.
    pub demo: DemoConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Polling cadence and initial selection.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct PollerSettings {
    /// Seconds between two timer-driven polls.
    pub interval_secs: u64,
    /// Room selected at startup.
    pub room: String,
    /// Room catalog. Empty means the default `100`..`109`.
    pub rooms: Vec<String>,
}

/// Built-in demo service configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Serve simulated readings and point the client at them.
    pub enabled: bool,
    /// Address the demo service binds to.
    pub bind: String,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `roomwatch.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("roomwatch.toml")?;
        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(val) = lookup("ROOMWATCH_API_URL") {
            self.api.base_url = val;
        }
        if let Some(val) = lookup("ROOMWATCH_INTERVAL_SECS")
            && let Ok(secs) = val.parse()
        {
            self.poller.interval_secs = secs;
        }
        if let Some(val) = lookup("ROOMWATCH_ROOM") {
            self.poller.room = val;
        }
        if let Some(val) = lookup("ROOMWATCH_DEMO") {
            self.demo.enabled = matches!(val.as_str(), "1" | "true" | "yes");
        }
        if let Some(val) = lookup("ROOMWATCH_DEMO_BIND") {
            self.demo.bind = val;
        }
        if let Some(val) = lookup("ROOMWATCH_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = lookup("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.poller.interval_secs == 0 {
            return Err(ConfigError::Validation(
                "poll interval must be non-zero".to_string(),
            ));
        }
        if !self.demo.enabled && self.api.base_url.trim().is_empty() {
            return Err(ConfigError::Validation(
                "api base_url must not be empty".to_string(),
            ));
        }
        if self.demo.enabled {
            self.demo_addr()?;
        }
        let catalog = self.catalog()?;
        let room = self.initial_room()?;
        if !catalog.contains(&room) {
            return Err(ConfigError::Validation(format!(
                "initial room {room} is not in the room catalog"
            )));
        }
        Ok(())
    }

    /// Delay between two timer-driven polls.
    #[must_use]
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.poller.interval_secs)
    }

    /// Build the room catalog.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] when a room identifier is blank.
    pub fn catalog(&self) -> Result<RoomCatalog, ConfigError> {
        if self.poller.rooms.is_empty() {
            return Ok(RoomCatalog::default());
        }
        let rooms = self
            .poller
            .rooms
            .iter()
            .map(|room| room.parse::<RoomId>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|err| ConfigError::Validation(err.to_string()))?;
        RoomCatalog::new(rooms).map_err(|err| ConfigError::Validation(err.to_string()))
    }

    /// Room selected at startup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] when the identifier is blank.
    pub fn initial_room(&self) -> Result<RoomId, ConfigError> {
        self.poller
            .room
            .parse()
            .map_err(|err: roomwatch_domain::error::ValidationError| {
                ConfigError::Validation(err.to_string())
            })
    }

    /// Build the poller configuration.
    ///
    /// # Errors
    ///
    /// See [`catalog`](Self::catalog).
    pub fn poller_config(&self) -> Result<PollerConfig, ConfigError> {
        Ok(PollerConfig::default()
            .with_interval(self.interval())
            .with_catalog(self.catalog()?))
    }

    /// Parsed bind address of the demo service.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] when the address cannot be parsed.
    pub fn demo_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.demo.bind.parse().map_err(|_| {
            ConfigError::Validation(format!("invalid demo bind address {:?}", self.demo.bind))
        })
    }
}

impl Default for PollerSettings {
    fn default() -> Self {
        Self {
            interval_secs: 5,
            room: "100".to_string(),
            rooms: Vec::new(),
        }
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            bind: "127.0.0.1:8000".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "roomwatchd=info,roomwatch=info".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn should_produce_sensible_defaults() {
        let config = Config::default();
        assert_eq!(config.api.base_url, "http://localhost:8000");
        assert_eq!(config.interval(), Duration::from_secs(5));
        assert_eq!(config.poller.room, "100");
        assert!(!config.demo.enabled);
        assert_eq!(config.catalog().unwrap().len(), 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn should_parse_minimal_toml() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.poller.interval_secs, 5);
    }

    #[test]
    fn should_parse_full_toml() {
        let toml = "
            [api]
            base_url = 'http://sensors.local:9000'
            request_timeout_secs = 4

            [poller]
            interval_secs = 30
            room = 'B'
            rooms = ['A', 'B']

            [demo]
            enabled = true
            bind = '0.0.0.0:9000'

            [logging]
            filter = 'debug'
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.api.base_url, "http://sensors.local:9000");
        assert_eq!(config.api.request_timeout(), Some(Duration::from_secs(4)));
        assert_eq!(config.interval(), Duration::from_secs(30));
        assert_eq!(config.initial_room().unwrap(), RoomId::from("B"));
        assert_eq!(config.catalog().unwrap().len(), 2);
        assert!(config.demo.enabled);
        assert_eq!(config.demo_addr().unwrap().port(), 9000);
        assert_eq!(config.logging.filter, "debug");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn should_return_default_when_file_not_found() {
        let config = Config::from_file("nonexistent.toml").unwrap();
        assert_eq!(config.poller.interval_secs, 5);
    }

    #[test]
    fn should_apply_overrides() {
        let mut config = Config::default();
        config.apply_overrides(lookup(&[
            ("ROOMWATCH_API_URL", "http://10.0.0.2:8000"),
            ("ROOMWATCH_INTERVAL_SECS", "12"),
            ("ROOMWATCH_ROOM", "105"),
            ("ROOMWATCH_DEMO", "true"),
            ("ROOMWATCH_LOG", "trace"),
        ]));
        assert_eq!(config.api.base_url, "http://10.0.0.2:8000");
        assert_eq!(config.poller.interval_secs, 12);
        assert_eq!(config.poller.room, "105");
        assert!(config.demo.enabled);
        assert_eq!(config.logging.filter, "trace");
    }

    #[test]
    fn should_prefer_rust_log_over_roomwatch_log() {
        let mut config = Config::default();
        config.apply_overrides(lookup(&[("ROOMWATCH_LOG", "trace"), ("RUST_LOG", "warn")]));
        assert_eq!(config.logging.filter, "warn");
    }

    #[test]
    fn should_ignore_unparsable_interval_override() {
        let mut config = Config::default();
        config.apply_overrides(lookup(&[("ROOMWATCH_INTERVAL_SECS", "soon")]));
        assert_eq!(config.poller.interval_secs, 5);
    }

    #[test]
    fn should_reject_zero_interval() {
        let mut config = Config::default();
        config.poller.interval_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_reject_initial_room_outside_catalog() {
        let mut config = Config::default();
        config.poller.room = "110".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(message)) if message.contains("110")
        ));
    }

    #[test]
    fn should_reject_blank_room_in_catalog() {
        let mut config = Config::default();
        config.poller.rooms = vec!["100".to_string(), " ".to_string()];
        assert!(config.catalog().is_err());
    }

    #[test]
    fn should_reject_invalid_demo_bind_when_enabled() {
        let mut config = Config::default();
        config.demo.enabled = true;
        config.demo.bind = "localhost".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_build_poller_config() {
        let mut config = Config::default();
        config.poller.interval_secs = 2;
        let poller = config.poller_config().unwrap();
        assert_eq!(poller.interval, Duration::from_secs(2));
        assert_eq!(poller.catalog, RoomCatalog::default());
    }

    #[test]
    fn should_report_parse_error_for_invalid_toml() {
        let result: Result<Config, _> = toml::from_str("invalid {{{");
        assert!(result.is_err());
    }
}
