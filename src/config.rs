//! Client configuration loaded from environment variables.
//!
//! Follows 12-factor style: all settings come from environment variables
//! (or a `.env` file via `dotenvy`). Both endpoints share one host and port;
//! only their paths differ.

/// Top-level client configuration.
///
/// Loaded once at startup via [`ClientConfig::from_env`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Host name of the autocomplete service (e.g. `localhost`).
    pub host: String,

    /// TCP port of the autocomplete service.
    pub port: u16,

    /// Path of the persistent WebSocket endpoint.
    pub ws_path: String,

    /// Path of the one-shot submission endpoint.
    pub send_path: String,

    /// Capacity of the channel carrying UI events into the session loop.
    pub ui_event_capacity: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("localhost", 8080)
    }
}

impl ClientConfig {
    /// Creates a configuration for `host:port` with the default paths.
    #[must_use]
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ws_path: "/ws".to_string(),
            send_path: "/send".to_string(),
            ui_event_capacity: 64,
        }
    }

    /// Loads configuration from environment variables.
    ///
    /// Falls back to defaults when a variable is not set.
    /// Calls `dotenvy::dotenv().ok()` to optionally load a `.env` file.
    ///
    /// # Errors
    ///
    /// Returns an error if `AUTOCOMPLETE_PORT` is set but cannot be parsed
    /// as a port number.
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let defaults = Self::default();

        let host = std::env::var("AUTOCOMPLETE_HOST").unwrap_or(defaults.host);
        let port = match std::env::var("AUTOCOMPLETE_PORT") {
            Ok(raw) => raw.parse()?,
            Err(_) => defaults.port,
        };
        let ws_path = std::env::var("AUTOCOMPLETE_WS_PATH").unwrap_or(defaults.ws_path);
        let send_path = std::env::var("AUTOCOMPLETE_SEND_PATH").unwrap_or(defaults.send_path);
        let ui_event_capacity = parse_env("UI_EVENT_CAPACITY", defaults.ui_event_capacity).max(1);

        Ok(Self {
            host,
            port,
            ws_path,
            send_path,
            ui_event_capacity,
        })
    }

    /// URL of the persistent connection, e.g. `ws://localhost:8080/ws`.
    #[must_use]
    pub fn ws_url(&self) -> String {
        format!("ws://{}:{}{}", self.host, self.port, self.ws_path)
    }

    /// URL of the one-shot endpoint, e.g. `http://localhost:8080/send`.
    #[must_use]
    pub fn send_url(&self) -> String {
        format!("http://{}:{}{}", self.host, self.port, self.send_path)
    }
}

/// Parses an environment variable as `T`, returning `default` on missing
/// or invalid values.
fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
