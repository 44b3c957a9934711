//! Client configuration structs
//!
//! Loads configuration from environment variables and an optional .env file.

use serde::Deserialize;
use std::env;
use std::time::Duration;

/// Main client configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    pub app: AppSettings,
    pub forum: ForumConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_env")]
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

/// Forum server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ForumConfig {
    /// Base URL of the forum server, e.g. `http://127.0.0.1:5000`
    pub base_url: String,
    /// Value sent verbatim in the `Cookie` header, e.g. `session=...`.
    /// The reaction endpoint sits behind the forum login; requests
    /// without a valid session are redirected to the login page.
    #[serde(default)]
    pub session_cookie: Option<String>,
    /// Per-request timeout in milliseconds. Absent means no timeout:
    /// a request that never resolves keeps its button in the
    /// requesting phase.
    #[serde(default)]
    pub timeout_ms: Option<u64>,
}

impl ForumConfig {
    /// Per-request timeout as a Duration, if configured
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }
}

// Default value functions
fn default_app_name() -> String {
    "forum-client".to_string()
}

fn default_env() -> Environment {
    Environment::Development
}

impl ClientConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if required environment variables are missing
    /// or carry values that do not parse
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let timeout_ms = match env::var("FORUM_TIMEOUT_MS") {
            Ok(raw) => match raw.parse::<u64>() {
                Ok(ms) => Some(ms),
                Err(_) => return Err(ConfigError::InvalidValue("FORUM_TIMEOUT_MS", raw)),
            },
            Err(_) => None,
        };

        Ok(Self {
            app: AppSettings {
                name: env::var("APP_NAME").unwrap_or_else(|_| default_app_name()),
                env: env::var("APP_ENV")
                    .ok()
                    .and_then(|s| match s.to_lowercase().as_str() {
                        "production" => Some(Environment::Production),
                        "staging" => Some(Environment::Staging),
                        "development" => Some(Environment::Development),
                        _ => None,
                    })
                    .unwrap_or_default(),
            },
            forum: ForumConfig {
                base_url: env::var("FORUM_BASE_URL")
                    .map_err(|_| ConfigError::MissingVar("FORUM_BASE_URL"))?,
                session_cookie: env::var("FORUM_SESSION_COOKIE").ok(),
                timeout_ms,
            },
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
