//! Client configuration
//!
//! Settings are read from environment variables with the `BHOJPUR_` prefix
//! using the `config` and `dotenvy` crates, or built directly in code.
//!
//! # Example
//!
//! ```no_run
//! use subscription_client::config::ClientConfig;
//!
//! let config = ClientConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Talking to {}", config.base_url);
//! ```

mod error;

pub use error::{ConfigError, ValidationError};

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use url::Url;

/// Base URL used when none is configured.
pub const DEFAULT_BASE_URL: &str = "https://api.bhojpur.net";

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Settings for a [`Client`](crate::client::Client).
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    /// Secret API key, sent as the Basic-auth username
    pub api_key: SecretString,

    /// Scheme and host of the API, without a path
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Emit `debug` events for every request and response
    #[serde(default)]
    pub debug: bool,

    /// Per-request timeout applied when a call doesn't set its own
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl ClientConfig {
    /// Configuration with the given key and defaults for everything else.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::new(api_key.into()),
            base_url: default_base_url(),
            debug: false,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Point the client at another host, e.g. a local test server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with the `BHOJPUR_` prefix
    /// 3. Deserializes into [`ClientConfig`], applying defaults
    ///
    /// # Environment Variable Format
    ///
    /// - `BHOJPUR_API_KEY=sk_test_...` -> `api_key` (required)
    /// - `BHOJPUR_BASE_URL=http://localhost:4010` -> `base_url`
    /// - `BHOJPUR_DEBUG=true` -> `debug`
    /// - `BHOJPUR_TIMEOUT_SECS=10` -> `timeout_secs`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the key is missing or a value cannot be
    /// parsed into its expected type.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::with_prefix("BHOJPUR")
                    .prefix_separator("_")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for an empty key, a base URL that does not
    /// parse as an absolute http(s) URL, or a zero timeout.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.parsed_base_url()?;

        if self.api_key.expose_secret().is_empty() {
            return Err(ValidationError::MissingRequired("BHOJPUR_API_KEY"));
        }
        if self.timeout_secs == 0 {
            return Err(ValidationError::InvalidTimeout);
        }

        Ok(())
    }

    /// The base URL, parsed.
    pub fn parsed_base_url(&self) -> Result<Url, ValidationError> {
        let url = Url::parse(&self.base_url)
            .map_err(|e| ValidationError::InvalidBaseUrl(format!("{}: {}", self.base_url, e)))?;

        if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
            return Err(ValidationError::InvalidBaseUrl(self.base_url.clone()));
        }

        Ok(url)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
