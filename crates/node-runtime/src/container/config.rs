//! # Node Configuration
//!
//! Unified configuration for the gateway and the downstream service clients.
//!
//! Defaults suit a container network where the password service answers at
//! `encryption` and the search service at `search`. Every field can be
//! overridden from a `UD_*` environment variable; unparsable values are
//! logged and ignored.

use std::time::Duration;
use thiserror::Error;
use tracing::{info, warn};
use ud_03_api_gateway::{ConfigError as GatewayConfigError, GatewayConfig};

pub const ENV_HTTP_HOST: &str = "UD_HTTP_HOST";
pub const ENV_HTTP_PORT: &str = "UD_HTTP_PORT";
pub const ENV_REQUEST_TIMEOUT_SECS: &str = "UD_REQUEST_TIMEOUT_SECS";
pub const ENV_ENCRYPTION_URL: &str = "UD_ENCRYPTION_URL";
pub const ENV_SEARCH_URL: &str = "UD_SEARCH_URL";
pub const ENV_CLIENT_TIMEOUT_SECS: &str = "UD_CLIENT_TIMEOUT_SECS";

/// Complete node configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeConfig {
    /// API Gateway configuration.
    pub api_gateway: GatewayConfig,
    /// Downstream service endpoints.
    pub services: ServicesConfig,
}

/// Downstream microservice endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServicesConfig {
    /// Base URL of the password hashing service.
    pub encryption_url: String,
    /// Base URL of the search indexing service.
    pub search_url: String,
    /// Per-request timeout for both clients.
    pub client_timeout_secs: u64,
}

impl Default for ServicesConfig {
    fn default() -> Self {
        Self {
            encryption_url: "http://encryption:8082".into(),
            search_url: "http://search:8083".into(),
            client_timeout_secs: 5,
        }
    }
}

impl ServicesConfig {
    pub fn client_timeout(&self) -> Duration {
        Duration::from_secs(self.client_timeout_secs)
    }
}

impl NodeConfig {
    /// Validate configuration before anything binds or connects.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.api_gateway.validate()?;

        for (name, url) in [
            ("encryption_url", &self.services.encryption_url),
            ("search_url", &self.services.search_url),
        ] {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ConfigError::InvalidUrl {
                    name,
                    url: url.clone(),
                });
            }
        }

        if self.services.client_timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout(
                "client timeout cannot be 0".into(),
            ));
        }

        Ok(())
    }
}

/// Configuration errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error(transparent)]
    Gateway(#[from] GatewayConfigError),

    #[error("{name} must be an http(s) URL, got {url:?}")]
    InvalidUrl { name: &'static str, url: String },

    #[error("invalid timeout: {0}")]
    InvalidTimeout(String),
}

/// Load configuration from the process environment.
pub fn load_config() -> NodeConfig {
    load_config_from(|key| std::env::var(key).ok())
}

/// Load configuration from an arbitrary key lookup.
pub fn load_config_from<F>(lookup: F) -> NodeConfig
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = NodeConfig::default();

    override_parsed(&lookup, ENV_HTTP_HOST, &mut config.api_gateway.host);
    override_parsed(&lookup, ENV_HTTP_PORT, &mut config.api_gateway.port);
    override_parsed(
        &lookup,
        ENV_REQUEST_TIMEOUT_SECS,
        &mut config.api_gateway.request_timeout_secs,
    );
    override_parsed(
        &lookup,
        ENV_CLIENT_TIMEOUT_SECS,
        &mut config.services.client_timeout_secs,
    );

    if let Some(url) = lookup(ENV_ENCRYPTION_URL) {
        config.services.encryption_url = normalize_url(&url);
        info!(url = %config.services.encryption_url, "Using password service from environment");
    }
    if let Some(url) = lookup(ENV_SEARCH_URL) {
        config.services.search_url = normalize_url(&url);
        info!(url = %config.services.search_url, "Using search service from environment");
    }

    config
}

fn override_parsed<F, T>(lookup: &F, key: &str, target: &mut T)
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    let Some(raw) = lookup(key) else {
        return;
    };
    match raw.trim().parse() {
        Ok(value) => *target = value,
        Err(_) => warn!(key, value = %raw, "Ignoring invalid configuration value"),
    }
}

fn normalize_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}
