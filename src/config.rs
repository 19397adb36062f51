use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::fmt;

use crate::error::AppError;

/// Environment variable consulted when the config carries no key
pub const API_KEY_ENV: &str = "SPOONACULAR_API_KEY";

/// Server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Address the HTTP server listens on
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    /// Base URL of the recipe API
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// API key for the recipe API (can also be set via SPOONACULAR_API_KEY)
    pub api_key: Option<ApiKey>,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// How long a cached upstream response may be reused, in seconds
    #[serde(default = "default_cache_ttl")]
    pub cache_ttl: u64,
}

/// Upstream API key. Formatting never reveals the secret.
#[derive(Deserialize, Clone, PartialEq, Eq)]
#[serde(transparent)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        ApiKey(key.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

impl fmt::Display for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("***")
    }
}

fn default_bind_address() -> String {
    "0.0.0.0:3000".to_string()
}

fn default_base_url() -> String {
    "https://api.spoonacular.com".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_cache_ttl() -> u64 {
    60
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            base_url: default_base_url(),
            api_key: None,
            timeout: default_timeout(),
            cache_ttl: default_cache_ttl(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables with RECIPE_FINDER__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }

    /// Resolve the API key: config first, then the SPOONACULAR_API_KEY variable.
    ///
    /// Called once at startup; the client keeps the key for every request.
    pub fn resolve_api_key(&self) -> Result<ApiKey, AppError> {
        self.api_key
            .clone()
            .filter(|key| !key.expose().is_empty())
            .or_else(|| {
                std::env::var(API_KEY_ENV)
                    .ok()
                    .filter(|key| !key.is_empty())
                    .map(ApiKey)
            })
            .ok_or(AppError::MissingApiKey)
    }
}

/// Load configuration from file and environment variables
///
/// Environment variable format: RECIPE_FINDER__BIND_ADDRESS
pub fn load_config() -> Result<ServerConfig, ConfigError> {
    let settings = Config::builder()
        .add_source(File::with_name("config").required(false))
        .add_source(
            Environment::with_prefix("RECIPE_FINDER")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
