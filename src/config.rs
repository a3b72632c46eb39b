//! Configuration types.
//!
//! Everything is read from environment variables with sensible defaults.
//! The `from_lookup` constructors take the variable source as a closure so
//! tests don't have to mutate the process environment.

use std::time::Duration;

use secrecy::SecretString;

use crate::error::ConfigError;

/// Default port of the chat API server.
pub const DEFAULT_PORT: u16 = 5001;

/// Default base URL of the online financial dictionary.
pub const DEFAULT_DICTIONARY_URL: &str = "https://financialmodelingprep.com/api/v3";

/// Configuration of the `/api/chat` server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port to bind on 0.0.0.0.
    pub port: u16,
    /// Financial Modeling Prep API key. The online dictionary is disabled
    /// when absent.
    pub dictionary_api_key: Option<SecretString>,
    /// Base URL of the dictionary API.
    pub dictionary_url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            dictionary_api_key: None,
            dictionary_url: DEFAULT_DICTIONARY_URL.to_string(),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("DOLLA_PORT") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: "DOLLA_PORT".to_string(),
                message: format!("'{raw}' is not a valid port"),
            })?,
            None => DEFAULT_PORT,
        };

        let dictionary_api_key = lookup("FINANCIAL_MODELING_PREP_API_KEY")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(SecretString::from);

        let dictionary_url = lookup("DOLLA_DICTIONARY_URL")
            .map(|s| s.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_DICTIONARY_URL.to_string());

        Ok(Self {
            port,
            dictionary_api_key,
            dictionary_url,
        })
    }
}

/// Configuration of the chat widget's HTTP backend.
#[derive(Debug, Clone)]
pub struct WidgetConfig {
    /// Base URL of a remote chat server. `None` means "start one in-process".
    pub chat_url: Option<String>,
    /// Timeout applied to each `/api/chat` request.
    pub request_timeout: Duration,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            chat_url: None,
            request_timeout: Duration::from_secs(15),
        }
    }
}

impl WidgetConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let chat_url = lookup("DOLLA_CHAT_URL")
            .map(|s| s.trim().trim_end_matches('/').to_string())
            .filter(|s| !s.is_empty());

        let timeout_secs: u64 = lookup("DOLLA_CHAT_TIMEOUT_SECS")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(15);

        Self {
            chat_url,
            request_timeout: Duration::from_secs(timeout_secs),
        }
    }
}
