//! Client configuration parsed from environment variables.

use crate::error::ConfigError;

pub const API_URL_ENV: &str = "SPINE_API_URL";
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Immutable settings for one `ApiClient`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Build config from the process environment.
    ///
    /// Optional:
    /// - `SPINE_API_URL`: backend base URL, default `http://localhost:8000`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary variable lookup.
    ///
    /// An unset or empty `SPINE_API_URL` falls back to the localhost default
    /// with a warning; a value without an http(s) scheme is rejected. The
    /// value is otherwise kept verbatim, trailing slash included.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        match lookup(API_URL_ENV).filter(|v| !v.trim().is_empty()) {
            Some(value) => {
                if !(value.starts_with("http://") || value.starts_with("https://")) {
                    return Err(ConfigError::InvalidUrl {
                        var: API_URL_ENV,
                        value,
                    });
                }
                Ok(Self::new(value))
            }
            None => {
                tracing::warn!(
                    default = DEFAULT_BASE_URL,
                    "{API_URL_ENV} not set, using local development backend"
                );
                Ok(Self::default())
            }
        }
    }
}
