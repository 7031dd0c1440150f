//! Mock backend configuration parsed from environment variables.

pub const DEFAULT_PORT: u16 = 8000;
pub const LOCAL_FRONTEND_URL: &str = "http://localhost:3000";
pub const DEFAULT_DEMO_EMAIL: &str = "demo@spine.ai";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT '{0}'")]
    InvalidPort(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub frontend_url: String,
    pub demo_token: Option<String>,
    pub demo_email: String,
}

impl ServerConfig {
    /// Build config from the process environment.
    ///
    /// Optional:
    /// - `PORT`: default 8000
    /// - `FRONTEND_URL`: extra CORS origin, default `http://localhost:3000`
    /// - `SPINE_DEMO_TOKEN`: fixed token for the seeded demo user
    /// - `SPINE_DEMO_EMAIL`: email of the seeded demo user
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };
        Ok(Self {
            port,
            frontend_url: lookup("FRONTEND_URL").unwrap_or_else(|| LOCAL_FRONTEND_URL.to_string()),
            demo_token: lookup("SPINE_DEMO_TOKEN").filter(|t| !t.is_empty()),
            demo_email: lookup("SPINE_DEMO_EMAIL").unwrap_or_else(|| DEFAULT_DEMO_EMAIL.to_string()),
        })
    }

    /// The local dev frontend plus `FRONTEND_URL`, without duplicates.
    pub fn allowed_origins(&self) -> Vec<String> {
        let mut origins = vec![LOCAL_FRONTEND_URL.to_string()];
        if self.frontend_url != LOCAL_FRONTEND_URL {
            origins.push(self.frontend_url.clone());
        }
        origins
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults() {
        let cfg = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg.port, 8000);
        assert_eq!(cfg.frontend_url, LOCAL_FRONTEND_URL);
        assert!(cfg.demo_token.is_none());
        assert_eq!(cfg.allowed_origins(), vec![LOCAL_FRONTEND_URL.to_string()]);
    }

    #[test]
    fn frontend_url_adds_an_origin() {
        let cfg = ServerConfig::from_lookup(lookup(&[("FRONTEND_URL", "https://app.spine.ai")])).unwrap();
        assert_eq!(cfg.allowed_origins(), vec![LOCAL_FRONTEND_URL.to_string(), "https://app.spine.ai".to_string()]);
    }

    #[test]
    fn bad_port_is_rejected() {
        let err = ServerConfig::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort(ref p) if p == "eighty"));
    }

    #[test]
    fn demo_user_settings() {
        let cfg =
            ServerConfig::from_lookup(lookup(&[("SPINE_DEMO_TOKEN", "demo"), ("SPINE_DEMO_EMAIL", "me@x.io")])).unwrap();
        assert_eq!(cfg.demo_token.as_deref(), Some("demo"));
        assert_eq!(cfg.demo_email, "me@x.io");
    }
}
