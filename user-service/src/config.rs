//! Service configuration loaded from environment variables.
//!
//! - `USERS_API_HOST` - Bind address (default: 0.0.0.0)
//! - `USERS_API_PORT` - Listen port (default: 3001)
//! - `USERS_API_PREFIX` - Path prefix the API is nested under (default: none)

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use thiserror::Error;

pub const DEFAULT_PORT: u16 = 3001;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    Invalid(String, String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    /// Empty, or a path like `/v1` with no trailing slash
    pub route_prefix: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            route_prefix: String::new(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup, so tests need not touch the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(host) = lookup("USERS_API_HOST") {
            config.host = host
                .parse()
                .map_err(|e| ConfigError::Invalid("USERS_API_HOST".into(), format!("{e}")))?;
        }

        if let Some(port) = lookup("USERS_API_PORT") {
            config.port = port
                .parse()
                .map_err(|e| ConfigError::Invalid("USERS_API_PORT".into(), format!("{e}")))?;
        }

        if let Some(prefix) = lookup("USERS_API_PREFIX") {
            config.route_prefix = normalize_prefix(&prefix)?;
        }

        Ok(config)
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn normalize_prefix(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Ok(String::new());
    }
    if !trimmed.starts_with('/') {
        return Err(ConfigError::Invalid(
            "USERS_API_PREFIX".into(),
            "prefix must start with '/'".into(),
        ));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.socket_addr().port(), 3001);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("USERS_API_HOST", "127.0.0.1"),
            ("USERS_API_PORT", "8080"),
            ("USERS_API_PREFIX", "/Prod/"),
        ]))
        .unwrap();

        assert_eq!(config.socket_addr(), "127.0.0.1:8080".parse().unwrap());
        assert_eq!(config.route_prefix, "/Prod");
    }

    #[test]
    fn test_invalid_values() {
        let err = Config::from_lookup(lookup_from(&[("USERS_API_PORT", "http")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(var, _) if var == "USERS_API_PORT"));

        let err = Config::from_lookup(lookup_from(&[("USERS_API_PREFIX", "v1")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(var, _) if var == "USERS_API_PREFIX"));
    }

    #[test]
    fn test_slash_prefix_means_none() {
        let config = Config::from_lookup(lookup_from(&[("USERS_API_PREFIX", "/")])).unwrap();
        assert_eq!(config.route_prefix, "");
    }
}
