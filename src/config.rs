//! Server configuration loaded from environment variables.

use crate::error::ConfigError;
use std::str::FromStr;

pub const DEFAULT_DB_URI: &str = "sqlite://app.db";

/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Connection string for the relational store (`DB_URI`).
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub max_connections: u32,
    /// Upper bound on request body size in bytes.
    pub body_limit_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DB_URI.into(),
            host: "127.0.0.1".into(),
            port: 5555,
            max_connections: 5,
            body_limit_bytes: 64 * 1024,
        }
    }
}

impl ServerConfig {
    /// | Env Var              | Default           |
    /// |----------------------|-------------------|
    /// | `DB_URI`             | `sqlite://app.db` |
    /// | `HOST`               | `127.0.0.1`       |
    /// | `PORT`               | `5555`            |
    /// | `DB_MAX_CONNECTIONS` | `5`               |
    /// | `BODY_LIMIT_BYTES`   | `65536`           |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Ok(Self {
            database_url: lookup("DB_URI").unwrap_or(defaults.database_url),
            host: lookup("HOST").unwrap_or(defaults.host),
            port: parse_or("PORT", lookup("PORT"), defaults.port)?,
            max_connections: parse_or(
                "DB_MAX_CONNECTIONS",
                lookup("DB_MAX_CONNECTIONS"),
                defaults.max_connections,
            )?,
            body_limit_bytes: parse_or(
                "BODY_LIMIT_BYTES",
                lookup("BODY_LIMIT_BYTES"),
                defaults.body_limit_bytes,
            )?,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<T: FromStr>(key: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { key, value }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.database_url, DEFAULT_DB_URI);
        assert_eq!(config.port, 5555);
        assert_eq!(config.bind_addr(), "127.0.0.1:5555");
    }

    #[test]
    fn env_overrides() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("DB_URI", "sqlite://other.db"),
            ("PORT", "8080"),
            ("DB_MAX_CONNECTIONS", "2"),
        ]))
        .unwrap();
        assert_eq!(config.database_url, "sqlite://other.db");
        assert_eq!(config.port, 8080);
        assert_eq!(config.max_connections, 2);
    }

    #[test]
    fn invalid_port_is_rejected() {
        let err = ServerConfig::from_lookup(lookup_from(&[("PORT", "http")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key: "PORT", .. }));
    }
}
