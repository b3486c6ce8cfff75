//! Server settings read from the environment (after `.env` is loaded by the binary).

use crate::error::ConfigError;
use std::collections::HashMap;
use std::str::FromStr;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://app.db";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub database_url: String,
    pub bind_addr: String,
    pub max_connections: u32,
    pub max_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.into(),
            bind_addr: DEFAULT_BIND_ADDR.into(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

impl ServerConfig {
    /// Reads `DATABASE_URL`, `BIND_ADDR`, `DB_MAX_CONNECTIONS` and `MAX_BODY_BYTES`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(&std::env::vars().collect())
    }

    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Ok(Self {
            database_url: non_empty(vars, "DATABASE_URL").unwrap_or(defaults.database_url),
            bind_addr: non_empty(vars, "BIND_ADDR").unwrap_or(defaults.bind_addr),
            max_connections: parse_var(vars, "DB_MAX_CONNECTIONS")?.unwrap_or(defaults.max_connections),
            max_body_bytes: parse_var(vars, "MAX_BODY_BYTES")?.unwrap_or(defaults.max_body_bytes),
        })
    }
}

fn non_empty(vars: &HashMap<String, String>, key: &str) -> Option<String> {
    vars.get(key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_var<T: FromStr>(vars: &HashMap<String, String>, key: &'static str) -> Result<Option<T>, ConfigError> {
    match non_empty(vars, key) {
        None => Ok(None),
        Some(raw) => raw
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue { key, value: raw }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn falls_back_to_defaults() {
        let cfg = ServerConfig::from_vars(&HashMap::new()).unwrap();
        assert_eq!(cfg.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(cfg.bind_addr, DEFAULT_BIND_ADDR);
        assert_eq!(cfg.max_connections, DEFAULT_MAX_CONNECTIONS);
        assert_eq!(cfg.max_body_bytes, DEFAULT_MAX_BODY_BYTES);
    }

    #[test]
    fn reads_overrides() {
        let cfg = ServerConfig::from_vars(&vars(&[
            ("DATABASE_URL", "sqlite://school.db"),
            ("BIND_ADDR", "0.0.0.0:8080"),
            ("DB_MAX_CONNECTIONS", "10"),
            ("MAX_BODY_BYTES", " 2048 "),
        ]))
        .unwrap();
        assert_eq!(cfg.database_url, "sqlite://school.db");
        assert_eq!(cfg.bind_addr, "0.0.0.0:8080");
        assert_eq!(cfg.max_connections, 10);
        assert_eq!(cfg.max_body_bytes, 2048);
    }

    #[test]
    fn blank_values_use_defaults() {
        let cfg = ServerConfig::from_vars(&vars(&[("DATABASE_URL", "  ")])).unwrap();
        assert_eq!(cfg.database_url, DEFAULT_DATABASE_URL);
    }

    #[test]
    fn rejects_non_numeric_pool_size() {
        let err = ServerConfig::from_vars(&vars(&[("DB_MAX_CONNECTIONS", "many")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key: "DB_MAX_CONNECTIONS", .. }));
    }
}
