//! Service settings loaded from the environment.

use crate::error::ConfigError;
use std::str::FromStr;

/// Server configuration loaded from environment variables.
///
/// | Env Var                         | Default                            |
/// |---------------------------------|------------------------------------|
/// | `DATABASE_URL`                  | required                           |
/// | `HOST`                          | `0.0.0.0`                          |
/// | `PORT`                          | `1000`                             |
/// | `CORS_ORIGIN`                   | `https://leysly-mendoza.github.io` |
/// | `DATABASE_MAX_CONNECTIONS`      | `5`                                |
/// | `DATABASE_ACQUIRE_TIMEOUT_SECS` | `5`                                |
/// | `BODY_LIMIT_BYTES`              | `65536`                            |
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    /// The single origin allowed by CORS.
    pub cors_origin: String,
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
    pub body_limit_bytes: usize,
}

pub const DEFAULT_CORS_ORIGIN: &str = "https://leysly-mendoza.github.io";

impl ServiceConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;
        Ok(ServiceConfig {
            database_url,
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".into()),
            port: parsed(&lookup, "PORT", 1000)?,
            cors_origin: lookup("CORS_ORIGIN").unwrap_or_else(|| DEFAULT_CORS_ORIGIN.into()),
            max_connections: parsed(&lookup, "DATABASE_MAX_CONNECTIONS", 5)?,
            acquire_timeout_secs: parsed(&lookup, "DATABASE_ACQUIRE_TIMEOUT_SECS", 5)?,
            body_limit_bytes: parsed(&lookup, "BODY_LIMIT_BYTES", 64 * 1024)?,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parsed<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn from(pairs: &[(&str, &str)]) -> Result<ServiceConfig, ConfigError> {
        let env: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        ServiceConfig::from_lookup(|k| env.get(k).cloned())
    }

    #[test]
    fn defaults_apply_when_only_database_url_is_set() {
        let cfg = from(&[("DATABASE_URL", "postgres://localhost/personajes")]).unwrap();
        assert_eq!(cfg.port, 1000);
        assert_eq!(cfg.bind_addr(), "0.0.0.0:1000");
        assert_eq!(cfg.cors_origin, DEFAULT_CORS_ORIGIN);
        assert_eq!(cfg.max_connections, 5);
        assert_eq!(cfg.acquire_timeout_secs, 5);
    }

    #[test]
    fn database_url_is_required() {
        assert!(matches!(from(&[]), Err(ConfigError::Missing("DATABASE_URL"))));
    }

    #[test]
    fn bad_numbers_name_the_variable() {
        let err = from(&[("DATABASE_URL", "postgres://x"), ("PORT", "http")]).unwrap_err();
        assert_eq!(err.to_string(), "invalid value for PORT: 'http'");
    }
}
