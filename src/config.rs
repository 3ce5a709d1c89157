use std::time::Duration;

use thiserror::Error;

pub const DEFAULT_API_KEY: &str = "RAHASIA";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} no está definido")]
    Missing(&'static str),

    #[error("valor inválido para {key}: {value:?}")]
    Invalid { key: &'static str, value: String },

    #[error("DB_MIN_CONNECTIONS ({min}) no puede superar DB_MAX_CONNECTIONS ({max})")]
    PoolBounds { min: u32, max: u32 },
}

// Límites del pool de conexiones
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolConfig {
    pub max_connections: u32,
    pub min_connections: u32,
    pub max_lifetime: Duration,
    pub idle_timeout: Duration,
    pub acquire_timeout: Duration,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            max_connections: 20,
            min_connections: 5,
            max_lifetime: Duration::from_secs(60 * 60),
            idle_timeout: Duration::from_secs(10 * 60),
            acquire_timeout: Duration::from_secs(30),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub api_key: String,
    pub pool: PoolConfig,
}

impl Config {
    // Leemos todo del entorno (el .env ya fue cargado por dotenvy en main)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let defaults = PoolConfig::default();
        let pool = PoolConfig {
            max_connections: parse_or(&lookup, "DB_MAX_CONNECTIONS", defaults.max_connections)?,
            min_connections: parse_or(&lookup, "DB_MIN_CONNECTIONS", defaults.min_connections)?,
            max_lifetime: secs_or(&lookup, "DB_MAX_LIFETIME_SECS", defaults.max_lifetime)?,
            idle_timeout: secs_or(&lookup, "DB_IDLE_TIMEOUT_SECS", defaults.idle_timeout)?,
            acquire_timeout: secs_or(&lookup, "DB_ACQUIRE_TIMEOUT_SECS", defaults.acquire_timeout)?,
        };

        if pool.max_connections == 0 {
            return Err(ConfigError::Invalid {
                key: "DB_MAX_CONNECTIONS",
                value: "0".to_string(),
            });
        }
        if pool.min_connections > pool.max_connections {
            return Err(ConfigError::PoolBounds {
                min: pool.min_connections,
                max: pool.max_connections,
            });
        }

        Ok(Self {
            database_url,
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: parse_or(&lookup, "PORT", 3000)?,
            api_key: lookup("API_KEY").unwrap_or_else(|| DEFAULT_API_KEY.to_string()),
            pool,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
        None => Ok(default),
    }
}

fn secs_or<F>(lookup: &F, key: &'static str, default: Duration) -> Result<Duration, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    parse_or(lookup, key, default.as_secs()).map(Duration::from_secs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_only_database_url_is_set() {
        let config = config_from(&[("DATABASE_URL", "sqlite::memory:")]).unwrap();

        assert_eq!(config.port, 3000);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.api_key, DEFAULT_API_KEY);
        assert_eq!(config.pool, PoolConfig::default());
    }

    #[test]
    fn database_url_is_required() {
        assert_eq!(
            config_from(&[]).unwrap_err(),
            ConfigError::Missing("DATABASE_URL")
        );
        assert_eq!(
            config_from(&[("DATABASE_URL", "  ")]).unwrap_err(),
            ConfigError::Missing("DATABASE_URL")
        );
    }

    #[test]
    fn non_numeric_values_are_rejected() {
        let err = config_from(&[("DATABASE_URL", "sqlite::memory:"), ("PORT", "abc")]).unwrap_err();
        assert_eq!(
            err,
            ConfigError::Invalid {
                key: "PORT",
                value: "abc".to_string()
            }
        );
    }

    #[test]
    fn pool_overrides_are_read() {
        let config = config_from(&[
            ("DATABASE_URL", "postgres://localhost/categories"),
            ("API_KEY", "s3cret"),
            ("DB_MAX_CONNECTIONS", "8"),
            ("DB_MIN_CONNECTIONS", "2"),
            ("DB_MAX_LIFETIME_SECS", "120"),
            ("DB_IDLE_TIMEOUT_SECS", "30"),
            ("DB_ACQUIRE_TIMEOUT_SECS", "5"),
        ])
        .unwrap();

        assert_eq!(config.api_key, "s3cret");
        assert_eq!(config.pool.max_connections, 8);
        assert_eq!(config.pool.min_connections, 2);
        assert_eq!(config.pool.max_lifetime, Duration::from_secs(120));
        assert_eq!(config.pool.idle_timeout, Duration::from_secs(30));
        assert_eq!(config.pool.acquire_timeout, Duration::from_secs(5));
    }

    #[test]
    fn min_connections_cannot_exceed_max() {
        let err = config_from(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("DB_MAX_CONNECTIONS", "2"),
            ("DB_MIN_CONNECTIONS", "3"),
        ])
        .unwrap_err();
        assert_eq!(err, ConfigError::PoolBounds { min: 3, max: 2 });
    }
}
