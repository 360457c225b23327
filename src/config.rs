use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}

/// Deployment environment; decides how much fault detail reaches callers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl FromStr for Environment {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "production" | "prod" => Ok(Environment::Production),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Plain,
    Json,
}

impl FromStr for LogFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "plain" | "text" => Ok(LogFormat::Plain),
            "json" => Ok(LogFormat::Json),
            _ => Err(()),
        }
    }
}

/// Process configuration, read once at startup
///
/// | Variable     | Default      |
/// |--------------|--------------|
/// | `HOST`       | `0.0.0.0`    |
/// | `PORT`       | `3000`       |
/// | `APP_ENV`    | `production` |
/// | `LOG_FORMAT` | `plain`      |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,
    pub environment: Environment,
    pub log_format: LogFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 3000,
            environment: Environment::Production,
            log_format: LogFormat::Plain,
        }
    }
}

impl AppConfig {
    /// Reads the process environment (after `.env` has been loaded)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Ok(Self {
            host: parse(&lookup, "HOST", defaults.host)?,
            port: parse(&lookup, "PORT", defaults.port)?,
            environment: parse(&lookup, "APP_ENV", defaults.environment)?,
            log_format: parse(&lookup, "LOG_FORMAT", defaults.log_format)?,
        })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn is_development(&self) -> bool {
        self.environment == Environment::Development
    }
}

fn parse<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(value) if value.trim().is_empty() => Ok(default),
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

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();

        assert_eq!(config, AppConfig::default());
        assert_eq!(config.bind_addr().to_string(), "0.0.0.0:3000");
    }

    #[test]
    fn reads_every_variable() {
        let config = AppConfig::from_lookup(lookup(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("APP_ENV", "Development"),
            ("LOG_FORMAT", "json"),
        ]))
        .unwrap();

        assert_eq!(config.bind_addr().to_string(), "127.0.0.1:8080");
        assert!(config.is_development());
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn invalid_port_is_reported() {
        let err = AppConfig::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();

        assert_eq!(
            err,
            ConfigError::InvalidValue {
                key: "PORT",
                value: "eighty".to_string()
            }
        );
    }

    #[test]
    fn unknown_environment_is_reported() {
        assert!(AppConfig::from_lookup(lookup(&[("APP_ENV", "staging")])).is_err());
    }
}
