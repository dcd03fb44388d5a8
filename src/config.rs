use std::net::{Ipv4Addr, SocketAddr};

/// Only origin allowed to make cross-origin calls (the web client)
pub const ALLOWED_ORIGIN: &str = "http://localhost:3000";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("HOST is not in the correct format: {0}")]
    InvalidHost(String),
    #[error("PORT is not the correct format: {0}")]
    InvalidPort(String),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: Ipv4Addr,
    pub port: u16,
    pub database_url: String,
    pub database_max_connections: u32,
    /// Wipe and reload the demonstration tournaments at boot
    pub seed_on_startup: bool,
}

impl Config {
    /// Read settings from the environment, loading `.env` first if present
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = match lookup("HOST") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidHost(raw))?,
            None => Ipv4Addr::UNSPECIFIED,
        };

        let port = match lookup("PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => 8080,
        };

        let database_url = lookup("DATABASE_URL")
            .unwrap_or_else(|| "sqlite:tournaments.db".to_string());

        let database_max_connections = lookup("DATABASE_MAX_CONNECTIONS")
            .and_then(|v| v.parse().ok())
            .unwrap_or(5);

        let seed_on_startup = match lookup("SEED_ON_STARTUP").as_deref() {
            Some("false") | Some("FALSE") | Some("0") => false,
            _ => true,
        };

        Ok(Config {
            host,
            port,
            database_url,
            database_max_connections,
            seed_on_startup,
        })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::from((self.host, self.port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.addr(), "0.0.0.0:8080".parse::<SocketAddr>().unwrap());
        assert_eq!(config.database_url, "sqlite:tournaments.db");
        assert_eq!(config.database_max_connections, 5);
        assert!(config.seed_on_startup);
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "9000"),
            ("DATABASE_URL", "sqlite::memory:"),
            ("DATABASE_MAX_CONNECTIONS", "not-a-number"),
            ("SEED_ON_STARTUP", "false"),
        ])
        .unwrap();
        assert_eq!(config.addr(), "127.0.0.1:9000".parse::<SocketAddr>().unwrap());
        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.database_max_connections, 5);
        assert!(!config.seed_on_startup);
    }

    #[test]
    fn test_bad_port_is_rejected() {
        assert!(matches!(
            config_from(&[("PORT", "eighty")]),
            Err(ConfigError::InvalidPort(_))
        ));
        assert!(matches!(
            config_from(&[("HOST", "localhost")]),
            Err(ConfigError::InvalidHost(_))
        ));
    }
}
