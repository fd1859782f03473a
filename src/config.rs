//! Configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `STORE_HOST` - Bind address (default: 0.0.0.0)
//! - `STORE_PORT` - Listen port (default: 3001)
//! - `STORE_CATALOG_PATH` - JSON file to load the catalog from instead of
//!   the built-in list
//! - `STORE_STATIC_DIR` - Directory to serve under `/static`
//! - `STORE_API_URL` - Base URL the client side talks to
//!   (default: <http://localhost:3001>)

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use thiserror::Error;

pub const DEFAULT_API_URL: &str = "http://localhost:3001";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Optional catalog file overriding the built-in product list
    pub catalog_path: Option<PathBuf>,
    /// Optional directory of static assets served under `/static`
    pub static_dir: Option<PathBuf>,
}

impl Config {
    /// Load configuration from environment variables. Loads `.env` first if
    /// present.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();

        let host = parse_env_or("STORE_HOST", "0.0.0.0")?;
        let port = parse_env_or("STORE_PORT", "3001")?;
        let catalog_path = get_optional_env("STORE_CATALOG_PATH").map(PathBuf::from);
        let static_dir = get_optional_env("STORE_STATIC_DIR").map(PathBuf::from);

        Ok(Self {
            host,
            port,
            catalog_path,
            static_dir,
        })
    }

    /// Returns the socket address for binding the server.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::from([0, 0, 0, 0]),
            port: 3001,
            catalog_path: None,
            static_dir: None,
        }
    }
}

/// Base URL for the storefront API, used by the client side.
pub fn api_base_url() -> String {
    get_optional_env("STORE_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string())
}

fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

fn parse_env_or<T>(key: &str, default: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let raw = std::env::var(key).unwrap_or_else(|_| default.to_string());
    raw.parse()
        .map_err(|e: T::Err| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_socket_addr() {
        let addr = Config::default().socket_addr();
        assert_eq!(addr.ip().to_string(), "0.0.0.0");
        assert_eq!(addr.port(), 3001);
    }

    #[test]
    fn test_parse_env_or_uses_default_when_unset() {
        let port: u16 = parse_env_or("PORT_VAR_THAT_IS_NEVER_SET", "3001").unwrap();
        assert_eq!(port, 3001);
    }

    #[test]
    fn test_parse_env_or_rejects_garbage_default() {
        let result: Result<u16, _> = parse_env_or("PORT_VAR_THAT_IS_NEVER_SET", "not-a-port");
        assert!(matches!(result, Err(ConfigError::InvalidEnvVar(_, _))));
    }
}
