//! Server configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `SHOPFLOOR_DATABASE_URL` - `PostgreSQL` connection string (falls back to
//!   the generic `DATABASE_URL`)
//!
//! ## Optional
//! - `SHOPFLOOR_HOST` - Bind address (default: 127.0.0.1)
//! - `SHOPFLOOR_PORT` - Listen port (default: 3000)
//! - `SHOPFLOOR_BASE_URL` - Public URL (default: `http://localhost:3000`);
//!   an `https` base URL turns on secure session cookies
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SHOPFLOOR_BOOTSTRAP_ADMIN_EMAIL` / `SHOPFLOOR_BOOTSTRAP_ADMIN_PASSWORD` /
//!   `SHOPFLOOR_BOOTSTRAP_ADMIN_NAME` - first-run admin account, created at
//!   startup if no admin with that email exists

use std::net::{IpAddr, SocketAddr};

use secrecy::SecretString;
use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Back-office server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// `PostgreSQL` database connection URL (contains password)
    pub database_url: SecretString,
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL
    pub base_url: String,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// First-run admin account, if configured
    pub bootstrap_admin: Option<BootstrapAdmin>,
}

/// First-run admin account created at startup when the admin table lacks it.
#[derive(Debug, Clone)]
pub struct BootstrapAdmin {
    pub email: String,
    pub name: String,
    pub password: SecretString,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let database_url = get_database_url("SHOPFLOOR_DATABASE_URL")?;
        let host = get_env_or_default("SHOPFLOOR_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("SHOPFLOOR_HOST".to_owned(), e.to_string()))?;
        let port = get_env_or_default("SHOPFLOOR_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("SHOPFLOOR_PORT".to_owned(), e.to_string()))?;
        let base_url = get_env_or_default("SHOPFLOOR_BASE_URL", "http://localhost:3000");
        let sentry_dsn = get_optional_env("SENTRY_DSN");
        let bootstrap_admin = bootstrap_admin_from_env();

        Ok(Self {
            database_url,
            host,
            port,
            base_url,
            sentry_dsn,
            bootstrap_admin,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Whether session cookies should carry the `Secure` attribute.
    #[must_use]
    pub fn secure_cookies(&self) -> bool {
        self.base_url.starts_with("https://")
    }
}

/// Get database URL with fallback to the generic `DATABASE_URL`.
fn get_database_url(primary_key: &str) -> Result<SecretString, ConfigError> {
    if let Ok(value) = std::env::var(primary_key) {
        return Ok(SecretString::from(value));
    }
    if let Ok(value) = std::env::var("DATABASE_URL") {
        return Ok(SecretString::from(value));
    }
    Err(ConfigError::MissingEnvVar(primary_key.to_owned()))
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// The bootstrap admin needs both email and password; name defaults.
fn bootstrap_admin_from_env() -> Option<BootstrapAdmin> {
    let email = get_optional_env("SHOPFLOOR_BOOTSTRAP_ADMIN_EMAIL")?;
    let password = get_optional_env("SHOPFLOOR_BOOTSTRAP_ADMIN_PASSWORD")?;
    let name = get_env_or_default("SHOPFLOOR_BOOTSTRAP_ADMIN_NAME", "Administrator");
    Some(BootstrapAdmin {
        email,
        name,
        password: SecretString::from(password),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn test_config() -> ServerConfig {
        ServerConfig {
            database_url: SecretString::from("postgres://localhost/test"),
            host: "127.0.0.1".parse().unwrap(),
            port: 3000,
            base_url: "http://localhost:3000".to_owned(),
            sentry_dsn: None,
            bootstrap_admin: None,
        }
    }

    #[test]
    fn test_socket_addr() {
        let config = test_config();
        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 3000);
    }

    #[test]
    fn test_secure_cookies_follow_base_url_scheme() {
        let mut config = test_config();
        assert!(!config.secure_cookies());
        config.base_url = "https://shop.example.com".to_owned();
        assert!(config.secure_cookies());
    }
}
