//! Site configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional.
//!
//! - `SITE_HOST` - Bind address (default: 127.0.0.1)
//! - `SITE_PORT` - Listen port (default: 3000)
//! - `SITE_BASE_URL` - Public URL for the site (default: `http://localhost:3000`).
//!   An `https://` URL turns on secure session cookies.
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name (e.g. "production")
//! - `SENTRY_SAMPLE_RATE` - Error event sample rate, 0.0-1.0 (default: 1.0)
//! - `SENTRY_TRACES_SAMPLE_RATE` - Transaction sample rate, 0.0-1.0 (default: 0.0)

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use secrecy::SecretString;
use thiserror::Error;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: &str = "3000";
const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Site application configuration.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the site
    pub base_url: String,
    /// Error tracking configuration
    pub sentry: SentryConfig,
}

/// Sentry error tracking configuration.
///
/// Implements `Debug` manually to redact the DSN.
#[derive(Clone)]
pub struct SentryConfig {
    /// Sentry DSN; tracking is disabled when absent
    pub dsn: Option<SecretString>,
    /// Environment tag attached to events
    pub environment: Option<String>,
    /// Fraction of error events sent
    pub sample_rate: f32,
    /// Fraction of transactions traced
    pub traces_sample_rate: f32,
}

impl std::fmt::Debug for SentryConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SentryConfig")
            .field("dsn", &self.dsn.as_ref().map(|_| "[REDACTED]"))
            .field("environment", &self.environment)
            .field("sample_rate", &self.sample_rate)
            .field("traces_sample_rate", &self.traces_sample_rate)
            .finish()
    }
}

impl Default for SentryConfig {
    fn default() -> Self {
        Self {
            dsn: None,
            environment: None,
            sample_rate: 1.0,
            traces_sample_rate: 0.0,
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 3000,
            base_url: DEFAULT_BASE_URL.to_string(),
            sentry: SentryConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get_or = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let host = get_or("SITE_HOST", DEFAULT_HOST)
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("SITE_HOST".to_string(), e.to_string()))?;
        let port = get_or("SITE_PORT", DEFAULT_PORT)
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("SITE_PORT".to_string(), e.to_string()))?;
        let base_url = validate_base_url(get_or("SITE_BASE_URL", DEFAULT_BASE_URL))?;

        let sentry = SentryConfig {
            dsn: lookup("SENTRY_DSN")
                .filter(|dsn| !dsn.trim().is_empty())
                .map(SecretString::from),
            environment: lookup("SENTRY_ENVIRONMENT"),
            sample_rate: parse_sample_rate("SENTRY_SAMPLE_RATE", lookup("SENTRY_SAMPLE_RATE"), 1.0)?,
            traces_sample_rate: parse_sample_rate(
                "SENTRY_TRACES_SAMPLE_RATE",
                lookup("SENTRY_TRACES_SAMPLE_RATE"),
                0.0,
            )?,
        };

        Ok(Self {
            host,
            port,
            base_url,
            sentry,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Whether the site is served over HTTPS.
    #[must_use]
    pub fn is_secure(&self) -> bool {
        self.base_url.starts_with("https://")
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Require an absolute http(s) base URL and strip any trailing slash.
fn validate_base_url(value: String) -> Result<String, ConfigError> {
    if !(value.starts_with("http://") || value.starts_with("https://")) {
        return Err(ConfigError::InvalidEnvVar(
            "SITE_BASE_URL".to_string(),
            format!("must start with http:// or https:// (got {value})"),
        ));
    }
    Ok(value.trim_end_matches('/').to_string())
}

/// Parse a sample rate in `[0, 1]`, falling back to `default` when unset.
fn parse_sample_rate(key: &str, value: Option<String>, default: f32) -> Result<f32, ConfigError> {
    let Some(raw) = value else {
        return Ok(default);
    };
    let rate = raw
        .trim()
        .parse::<f32>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))?;
    if !(0.0..=1.0).contains(&rate) {
        return Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("must be between 0.0 and 1.0 (got {rate})"),
        ));
    }
    Ok(rate)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<SiteConfig, ConfigError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        SiteConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_nothing_set() {
        let config = load(&[]).unwrap();
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:3000");
        assert_eq!(config.base_url, "http://localhost:3000");
        assert!(config.sentry.dsn.is_none());
        assert!((config.sentry.sample_rate - 1.0).abs() < f32::EPSILON);
        assert!(config.sentry.traces_sample_rate.abs() < f32::EPSILON);
        assert!(!config.is_secure());
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("SITE_HOST", "0.0.0.0"),
            ("SITE_PORT", "8080"),
            ("SITE_BASE_URL", "https://rockets.example.org/"),
            ("SENTRY_TRACES_SAMPLE_RATE", "0.25"),
        ])
        .unwrap();
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:8080");
        assert_eq!(config.base_url, "https://rockets.example.org");
        assert!(config.is_secure());
        assert!((config.sentry.traces_sample_rate - 0.25).abs() < f32::EPSILON);
    }

    #[test]
    fn test_invalid_port() {
        let err = load(&[("SITE_PORT", "not-a-port")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(key, _) if key == "SITE_PORT"));
    }

    #[test]
    fn test_invalid_host() {
        assert!(load(&[("SITE_HOST", "localhost:3000")]).is_err());
    }

    #[test]
    fn test_base_url_requires_scheme() {
        let err = load(&[("SITE_BASE_URL", "rockets.example.org")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(key, _) if key == "SITE_BASE_URL"));
    }

    #[test]
    fn test_sample_rate_out_of_range() {
        assert!(load(&[("SENTRY_SAMPLE_RATE", "1.5")]).is_err());
        assert!(load(&[("SENTRY_SAMPLE_RATE", "-0.1")]).is_err());
        assert!(load(&[("SENTRY_SAMPLE_RATE", "often")]).is_err());
    }

    #[test]
    fn test_blank_dsn_disables_sentry() {
        let config = load(&[("SENTRY_DSN", "  ")]).unwrap();
        assert!(config.sentry.dsn.is_none());
    }

    #[test]
    fn test_sentry_config_debug_redacts_dsn() {
        let config = load(&[("SENTRY_DSN", "https://super-secret-key@o0.ingest.sentry.io/1")])
            .unwrap();
        let debug_output = format!("{:?}", config.sentry);
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("super-secret-key"));
    }
}
