//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional.
//!
//! - `STOREFRONT_HOST` - Bind address (default: 127.0.0.1)
//! - `STOREFRONT_PORT` - Listen port (default: 3000)
//! - `STOREFRONT_CATALOG_PATH` - Catalog JSON file (default: bundled demo catalog)
//! - `STOREFRONT_STATIC_DIR` - Directory served under `/static` (default: this crate's `static/`)
//! - `STOREFRONT_COLLECTION_TITLE` - Heading above the collection grid (default: Ring Collection)
//! - `STOREFRONT_UNAVAILABLE_SIZES` - Comma-separated sizes that cannot be picked (default: 7)
//! - `STOREFRONT_INITIAL_SIZE_INDEX` - Size chip active on load (default: 2)
//! - `STOREFRONT_INITIAL_SWATCH_INDEX` - Swatch active on load (default: 0)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use lexic_core::Size;
use thiserror::Error;

use crate::widget::{DEFAULT_COLLECTION_TITLE, SelectionPolicy};

/// Static assets shipped with this crate, independent of the working directory.
pub const DEFAULT_STATIC_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/static");

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Catalog file; `None` uses the bundled demo catalog
    pub catalog_path: Option<PathBuf>,
    /// Static asset directory
    pub static_dir: PathBuf,
    /// Heading above the collection grid
    pub collection_title: String,
    /// Size availability and initial selection
    pub selection: SelectionPolicy,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment name
    pub sentry_environment: Option<String>,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// Empty values are treated as unset.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let env = Env(lookup);

        let host = env.parsed("STOREFRONT_HOST", "127.0.0.1")?;
        let port = env.parsed("STOREFRONT_PORT", "3000")?;
        let catalog_path = env.optional("STOREFRONT_CATALOG_PATH").map(PathBuf::from);
        let static_dir = PathBuf::from(env.or_default("STOREFRONT_STATIC_DIR", DEFAULT_STATIC_DIR));
        let collection_title =
            env.or_default("STOREFRONT_COLLECTION_TITLE", DEFAULT_COLLECTION_TITLE);

        let unavailable_sizes = parse_sizes(
            "STOREFRONT_UNAVAILABLE_SIZES",
            &env.raw("STOREFRONT_UNAVAILABLE_SIZES").unwrap_or_else(|| "7".to_string()),
        )?;
        let selection = SelectionPolicy::new(
            unavailable_sizes,
            env.parsed("STOREFRONT_INITIAL_SIZE_INDEX", "2")?,
            env.parsed("STOREFRONT_INITIAL_SWATCH_INDEX", "0")?,
        );

        Ok(Self {
            host,
            port,
            catalog_path,
            static_dir,
            collection_title,
            selection,
            sentry_dsn: env.optional("SENTRY_DSN"),
            sentry_environment: env.optional("SENTRY_ENVIRONMENT"),
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Variable lookup with the defaulting and parsing rules shared by all keys.
struct Env<F>(F);

impl<F: Fn(&str) -> Option<String>> Env<F> {
    /// Raw value, even if empty.
    fn raw(&self, key: &str) -> Option<String> {
        (self.0)(key)
    }

    /// Non-empty value.
    fn optional(&self, key: &str) -> Option<String> {
        self.raw(key).filter(|value| !value.trim().is_empty())
    }

    fn or_default(&self, key: &str, default: &str) -> String {
        self.optional(key).unwrap_or_else(|| default.to_string())
    }

    fn parsed<T>(&self, key: &str, default: &str) -> Result<T, ConfigError>
    where
        T: std::str::FromStr,
        T::Err: std::fmt::Display,
    {
        self.or_default(key, default)
            .trim()
            .parse::<T>()
            .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
    }
}

/// Parse a comma-separated size list. An empty list is allowed.
fn parse_sizes(key: &str, value: &str) -> Result<Vec<Size>, ConfigError> {
    value
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<Size>()
                .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
        })
        .collect()
}
