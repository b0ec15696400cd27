//! Centralized configuration management.
//!
//! Environment variables are read once, on first access to [`CONFIG`].

#[cfg(feature = "server")]
use std::sync::LazyLock;

#[cfg(feature = "server")]
use tracing::warn;

#[cfg(feature = "server")]
const DEFAULT_SECRET_KEY: &str = "secret";

/// Application configuration loaded from environment variables.
#[cfg(feature = "server")]
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// JWT signing secret (default: "secret" - CHANGE IN PRODUCTION)
    pub secret_key: String,
}

#[cfg(feature = "server")]
impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let secret_key = lookup("SECRET_KEY").unwrap_or_else(|| {
            warn!("SECRET_KEY is not set, falling back to the insecure default");
            DEFAULT_SECRET_KEY.to_string()
        });

        Self { secret_key }
    }

    /// Get the JWT secret key.
    pub fn secret_key(&self) -> &str {
        &self.secret_key
    }
}

/// Global application configuration singleton.
#[cfg(feature = "server")]
pub static CONFIG: LazyLock<AppConfig> = LazyLock::new(AppConfig::from_env);
