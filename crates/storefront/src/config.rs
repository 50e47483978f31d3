//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `KRANIAN_DATA_DIR` - Directory for the persisted cart blob (default: `./data`)
//! - `KRANIAN_CURRENCY` - ISO 4217 code for catalog prices (default: `KES`)

use std::path::PathBuf;

use kranian_core::CurrencyCode;
use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Directory where the cart blob is persisted.
    pub data_dir: PathBuf,
    /// Currency used for catalog prices and cart totals.
    pub currency: CurrencyCode,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let data_dir = PathBuf::from(get_env_or_default("KRANIAN_DATA_DIR", "./data"));
        let currency = parse_currency(&get_env_or_default("KRANIAN_CURRENCY", "KES"))?;

        Ok(Self { data_dir, currency })
    }
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./data"),
            currency: CurrencyCode::KES,
        }
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Parse an ISO 4217 code into a supported currency.
fn parse_currency(value: &str) -> Result<CurrencyCode, ConfigError> {
    match value.to_ascii_uppercase().as_str() {
        "KES" => Ok(CurrencyCode::KES),
        "USD" => Ok(CurrencyCode::USD),
        "EUR" => Ok(CurrencyCode::EUR),
        "GBP" => Ok(CurrencyCode::GBP),
        other => Err(ConfigError::InvalidEnvVar(
            "KRANIAN_CURRENCY".to_string(),
            format!("unsupported currency '{other}'"),
        )),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_currency_valid() {
        assert_eq!(parse_currency("KES").unwrap(), CurrencyCode::KES);
        assert_eq!(parse_currency("usd").unwrap(), CurrencyCode::USD);
    }

    #[test]
    fn test_parse_currency_invalid() {
        let err = parse_currency("DOUBLOONS").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(_, _)));
    }

    #[test]
    fn test_default_config() {
        let config = StorefrontConfig::default();
        assert_eq!(config.data_dir, PathBuf::from("./data"));
        assert_eq!(config.currency, CurrencyCode::KES);
    }
}
