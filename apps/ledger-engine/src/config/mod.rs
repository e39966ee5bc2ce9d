//! Configuration module for the ledger engine.
//!
//! Provides configuration loading, validation, and environment variable
//! interpolation.
//!
//! # Usage
//!
//! ```rust,ignore
//! use ledger_engine::config::load_config;
//!
//! // Load from default path (config.yaml)
//! let config = load_config(None)?;
//!
//! // Load from custom path
//! let config = load_config(Some("custom/config.yaml"))?;
//! ```

mod conversion;
mod observability;
mod seed;
mod server;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use conversion::ConversionConfig;
pub use observability::{LoggingConfig, ObservabilityConfig};
pub use seed::{SeedAccount, SeedConfig};
pub use server::ServerConfig;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        /// Path to the config file.
        path: String,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// Failed to parse YAML configuration.
    #[error("Failed to parse config YAML: {0}")]
    ParseError(#[from] serde_yaml_bw::Error),

    /// Configuration validation failed.
    #[error("Config validation failed: {0}")]
    ValidationError(String),
}

/// Root configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Currency conversion configuration.
    #[serde(default)]
    pub conversion: ConversionConfig,
    /// Observability configuration.
    #[serde(default)]
    pub observability: ObservabilityConfig,
    /// Startup seed data.
    #[serde(default)]
    pub seed: SeedConfig,
}

/// Load configuration from a YAML file with environment variable interpolation.
///
/// # Arguments
///
/// * `path` - Optional path to the config file. Defaults to "config.yaml".
///
/// # Errors
///
/// Returns a `ConfigError` if the file cannot be read, parsed, or validated.
pub fn load_config(path: Option<&str>) -> Result<Config, ConfigError> {
    let path = path.unwrap_or("config.yaml");

    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_string(),
        source: e,
    })?;

    let interpolated = interpolate_env_vars(&contents);
    let config: Config = serde_yaml_bw::from_str(&interpolated)?;
    validate_config(&config)?;

    Ok(config)
}

/// Load configuration from a YAML string (useful for testing).
///
/// # Errors
///
/// Returns a `ConfigError` if the YAML cannot be parsed or validated.
pub fn load_config_from_string(yaml: &str) -> Result<Config, ConfigError> {
    let interpolated = interpolate_env_vars(yaml);
    let config: Config = serde_yaml_bw::from_str(&interpolated)?;
    validate_config(&config)?;
    Ok(config)
}

/// Interpolate environment variables in a string.
///
/// Supports both `${VAR}` and `${VAR:-default}` syntax.
#[allow(clippy::expect_used)] // Regex is compile-time constant; expect() is safe here
fn interpolate_env_vars(input: &str) -> String {
    use std::sync::OnceLock;

    static ENV_VAR_REGEX: OnceLock<regex::Regex> = OnceLock::new();

    let mut result = input.to_string();

    let re = ENV_VAR_REGEX.get_or_init(|| {
        regex::Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)(?::-([^}]*))?\}")
            .expect("env var regex is valid")
    });

    for cap in re.captures_iter(input) {
        let Some(full_match) = cap.get(0) else {
            continue;
        };
        let Some(var_match) = cap.get(1) else {
            continue;
        };
        let full_match = full_match.as_str();
        let var_name = var_match.as_str();
        let default_value = cap.get(2).map(|m| m.as_str());

        let value = match std::env::var(var_name) {
            Ok(v) if !v.is_empty() => v,
            _ => default_value.map_or_else(String::new, str::to_string),
        };

        result = result.replace(full_match, &value);
    }

    result
}

/// Validate configuration values.
fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.conversion.usd_inr <= Decimal::ZERO {
        return Err(ConfigError::ValidationError(
            "conversion.usd_inr must be positive".to_string(),
        ));
    }

    for account in &config.seed.accounts {
        if account.id.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "seed.accounts entries must have a non-empty id".to_string(),
            ));
        }
        if account.balance < Decimal::ZERO {
            return Err(ConfigError::ValidationError(format!(
                "seed account '{}' must not start with a negative balance",
                account.id
            )));
        }
    }

    let valid_formats = ["json", "pretty"];
    if !valid_formats.contains(&config.observability.logging.format.as_str()) {
        return Err(ConfigError::ValidationError(format!(
            "observability.logging.format must be one of: {valid_formats:?}"
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn default_config_is_valid() {
        let config = Config::default();
        assert_eq!(config.server.http_port, 8080);
        assert_eq!(config.conversion.usd_inr, dec!(83.10));
        assert_eq!(config.observability.logging.format, "json");
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn load_minimal_config() {
        let yaml = r"
server:
  http_port: 9090
";
        let config = match load_config_from_string(yaml) {
            Ok(c) => c,
            Err(e) => panic!("should load minimal config: {e}"),
        };
        assert_eq!(config.server.http_port, 9090);
        assert_eq!(config.conversion.usd_inr, dec!(83.10));
    }

    #[test]
    fn load_full_config() {
        let yaml = r#"
server:
  http_port: 8080
  bind_address: "127.0.0.1"

conversion:
  usd_inr: "84.25"

observability:
  logging:
    level: "debug"
    format: "pretty"

seed:
  accounts:
    - id: "trader@example.com"
      balance: "100000"
  symbols:
    - RELIANCE
    - INFY
    - AAPL
"#;
        let config = match load_config_from_string(yaml) {
            Ok(c) => c,
            Err(e) => panic!("should load full config: {e}"),
        };
        assert_eq!(config.server.bind_address, "127.0.0.1");
        assert_eq!(config.conversion.usd_inr, dec!(84.25));
        assert_eq!(config.observability.logging.level, "debug");
        assert_eq!(config.seed.accounts.len(), 1);
        assert_eq!(config.seed.symbols.len(), 3);
    }

    #[test]
    fn env_var_with_default_when_missing() {
        let input = "level: ${LEDGER_CONFIG_TEST_NONEXISTENT_VAR:-info}";
        let result = interpolate_env_vars(input);
        assert_eq!(result, "level: info");
    }

    #[test]
    #[expect(clippy::literal_string_with_formatting_args)] // ${...} is env var syntax, not format args
    fn env_var_with_default_uses_existing() {
        // PATH should always exist
        let input = "path: ${PATH:-default}";
        let result = interpolate_env_vars(input);
        assert_ne!(result, "path: default");
        assert!(result.starts_with("path: "));
    }

    #[test]
    fn env_var_without_default_becomes_empty() {
        let input = "key: ${LEDGER_CONFIG_TEST_UNLIKELY_TO_EXIST}";
        let result = interpolate_env_vars(input);
        assert_eq!(result, "key: ");
    }

    #[test]
    fn validation_rejects_non_positive_rate() {
        let yaml = r#"
conversion:
  usd_inr: "0"
"#;
        let Err(err) = load_config_from_string(yaml) else {
            panic!("expected error for zero rate");
        };
        assert!(err.to_string().contains("usd_inr"));
    }

    #[test]
    fn validation_rejects_negative_seed_balance() {
        let yaml = r#"
seed:
  accounts:
    - id: "trader@example.com"
      balance: "-5"
"#;
        let Err(err) = load_config_from_string(yaml) else {
            panic!("expected error for negative seed balance");
        };
        assert!(err.to_string().contains("negative balance"));
    }

    #[test]
    fn validation_rejects_unknown_log_format() {
        let yaml = r#"
observability:
  logging:
    format: "xml"
"#;
        let Err(err) = load_config_from_string(yaml) else {
            panic!("expected error for unknown log format");
        };
        assert!(err.to_string().contains("format"));
    }
}
