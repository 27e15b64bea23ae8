//! Application configuration.
//!
//! Configuration is loaded from environment variables with fallback to defaults.

use std::env;
use std::path::PathBuf;

use pizza_core::{OrderLimits, DEFAULT_MAX_PARTY_SIZE, DEFAULT_MAX_QUANTITY};

/// Terminal application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Directory holding the catalog file, created at startup
    pub data_dir: PathBuf,

    /// Catalog file name inside `data_dir`
    pub menu_file: String,

    /// Symbol printed in front of prices
    pub currency_symbol: String,

    /// Largest quantity accepted for one order line
    pub max_quantity: u32,

    /// Largest party that can split a bill
    pub max_party_size: u32,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// | Variable                | Default          |
    /// |-------------------------|------------------|
    /// | `PIZZA_DATA_DIR`        | `data`           |
    /// | `PIZZA_MENU_FILE`       | `pizza_menu.txt` |
    /// | `PIZZA_CURRENCY_SYMBOL` | `€`              |
    /// | `PIZZA_MAX_QUANTITY`    | `1000`           |
    /// | `PIZZA_MAX_PARTY_SIZE`  | `1000`           |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = AppConfig {
            data_dir: lookup("PIZZA_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("data")),

            menu_file: lookup("PIZZA_MENU_FILE").unwrap_or_else(|| "pizza_menu.txt".to_string()),

            currency_symbol: lookup("PIZZA_CURRENCY_SYMBOL").unwrap_or_else(|| "€".to_string()),

            max_quantity: parse_limit(&lookup, "PIZZA_MAX_QUANTITY", DEFAULT_MAX_QUANTITY)?,

            max_party_size: parse_limit(&lookup, "PIZZA_MAX_PARTY_SIZE", DEFAULT_MAX_PARTY_SIZE)?,
        };

        if config.menu_file.trim().is_empty() {
            return Err(ConfigError::InvalidValue("PIZZA_MENU_FILE".to_string()));
        }

        Ok(config)
    }

    /// Full path of the catalog file.
    pub fn menu_path(&self) -> PathBuf {
        self.data_dir.join(&self.menu_file)
    }

    /// Order limits derived from this configuration.
    pub fn order_limits(&self) -> OrderLimits {
        OrderLimits {
            max_quantity: self.max_quantity,
            max_party_size: self.max_party_size,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            data_dir: PathBuf::from("data"),
            menu_file: "pizza_menu.txt".to_string(),
            currency_symbol: "€".to_string(),
            max_quantity: DEFAULT_MAX_QUANTITY,
            max_party_size: DEFAULT_MAX_PARTY_SIZE,
        }
    }
}

fn parse_limit<F>(lookup: &F, key: &str, default: u32) -> Result<u32, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|value| *value > 0)
            .ok_or_else(|| ConfigError::InvalidValue(key.to_string())),
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
