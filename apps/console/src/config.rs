//! # Console Configuration
//!
//! Settings loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command-line flags (`--no-pause`, `--store-name`, ...)
//! 2. Environment variables (`STOCKROOM_*`)
//! 3. Defaults (this file)
//!
//! Configuration is read-only once the menu loop starts.

use std::env;
use std::str::FromStr;

use stockroom_core::{MAX_RECORDS, MAX_TRANSACTIONS};
use stockroom_store::StoreConfig;
use thiserror::Error;

/// Banner shown above the main menu.
pub const DEFAULT_STORE_NAME: &str = "Smart Inventory Management System";

/// Console configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleConfig {
    /// Shown in the menu banner and the farewell line.
    pub store_name: String,

    /// Table capacities handed to the store.
    pub store: StoreConfig,

    /// Clear the terminal before success/error messages and screens.
    /// Default: true
    pub clear_screen: bool,

    /// Wait for Enter after each command.
    /// Default: true
    pub pause: bool,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        ConsoleConfig {
            store_name: DEFAULT_STORE_NAME.to_string(),
            store: StoreConfig::default(),
            clear_screen: true,
            pause: true,
        }
    }
}

impl ConsoleConfig {
    /// Loads configuration from the process environment.
    ///
    /// ## Environment Variables
    /// - `STOCKROOM_STORE_NAME`: Menu banner
    /// - `STOCKROOM_MAX_PRODUCTS`, `STOCKROOM_MAX_CATEGORIES`,
    ///   `STOCKROOM_MAX_SUPPLIERS`, `STOCKROOM_MAX_TRANSACTIONS`: Capacities
    /// - `STOCKROOM_CLEAR_SCREEN`: `true`/`false`
    /// - `STOCKROOM_PAUSE`: `true`/`false`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads configuration from any key lookup (tests pass a map).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let store = StoreConfig {
            max_products: parse_or(&lookup, "STOCKROOM_MAX_PRODUCTS", MAX_RECORDS)?,
            max_categories: parse_or(&lookup, "STOCKROOM_MAX_CATEGORIES", MAX_RECORDS)?,
            max_suppliers: parse_or(&lookup, "STOCKROOM_MAX_SUPPLIERS", MAX_RECORDS)?,
            max_transactions: parse_or(&lookup, "STOCKROOM_MAX_TRANSACTIONS", MAX_TRANSACTIONS)?,
        };

        Ok(ConsoleConfig {
            store_name: lookup("STOCKROOM_STORE_NAME")
                .unwrap_or_else(|| DEFAULT_STORE_NAME.to_string()),
            store,
            clear_screen: parse_or(&lookup, "STOCKROOM_CLEAR_SCREEN", true)?,
            pause: parse_or(&lookup, "STOCKROOM_PAUSE", true)?,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue(key.to_string())),
        None => Ok(default),
    }
}

/// Configuration error types.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
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
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ConsoleConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ConsoleConfig::default());
        assert_eq!(config.store.max_transactions, 200);
    }

    #[test]
    fn test_overrides() {
        let config = ConsoleConfig::from_lookup(lookup(&[
            ("STOCKROOM_STORE_NAME", "Corner Shop"),
            ("STOCKROOM_MAX_TRANSACTIONS", "10"),
            ("STOCKROOM_PAUSE", "false"),
        ]))
        .unwrap();

        assert_eq!(config.store_name, "Corner Shop");
        assert_eq!(config.store.max_transactions, 10);
        assert!(!config.pause);
        assert!(config.clear_screen);
    }

    #[test]
    fn test_invalid_values() {
        assert_eq!(
            ConsoleConfig::from_lookup(lookup(&[("STOCKROOM_MAX_PRODUCTS", "lots")])).unwrap_err(),
            ConfigError::InvalidValue("STOCKROOM_MAX_PRODUCTS".to_string())
        );
        assert!(ConsoleConfig::from_lookup(lookup(&[("STOCKROOM_PAUSE", "maybe")])).is_err());
        assert!(
            ConsoleConfig::from_lookup(lookup(&[("STOCKROOM_MAX_TRANSACTIONS", "-1")])).is_err()
        );
    }
}
