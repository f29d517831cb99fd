//! # Store Configuration
//!
//! Settings loaded once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`CREMA_*`)
//! 2. Defaults (this file)
//!
//! Read-only after initialization, so no lock is needed.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreConfig {
    /// Currency symbol used when formatting totals
    pub currency_symbol: String,

    /// How long an add-to-cart button shows "Added!", in milliseconds
    pub feedback_ms: u64,
}

impl Default for StoreConfig {
    /// ## Default Values
    /// - Currency symbol: $
    /// - Feedback: 1 second
    fn default() -> Self {
        StoreConfig {
            currency_symbol: "$".to_string(),
            feedback_ms: 1000,
        }
    }
}

impl StoreConfig {
    /// Creates a config from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `CREMA_CURRENCY_SYMBOL`: Override currency symbol
    /// - `CREMA_FEEDBACK_MS`: Override "Added!" duration (e.g., "1500")
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Self::from_env`] with a custom variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = StoreConfig::default();

        if let Some(symbol) = lookup("CREMA_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        if let Some(raw) = lookup("CREMA_FEEDBACK_MS") {
            match raw.trim().parse::<u64>() {
                Ok(ms) => config.feedback_ms = ms,
                Err(_) => warn!(value = %raw, "ignoring invalid CREMA_FEEDBACK_MS"),
            }
        }

        config
    }

    pub fn feedback_duration(&self) -> Duration {
        Duration::from_millis(self.feedback_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = StoreConfig::from_lookup(|_| None);
        assert_eq!(config.currency_symbol, "$");
        assert_eq!(config.feedback_duration(), Duration::from_secs(1));
    }

    #[test]
    fn test_overrides() {
        let config = StoreConfig::from_lookup(lookup_from(&[
            ("CREMA_CURRENCY_SYMBOL", "€"),
            ("CREMA_FEEDBACK_MS", "1500"),
        ]));
        assert_eq!(config.currency_symbol, "€");
        assert_eq!(config.feedback_ms, 1500);
    }

    #[test]
    fn test_invalid_feedback_ms_keeps_default() {
        let config = StoreConfig::from_lookup(lookup_from(&[("CREMA_FEEDBACK_MS", "soon")]));
        assert_eq!(config.feedback_ms, 1000);
    }
}
