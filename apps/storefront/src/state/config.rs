//! # Configuration State
//!
//! Store settings and pricing constants, loaded once at session start.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`SHOP_*`)
//! 2. Config file (`storefront.toml`)
//! 3. Defaults (this file)
//!
//! ## Config File Format
//! ```toml
//! store_name = "ShopApp"
//! currency_code = "USD"
//! currency_symbol = "$"
//! currency_decimals = 2
//! shipping_cents = 999
//! tax_rate_bps = 800
//! ```
//!
//! Configuration is read-only after loading, so no mutex is needed.

use std::path::Path;

use serde::{Deserialize, Serialize};
use shop_core::validation::{parse_tax_percentage, validate_price, validate_tax_rate_bps};
use shop_core::{
    Money, Pricing, TaxRate, ValidationError, DEFAULT_SHIPPING_CENTS, DEFAULT_TAX_RATE_BPS,
};
use tracing::{debug, warn};
use ts_rs::TS;

use crate::error::{ConfigError, ConfigResult};

/// Environment variable names.
pub const ENV_STORE_NAME: &str = "SHOP_STORE_NAME";
pub const ENV_SHIPPING_CENTS: &str = "SHOP_SHIPPING_CENTS";
pub const ENV_TAX_RATE: &str = "SHOP_TAX_RATE";

/// Most decimal places any supported currency displays.
pub const MAX_CURRENCY_DECIMALS: u8 = 4;

/// Session configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ConfigState {
    /// Store name shown in the home header
    pub store_name: String,

    /// Currency code (ISO 4217)
    pub currency_code: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Number of decimal places for currency
    pub currency_decimals: u8,

    /// Flat shipping fee in cents
    pub shipping_cents: i64,

    /// Tax rate in basis points, e.g. 800 = 8%
    pub tax_rate_bps: u32,
}

/// Partial config as found in a TOML file. Missing keys keep their defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    store_name: Option<String>,
    currency_code: Option<String>,
    currency_symbol: Option<String>,
    currency_decimals: Option<u8>,
    shipping_cents: Option<i64>,
    tax_rate_bps: Option<u32>,
}

impl Default for ConfigState {
    /// Development defaults: "ShopApp", USD, $9.99 shipping, 8% tax.
    fn default() -> Self {
        ConfigState {
            store_name: "ShopApp".to_string(),
            currency_code: "USD".to_string(),
            currency_symbol: "$".to_string(),
            currency_decimals: 2,
            shipping_cents: DEFAULT_SHIPPING_CENTS,
            tax_rate_bps: DEFAULT_TAX_RATE_BPS,
        }
    }
}

impl ConfigState {
    /// Defaults plus environment overrides.
    ///
    /// Unparseable environment values are logged and ignored.
    pub fn from_env() -> Self {
        ConfigState::default().with_overrides(|key| std::env::var(key).ok())
    }

    /// Parses a TOML document on top of the defaults and validates it.
    pub fn from_toml_str(raw: &str) -> ConfigResult<Self> {
        let file: ConfigFile = toml::from_str(raw)?;
        let config = ConfigState::default().merge(file);
        config.validate()?;
        Ok(config)
    }

    /// Full load: defaults, then the optional TOML file, then environment.
    pub fn load(path: Option<&Path>) -> ConfigResult<Self> {
        let base = match path {
            Some(path) => {
                let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                })?;
                debug!(path = %path.display(), "Loaded config file");
                ConfigState::from_toml_str(&raw)?
            }
            None => ConfigState::default(),
        };

        let config = base.with_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Applies `SHOP_*` overrides read through `lookup`.
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(store_name) = lookup(ENV_STORE_NAME) {
            self.store_name = store_name;
        }

        if let Some(raw) = lookup(ENV_SHIPPING_CENTS) {
            match raw.trim().parse::<i64>() {
                Ok(cents) if cents >= 0 => self.shipping_cents = cents,
                _ => warn!(value = %raw, "Ignoring invalid {}", ENV_SHIPPING_CENTS),
            }
        }

        if let Some(raw) = lookup(ENV_TAX_RATE) {
            match parse_tax_percentage(&raw) {
                Ok(rate) => self.tax_rate_bps = rate.bps(),
                Err(e) => warn!(value = %raw, error = %e, "Ignoring invalid {}", ENV_TAX_RATE),
            }
        }

        self
    }

    /// Checks pricing and display values are in range.
    pub fn validate(&self) -> ConfigResult<()> {
        validate_price("shipping", self.shipping())?;
        validate_tax_rate_bps(self.tax_rate_bps)?;
        if self.currency_decimals > MAX_CURRENCY_DECIMALS {
            return Err(ValidationError::OutOfRange {
                field: "currency_decimals".to_string(),
                min: 0,
                max: MAX_CURRENCY_DECIMALS as i64,
            }
            .into());
        }
        Ok(())
    }

    pub fn shipping(&self) -> Money {
        Money::from_cents(self.shipping_cents)
    }

    pub fn tax_rate(&self) -> TaxRate {
        TaxRate::from_bps(self.tax_rate_bps)
    }

    /// Pricing inputs for `Ledger::summarize`.
    pub fn pricing(&self) -> Pricing {
        Pricing::new(self.shipping(), self.tax_rate())
    }

    /// Formats a cent amount as a currency string.
    ///
    /// ## Example
    /// ```rust
    /// use storefront::state::ConfigState;
    ///
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_currency(62555), "$625.55");
    /// ```
    pub fn format_currency(&self, cents: i64) -> String {
        let decimals = self.currency_decimals.min(MAX_CURRENCY_DECIMALS);
        let divisor = 10_i64.pow(decimals as u32);
        let whole = cents / divisor;
        let frac = (cents % divisor).unsigned_abs();

        format!(
            "{}{}{}",
            if cents < 0 { "-" } else { "" },
            self.currency_symbol,
            if decimals > 0 {
                format!(
                    "{}.{:0width$}",
                    whole.unsigned_abs(),
                    frac,
                    width = decimals as usize
                )
            } else {
                whole.unsigned_abs().to_string()
            }
        )
    }

    fn merge(mut self, file: ConfigFile) -> Self {
        if let Some(v) = file.store_name {
            self.store_name = v;
        }
        if let Some(v) = file.currency_code {
            self.currency_code = v;
        }
        if let Some(v) = file.currency_symbol {
            self.currency_symbol = v;
        }
        if let Some(v) = file.currency_decimals {
            self.currency_decimals = v;
        }
        if let Some(v) = file.shipping_cents {
            self.shipping_cents = v;
        }
        if let Some(v) = file.tax_rate_bps {
            self.tax_rate_bps = v;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ConfigState::default();
        assert_eq!(config.pricing(), Pricing::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_format_currency() {
        let config = ConfigState::default();
        assert_eq!(config.format_currency(56996), "$569.96");
        assert_eq!(config.format_currency(999), "$9.99");
        assert_eq!(config.format_currency(5), "$0.05");
        assert_eq!(config.format_currency(0), "$0.00");
        assert_eq!(config.format_currency(-1234), "-$12.34");
        assert_eq!(config.format_currency(i64::MIN), "-$92233720368547758.08");
    }

    #[test]
    fn test_format_currency_without_decimals() {
        let config = ConfigState {
            currency_symbol: "¥".to_string(),
            currency_decimals: 0,
            ..ConfigState::default()
        };
        assert_eq!(config.format_currency(1500), "¥1500");
    }

    #[test]
    fn test_format_currency_caps_decimals() {
        let config = ConfigState {
            currency_decimals: 19,
            ..ConfigState::default()
        };
        assert!(config.validate().is_err());
        assert_eq!(config.format_currency(999), "$0.0999");
    }

    #[test]
    fn test_env_overrides() {
        let config = ConfigState::default().with_overrides(lookup(&[
            (ENV_STORE_NAME, "Corner Shop"),
            (ENV_SHIPPING_CENTS, "0"),
            (ENV_TAX_RATE, "7.5"),
        ]));

        assert_eq!(config.store_name, "Corner Shop");
        assert_eq!(config.shipping_cents, 0);
        assert_eq!(config.tax_rate_bps, 750);
    }

    #[test]
    fn test_invalid_env_overrides_are_ignored() {
        let config = ConfigState::default().with_overrides(lookup(&[
            (ENV_SHIPPING_CENTS, "-5"),
            (ENV_TAX_RATE, "lots"),
        ]));

        assert_eq!(config.shipping_cents, DEFAULT_SHIPPING_CENTS);
        assert_eq!(config.tax_rate_bps, DEFAULT_TAX_RATE_BPS);
    }

    #[test]
    fn test_from_toml_partial() {
        let config = ConfigState::from_toml_str(
            r#"
            store_name = "Night Market"
            tax_rate_bps = 1000
            "#,
        )
        .unwrap();

        assert_eq!(config.store_name, "Night Market");
        assert_eq!(config.tax_rate_bps, 1000);
        assert_eq!(config.shipping_cents, DEFAULT_SHIPPING_CENTS);
        assert_eq!(config.currency_code, "USD");
    }

    #[test]
    fn test_from_toml_rejects_bad_values() {
        let err = ConfigState::from_toml_str("shipping_cents = -1").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = ConfigState::from_toml_str("tax_rate_bps = 20000").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = ConfigState::from_toml_str("currency_decimals = 19").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(ValidationError::OutOfRange { .. })));

        let err = ConfigState::from_toml_str("tax_rate = 8").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = ConfigState::load(Some(Path::new("/nonexistent/storefront.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(ConfigState::default()).unwrap();
        assert_eq!(json["storeName"], "ShopApp");
        assert_eq!(json["taxRateBps"], 800);
    }
}
