//! # Validation Module
//!
//! Input validation for items entering the ledger and for pricing
//! configuration.
//!
//! ## Where Validation Runs
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Points                                  │
//! │                                                                         │
//! │  Catalog Provider ──► Ledger::add_item                                 │
//! │                       └── validate_item_id, validate_price             │
//! │                                                                         │
//! │  Config (env/TOML) ─► ConfigState::validate                            │
//! │                       └── validate_tax_rate_bps, validate_price,       │
//! │                           parse_tax_percentage                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Quantity deltas are never validated: the ledger clamps them.

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::TaxRate;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Upper bound for a tax rate: 100%.
const MAX_TAX_RATE_BPS: u32 = 10_000;

// =============================================================================
// Identifiers
// =============================================================================

/// Validates a line item / product id.
///
/// ## Rules
/// - Must not be empty or whitespace only
///
/// ```rust
/// use shop_core::validation::validate_item_id;
///
/// assert!(validate_item_id("1").is_ok());
/// assert!(validate_item_id("  ").is_err());
/// ```
pub fn validate_item_id(id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Money
// =============================================================================

/// Validates a price or fee.
///
/// ## Rules
/// - Must be non-negative; zero is allowed (free items, free shipping)
///
/// ```rust
/// use shop_core::money::Money;
/// use shop_core::validation::validate_price;
///
/// assert!(validate_price("price", Money::from_cents(7999)).is_ok());
/// assert!(validate_price("price", Money::zero()).is_ok());
/// assert!(validate_price("price", Money::from_cents(-1)).is_err());
/// ```
pub fn validate_price(field: &str, amount: Money) -> ValidationResult<()> {
    if amount.is_negative() {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

// =============================================================================
// Tax
// =============================================================================

/// Validates a tax rate in basis points (0% to 100%).
pub fn validate_tax_rate_bps(bps: u32) -> ValidationResult<()> {
    if bps > MAX_TAX_RATE_BPS {
        return Err(ValidationError::OutOfRange {
            field: "tax_rate".to_string(),
            min: 0,
            max: MAX_TAX_RATE_BPS as i64,
        });
    }

    Ok(())
}

/// Parses a percentage string such as `"8"` or `"8.25"` into a tax rate.
///
/// ```rust
/// use shop_core::validation::parse_tax_percentage;
///
/// assert_eq!(parse_tax_percentage("8.25").unwrap().bps(), 825);
/// assert!(parse_tax_percentage("eight").is_err());
/// assert!(parse_tax_percentage("150").is_err());
/// ```
pub fn parse_tax_percentage(raw: &str) -> ValidationResult<TaxRate> {
    let pct: f64 = raw
        .trim()
        .parse()
        .map_err(|_| ValidationError::InvalidFormat {
            field: "tax_rate".to_string(),
            reason: format!("'{}' is not a number", raw.trim()),
        })?;

    if !pct.is_finite() || pct < 0.0 {
        return Err(ValidationError::OutOfRange {
            field: "tax_rate".to_string(),
            min: 0,
            max: 100,
        });
    }

    let rate = TaxRate::from_percentage(pct);
    validate_tax_rate_bps(rate.bps())?;
    Ok(rate)
}

// =============================================================================
// Unit Tests
// =============================================================================
