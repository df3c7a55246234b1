//! # Pricing
//!
//! Shipping and tax configuration, and the checkout summary derived from a
//! ledger.
//!
//! ```text
//! subtotal = Σ unit_price × quantity
//! shipping = flat fee
//! tax      = subtotal × tax_rate   (rounded to the cent)
//! total    = subtotal + shipping + tax
//! ```
//!
//! Shipping is charged whatever the subtotal is, including on an empty
//! ledger. The presentation layer decides whether to show a summary at all.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::{LineItem, TaxRate};
use crate::{DEFAULT_SHIPPING_CENTS, DEFAULT_TAX_RATE_BPS};

// =============================================================================
// Pricing
// =============================================================================

/// Fixed pricing inputs to the summary computation. Not ledger state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Pricing {
    /// Flat shipping fee per order.
    pub shipping: Money,
    /// Tax rate applied to the subtotal.
    pub tax_rate: TaxRate,
}

impl Pricing {
    pub const fn new(shipping: Money, tax_rate: TaxRate) -> Self {
        Pricing { shipping, tax_rate }
    }
}

/// $9.99 shipping, 8% tax.
impl Default for Pricing {
    fn default() -> Self {
        Pricing::new(
            Money::from_cents(DEFAULT_SHIPPING_CENTS),
            TaxRate::from_bps(DEFAULT_TAX_RATE_BPS),
        )
    }
}

// =============================================================================
// Summary
// =============================================================================

/// Checkout-ready totals for the current ledger contents.
///
/// ## Item Count
/// `item_count` counts distinct line items ("3 items" in the cart header),
/// not units. `total_quantity` counts units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Summary {
    pub subtotal: Money,
    pub shipping: Money,
    pub tax: Money,
    pub total: Money,
    pub item_count: usize,
    pub total_quantity: i64,
}

impl Summary {
    /// Computes the summary over a set of line items.
    pub fn compute(items: &[LineItem], pricing: &Pricing) -> Self {
        let subtotal: Money = items.iter().map(LineItem::line_total).sum();
        let tax = subtotal.calculate_tax(pricing.tax_rate);

        Summary {
            subtotal,
            shipping: pricing.shipping,
            tax,
            total: subtotal + pricing.shipping + tax,
            item_count: items.len(),
            total_quantity: items
                .iter()
                .fold(0i64, |acc, i| acc.saturating_add(i.quantity)),
        }
    }

    /// True when the summary was computed over no line items.
    pub fn is_empty(&self) -> bool {
        self.item_count == 0
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
