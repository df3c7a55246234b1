//! # Cart Ledger
//!
//! The authoritative set of line items for one shopping session.
//!
//! ## Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Ledger Operations                                    │
//! │                                                                         │
//! │  Gesture                 Call                      Effect               │
//! │  ───────                 ────                      ──────               │
//! │                                                                         │
//! │  "Add to cart" ────────► add_item(item) ─────────► push / merge        │
//! │                                                                         │
//! │  Tap + / - ────────────► adjust_quantity(id, ±1) ► qty = max(0, q+d)   │
//! │                                                    (0 removes)          │
//! │                                                                         │
//! │  Type a quantity ──────► set_quantity(id, n) ────► qty = max(0, n)     │
//! │                                                    (0 removes)          │
//! │                                                                         │
//! │  Tap trash ────────────► remove(id) ─────────────► retain(id != ...)   │
//! │                                                                         │
//! │  View totals ──────────► summarize(&pricing) ────► (read only)         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Item Lifecycle
//! ```text
//!            add_item(q > 0)
//!   Absent ──────────────────► Present(q)
//!     ▲                          │   ▲
//!     │  adjust/set to 0,        │   │ adjust/set while > 0
//!     │  remove, clear           ▼   │
//!     └──────────────────────── Present(q') ─┘
//! ```
//!
//! Quantity operations are total: unknown ids are no-ops and negative
//! results clamp to zero. Lookup is linear in the item count, which stays
//! small at cart scale.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::pricing::{Pricing, Summary};
use crate::types::LineItem;
use crate::validation::{validate_item_id, validate_price};

// =============================================================================
// Outcomes
// =============================================================================

/// What `Ledger::add_item` did with an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// A new line item was appended.
    Inserted { quantity: i64 },
    /// The id was already present; quantities were combined.
    Merged { quantity: i64 },
    /// The initial quantity was not positive; nothing changed.
    Ignored,
}

/// What a quantity operation did to a line item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityChange {
    /// The item is still present with this quantity.
    Updated { quantity: i64 },
    /// The quantity reached zero and the item was dropped.
    Removed,
    /// No item with that id; nothing changed.
    Absent,
}

// =============================================================================
// Ledger
// =============================================================================

/// In-memory, insertion-ordered collection of line items keyed by id.
///
/// ## Invariants
/// - Ids are unique.
/// - Every stored item has `quantity > 0`.
/// - `unit_price` never changes after insertion.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ledger {
    items: Vec<LineItem>,

    /// When the ledger was created or last cleared.
    created_at: DateTime<Utc>,
}

impl Ledger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Ledger {
            items: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Builds a ledger from an initial item set, e.g. a catalog fixture.
    ///
    /// Items go through `add_item`, so duplicates merge and non-positive
    /// quantities are skipped.
    pub fn with_items<I>(items: I) -> CoreResult<Self>
    where
        I: IntoIterator<Item = LineItem>,
    {
        let mut ledger = Ledger::new();
        for item in items {
            ledger.add_item(item)?;
        }
        Ok(ledger)
    }

    /// Adds an item handed over by the catalog provider.
    ///
    /// ## Behavior
    /// - Empty id or negative unit price: `Err(CoreError::InvalidItem)`
    /// - `item.quantity <= 0`: no-op, `AddOutcome::Ignored`
    /// - New id: appended, `AddOutcome::Inserted`
    /// - Existing id: quantities add up; the stored price and variants win
    pub fn add_item(&mut self, item: LineItem) -> CoreResult<AddOutcome> {
        let invalid = |reason: String| CoreError::InvalidItem {
            id: item.id.clone(),
            reason,
        };
        validate_item_id(&item.id).map_err(|e| invalid(e.to_string()))?;
        validate_price("price", item.unit_price).map_err(|e| invalid(e.to_string()))?;

        if item.quantity <= 0 {
            return Ok(AddOutcome::Ignored);
        }

        if let Some(existing) = self.items.iter_mut().find(|i| i.id == item.id) {
            existing.quantity = existing.quantity.saturating_add(item.quantity);
            return Ok(AddOutcome::Merged {
                quantity: existing.quantity,
            });
        }

        let quantity = item.quantity;
        self.items.push(item);
        Ok(AddOutcome::Inserted { quantity })
    }

    /// Applies a signed delta: `new = max(0, current + delta)`.
    ///
    /// Reaching zero removes the item. Unknown ids are ignored.
    pub fn adjust_quantity(&mut self, id: &str, delta: i64) -> QuantityChange {
        match self.position(id) {
            Some(idx) => {
                let target = self.items[idx].quantity.saturating_add(delta);
                self.store_quantity(idx, target)
            }
            None => QuantityChange::Absent,
        }
    }

    /// Sets an absolute quantity, clamped at zero. Zero removes the item.
    pub fn set_quantity(&mut self, id: &str, quantity: i64) -> QuantityChange {
        match self.position(id) {
            Some(idx) => self.store_quantity(idx, quantity),
            None => QuantityChange::Absent,
        }
    }

    /// Removes the item with this id. Returns whether anything was removed.
    ///
    /// Calling it again for the same id is a no-op.
    pub fn remove(&mut self, id: &str) -> bool {
        let initial_len = self.items.len();
        self.items.retain(|i| i.id != id);
        self.items.len() != initial_len
    }

    /// Drops every item and restarts the ledger clock.
    pub fn clear(&mut self) {
        self.items.clear();
        self.created_at = Utc::now();
    }

    /// Line items in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&LineItem> {
        self.items.iter().find(|i| i.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Number of distinct line items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of quantities across all line items, saturating at `i64::MAX`.
    pub fn total_quantity(&self) -> i64 {
        self.items
            .iter()
            .fold(0i64, |acc, i| acc.saturating_add(i.quantity))
    }

    /// Σ unit price × quantity.
    pub fn subtotal(&self) -> Money {
        self.items.iter().map(LineItem::line_total).sum()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Derives the checkout summary under the given pricing.
    pub fn summarize(&self, pricing: &Pricing) -> Summary {
        Summary::compute(&self.items, pricing)
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|i| i.id == id)
    }

    fn store_quantity(&mut self, idx: usize, quantity: i64) -> QuantityChange {
        if quantity <= 0 {
            self.items.remove(idx);
            QuantityChange::Removed
        } else {
            self.items[idx].quantity = quantity;
            QuantityChange::Updated { quantity }
        }
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
