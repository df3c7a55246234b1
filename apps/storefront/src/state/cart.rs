//! # Cart State
//!
//! Shares the session's [`Ledger`] between command calls.
//!
//! ## Thread Safety
//! The ledger is wrapped in `Arc<Mutex<T>>` so that every gesture is applied
//! completely before the next one starts, whichever thread forwards it.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart State Operations                                │
//! │                                                                         │
//! │  Gesture                  Command                  Ledger Call          │
//! │  ───────                  ───────                  ───────────          │
//! │                                                                         │
//! │  Add to Cart ────────────► add_to_cart() ─────────► add_item(item)      │
//! │                                                                         │
//! │  Tap + / - ──────────────► adjust_cart_item() ────► adjust_quantity()   │
//! │                                                                         │
//! │  Type Quantity ──────────► set_cart_item_qty() ───► set_quantity()      │
//! │                                                                         │
//! │  Tap Trash ──────────────► remove_from_cart() ────► remove(id)          │
//! │                                                                         │
//! │  View Cart ──────────────► get_cart() ────────────► summarize()         │
//! │                                                                         │
//! │  NOTE: All operations hold the Mutex for the duration of one call.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, PoisonError};

use shop_core::{CoreResult, Ledger, LineItem};

/// Thread-safe cart state wrapper.
///
/// Cloning shares the same underlying ledger.
#[derive(Debug, Clone)]
pub struct CartState {
    ledger: Arc<Mutex<Ledger>>,
}

impl CartState {
    /// Creates a new empty cart state.
    pub fn new() -> Self {
        CartState {
            ledger: Arc::new(Mutex::new(Ledger::new())),
        }
    }

    /// Creates a cart state holding the given items.
    pub fn seeded<I>(items: I) -> CoreResult<Self>
    where
        I: IntoIterator<Item = LineItem>,
    {
        Ok(CartState {
            ledger: Arc::new(Mutex::new(Ledger::with_items(items)?)),
        })
    }

    /// Executes a read-only function on the ledger.
    ///
    /// A poisoned lock is recovered: ledger calls never leave a
    /// half-applied state behind.
    pub fn with_ledger<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Ledger) -> R,
    {
        let ledger = self.ledger.lock().unwrap_or_else(PoisonError::into_inner);
        f(&ledger)
    }

    /// Executes a mutating function on the ledger.
    pub fn with_ledger_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Ledger) -> R,
    {
        let mut ledger = self.ledger.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut ledger)
    }
}

impl Default for CartState {
    fn default() -> Self {
        Self::new()
    }
}
