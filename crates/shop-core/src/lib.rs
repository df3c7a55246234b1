//! # shop-core: Pure Business Logic for the Storefront
//!
//! This crate holds the cart ledger and everything it needs to price a
//! checkout, as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Storefront Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Presentation Layer (mobile UI)                 │   │
//! │  │     Home ──► Product Detail ──► Cart ──► Profile               │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ in-process calls                       │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  storefront (session commands)                  │   │
//! │  │   search_products, add_to_cart, adjust_cart_item, get_cart      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ shop-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   money   │  │  ledger   │  │  pricing  │  │  catalog  │  │   │
//! │  │   │   Money   │  │  Ledger   │  │  Pricing  │  │  Product  │  │   │
//! │  │   │  TaxRate  │  │ LineItem  │  │  Summary  │  │ Favorites │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (LineItem, Product, Category, OrderRecord, TaxRate)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`ledger`] - The cart ledger: line items and quantity transitions
//! - [`pricing`] - Shipping/tax configuration and the checkout summary
//! - [`catalog`] - Catalog provider seam, name filter, favorites
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation
//!
//! ## Example Usage
//!
//! ```rust
//! use shop_core::{Ledger, LineItem, Money, Pricing};
//!
//! let mut ledger = Ledger::new();
//! ledger
//!     .add_item(LineItem::new("2", "Smart Watch", Money::from_cents(19999), 2))
//!     .unwrap();
//!
//! let summary = ledger.summarize(&Pricing::default());
//! assert_eq!(summary.subtotal.cents(), 39998);
//! assert_eq!(summary.item_count, 1);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod error;
pub mod ledger;
pub mod money;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use catalog::{CatalogProvider, DetailSelection, Favorites, StaticCatalog};
pub use error::{CoreError, CoreResult, ValidationError};
pub use ledger::{AddOutcome, Ledger, QuantityChange};
pub use money::Money;
pub use pricing::{Pricing, Summary};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Flat shipping fee charged on every order, in cents ($9.99).
pub const DEFAULT_SHIPPING_CENTS: i64 = 999;

/// Sales tax applied to the subtotal, in basis points (8%).
pub const DEFAULT_TAX_RATE_BPS: u32 = 800;

