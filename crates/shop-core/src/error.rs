//! # Error Types
//!
//! Domain-specific error types for shop-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  shop-core errors (this file)                                          │
//! │  ├── CoreError        - Domain errors (unknown product, invalid item)  │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  storefront errors (app crate)                                         │
//! │  ├── ConfigError      - Config file / env problems                     │
//! │  └── ApiError         - What the presentation layer sees               │
//! │                                                                         │
//! │  Flow: CoreError → ApiError → Presentation                             │
//! │        ValidationError → ConfigError (at session start)                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Ledger quantity operations never fail: they clamp or no-op instead.
//! Only adding an item can be rejected.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Product id is not known to the catalog provider.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// A line item was rejected before entering the ledger.
    ///
    /// ## When This Occurs
    /// - The item id is empty or whitespace
    /// - The unit price is negative
    #[error("Invalid line item '{id}': {reason}")]
    InvalidItem { id: String, reason: String },
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g. a percentage that is not a number).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;
