//! # Domain Types
//!
//! Core domain types shared by the ledger, the catalog and the session layer.
//!
//! ## Type Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │    LineItem     │   │   OrderRecord   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │──►│  id             │   │  order_number   │       │
//! │  │  name           │   │  name (frozen)  │   │  placed_on      │       │
//! │  │  price          │   │  unit_price     │   │  total          │       │
//! │  │  colors         │   │  quantity > 0   │   │  status         │       │
//! │  └─────────────────┘   │  size / color   │   └─────────────────┘       │
//! │                        └─────────────────┘                              │
//! │  ┌─────────────────┐   ┌─────────────────┐                              │
//! │  │    TaxRate      │   │    Category     │                              │
//! │  │  bps (u32)      │   │  product_count  │                              │
//! │  │  800 = 8%       │   │  accent_color   │                              │
//! │  └─────────────────┘   └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// 1 basis point = 0.01%, so 800 bps = 8%.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Creates a tax rate from a percentage, e.g. `8.0` for 8%.
    ///
    /// Negative input clamps to zero.
    pub fn from_percentage(pct: f64) -> Self {
        TaxRate((pct * 100.0).round().max(0.0) as u32)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    #[inline]
    pub const fn zero() -> Self {
        TaxRate(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

// =============================================================================
// Line Item
// =============================================================================

/// One catalog item plus the quantity and frozen unit price the session has
/// committed to purchase.
///
/// ## Snapshot Pattern
/// `name`, `unit_price` and `image` are copied from the catalog when the item
/// is created. Later catalog changes do not reach items already in the ledger.
///
/// The ledger only hands out `&LineItem`, so the `quantity > 0` invariant
/// holds for every item read back from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct LineItem {
    /// Stable identifier, unique within a ledger.
    pub id: String,

    /// Display label. Never used in computation.
    pub name: String,

    /// Price of a single unit, fixed for the life of the item.
    pub unit_price: Money,

    /// Units selected. Initial quantity when handed to `Ledger::add_item`.
    pub quantity: i64,

    /// Image reference (opaque to the ledger).
    pub image: Option<String>,

    /// Size variant, e.g. "US 9".
    pub size: Option<String>,

    /// Color variant, e.g. "Navy".
    pub color: Option<String>,
}

impl LineItem {
    /// Creates a line item without image or variant attributes.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        unit_price: Money,
        quantity: i64,
    ) -> Self {
        LineItem {
            id: id.into(),
            name: name.into(),
            unit_price,
            quantity,
            image: None,
            size: None,
            color: None,
        }
    }

    /// Freezes a catalog product into a line item.
    pub fn from_product(product: &Product, quantity: i64) -> Self {
        LineItem {
            id: product.id.clone(),
            name: product.name.clone(),
            unit_price: product.price,
            quantity,
            image: Some(product.image.clone()),
            size: None,
            color: None,
        }
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.size = Some(size.into());
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Unit price × quantity.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.unit_price.multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product listed in the catalog.
///
/// Listing fields (`name`, `price`, `rating`, `category`, `image`) are shown on
/// the home grid; the remaining fields only on the product detail screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: Money,
    /// Average review score, 0.0 to 5.0.
    pub rating: f32,
    pub category: String,
    pub image: String,

    /// Price before markdown, shown struck through.
    pub original_price: Option<Money>,
    pub review_count: u32,
    pub description: Option<String>,
    /// Selectable color variants, in display order.
    pub colors: Vec<String>,
    pub features: Vec<String>,
    pub in_stock: bool,
}

impl Product {
    /// Creates a product with listing fields only.
    pub fn listing(
        id: impl Into<String>,
        name: impl Into<String>,
        price: Money,
        rating: f32,
        category: impl Into<String>,
        image: impl Into<String>,
    ) -> Self {
        Product {
            id: id.into(),
            name: name.into(),
            price,
            rating,
            category: category.into(),
            image: image.into(),
            original_price: None,
            review_count: 0,
            description: None,
            colors: Vec::new(),
            features: Vec::new(),
            in_stock: true,
        }
    }

    /// Whether the product is currently marked down.
    pub fn is_discounted(&self) -> bool {
        self.original_price.is_some_and(|orig| orig > self.price)
    }
}

// =============================================================================
// Category
// =============================================================================

/// A browsable catalog category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Category {
    pub id: String,
    pub name: String,
    /// Hex color used for the category tile, e.g. "#2563EB".
    pub accent_color: String,
    pub image: String,
    pub product_count: u32,
}

// =============================================================================
// Order History
// =============================================================================

/// Fulfilment status of a past order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Processing,
    Shipped,
    Delivered,
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderStatus::Processing => write!(f, "Processing"),
            OrderStatus::Shipped => write!(f, "Shipped"),
            OrderStatus::Delivered => write!(f, "Delivered"),
        }
    }
}

/// A past order shown on the profile screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct OrderRecord {
    pub id: String,
    /// Customer-facing number, e.g. "#12345".
    pub order_number: String,
    #[ts(as = "String")]
    pub placed_on: NaiveDate,
    pub total: Money,
    pub status: OrderStatus,
    pub item_count: u32,
}

// =============================================================================
// Unit Tests
// =============================================================================
