//! # Cart Commands
//!
//! Commands behind the cart screen and the "add to cart" buttons.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Line Item Lifecycle                                  │
//! │                                                                         │
//! │  ┌──────────┐   add_to_cart    ┌──────────────┐                         │
//! │  │  Absent  │─────────────────►│ Present(n>0) │◄──┐ adjust_cart_item    │
//! │  └──────────┘                  └──────────────┘───┘ (+/- while n > 0)   │
//! │        ▲                              │                                 │
//! │        │   quantity reaches 0         │                                 │
//! │        │   set_cart_item_quantity(0)  │                                 │
//! │        │   remove_from_cart           │                                 │
//! │        └──────── clear_cart ◄─────────┘                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every command returns the full [`CartResponse`] so the screen re-renders
//! from one consistent snapshot.

use serde::{Deserialize, Serialize};
use shop_core::{
    AddOutcome, CatalogProvider, CoreError, DetailSelection, Ledger, LineItem, Product, Summary,
};
use tracing::debug;
use ts_rs::TS;

use crate::error::ApiError;
use crate::state::{CartState, ConfigState};

// =============================================================================
// DTOs
// =============================================================================

/// Cart contents plus the computed summary.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartResponse {
    pub items: Vec<LineItem>,
    pub summary: Summary,
    /// Summary amounts formatted for display.
    pub display: SummaryDisplay,
}

/// Currency strings for the order summary card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SummaryDisplay {
    pub subtotal: String,
    pub shipping: String,
    pub tax: String,
    pub total: String,
}

impl CartResponse {
    fn from_ledger(ledger: &Ledger, config: &ConfigState) -> Self {
        let summary = ledger.summarize(&config.pricing());
        CartResponse {
            items: ledger.items().to_vec(),
            display: SummaryDisplay {
                subtotal: config.format_currency(summary.subtotal.cents()),
                shipping: config.format_currency(summary.shipping.cents()),
                tax: config.format_currency(summary.tax.cents()),
                total: config.format_currency(summary.total.cents()),
            },
            summary,
        }
    }
}

/// Request body for [`add_to_cart`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AddToCartRequest {
    pub product_id: String,
    /// Units to add. Defaults to 1.
    pub quantity: Option<i64>,
    pub color: Option<String>,
    pub size: Option<String>,
}

// =============================================================================
// Commands
// =============================================================================

/// Gets the current cart contents.
pub fn get_cart(cart: &CartState, config: &ConfigState) -> CartResponse {
    debug!("get_cart command");
    cart.with_ledger(|ledger| CartResponse::from_ledger(ledger, config))
}

/// Adds a catalog product to the cart.
///
/// ## Errors
/// - `NOT_FOUND` for an unknown product id
/// - `CART_ERROR` when the product is out of stock
/// - `VALIDATION_ERROR` for a color the product doesn't offer
pub fn add_to_cart<C: CatalogProvider>(
    catalog: &C,
    cart: &CartState,
    config: &ConfigState,
    request: AddToCartRequest,
) -> Result<CartResponse, ApiError> {
    debug!(
        product_id = %request.product_id,
        quantity = ?request.quantity,
        color = ?request.color,
        size = ?request.size,
        "add_to_cart command"
    );

    let product = stocked_product(catalog, &request.product_id)?;

    let mut item = LineItem::from_product(product, request.quantity.unwrap_or(1));
    if let Some(color) = request.color {
        if !product.colors.is_empty() && !product.colors.contains(&color) {
            return Err(ApiError::validation(format!(
                "{} is not available in {}",
                product.name, color
            )));
        }
        item = item.with_color(color);
    }
    if let Some(size) = request.size {
        item = item.with_size(size);
    }

    insert(cart, config, item)
}

/// Adds the quantity and color picked on the product detail screen.
pub fn add_selection_to_cart<C: CatalogProvider>(
    catalog: &C,
    cart: &CartState,
    config: &ConfigState,
    product_id: &str,
    selection: &DetailSelection,
) -> Result<CartResponse, ApiError> {
    debug!(
        product_id = %product_id,
        quantity = selection.quantity(),
        color_index = selection.color_index(),
        "add_selection_to_cart command"
    );

    let product = stocked_product(catalog, product_id)?;
    insert(cart, config, selection.to_line_item(product))
}

/// Changes a line item's quantity by `delta`. Reaching zero removes it.
///
/// Unknown ids are ignored.
pub fn adjust_cart_item(
    cart: &CartState,
    config: &ConfigState,
    id: &str,
    delta: i64,
) -> CartResponse {
    cart.with_ledger_mut(|ledger| {
        let change = ledger.adjust_quantity(id, delta);
        debug!(id = %id, delta = delta, change = ?change, "adjust_cart_item command");
        CartResponse::from_ledger(ledger, config)
    })
}

/// Sets a line item's quantity. Zero or below removes it.
pub fn set_cart_item_quantity(
    cart: &CartState,
    config: &ConfigState,
    id: &str,
    quantity: i64,
) -> CartResponse {
    cart.with_ledger_mut(|ledger| {
        let change = ledger.set_quantity(id, quantity);
        debug!(id = %id, quantity = quantity, change = ?change, "set_cart_item_quantity command");
        CartResponse::from_ledger(ledger, config)
    })
}

/// Removes a line item regardless of quantity.
pub fn remove_from_cart(cart: &CartState, config: &ConfigState, id: &str) -> CartResponse {
    cart.with_ledger_mut(|ledger| {
        let removed = ledger.remove(id);
        debug!(id = %id, removed = removed, "remove_from_cart command");
        CartResponse::from_ledger(ledger, config)
    })
}

/// Empties the cart.
pub fn clear_cart(cart: &CartState, config: &ConfigState) -> CartResponse {
    debug!("clear_cart command");
    cart.with_ledger_mut(|ledger| {
        ledger.clear();
        CartResponse::from_ledger(ledger, config)
    })
}

// =============================================================================
// Helpers
// =============================================================================

fn stocked_product<'a, C: CatalogProvider>(
    catalog: &'a C,
    product_id: &str,
) -> Result<&'a Product, ApiError> {
    let product = catalog
        .product(product_id)
        .ok_or_else(|| CoreError::ProductNotFound(product_id.to_string()))?;

    if !product.in_stock {
        return Err(ApiError::cart(format!("{} is out of stock", product.name)));
    }

    Ok(product)
}

fn insert(cart: &CartState, config: &ConfigState, item: LineItem) -> Result<CartResponse, ApiError> {
    cart.with_ledger_mut(|ledger| -> Result<CartResponse, ApiError> {
        let outcome = ledger.add_item(item)?;
        match outcome {
            AddOutcome::Ignored => debug!("Non-positive quantity, cart unchanged"),
            outcome => debug!(outcome = ?outcome, "Line item stored"),
        }
        Ok(CartResponse::from_ledger(ledger, config))
    })
}

/// Quantity the cart currently holds for `id`, if any.
pub(crate) fn quantity_in_cart(cart: &CartState, id: &str) -> Option<i64> {
    cart.with_ledger(|ledger| ledger.get(id).map(|item| item.quantity))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use shop_core::{Money, StaticCatalog};

    fn setup() -> (StaticCatalog, CartState, ConfigState) {
        let catalog = StaticCatalog::sample();
        let cart = CartState::seeded(catalog.initial_cart()).unwrap();
        (catalog, cart, ConfigState::default())
    }

    fn request(product_id: &str, quantity: Option<i64>) -> AddToCartRequest {
        AddToCartRequest {
            product_id: product_id.to_string(),
            quantity,
            ..AddToCartRequest::default()
        }
    }

    #[test]
    fn test_get_cart_checkout_totals() {
        let (_, cart, config) = setup();
        let response = get_cart(&cart, &config);

        assert_eq!(response.items.len(), 3);
        assert_eq!(response.summary.subtotal, Money::from_cents(56996));
        assert_eq!(response.summary.tax, Money::from_cents(4560));
        assert_eq!(response.summary.total, Money::from_cents(62555));
        assert_eq!(response.display.subtotal, "$569.96");
        assert_eq!(response.display.shipping, "$9.99");
        assert_eq!(response.display.tax, "$45.60");
        assert_eq!(response.display.total, "$625.55");
    }

    #[test]
    fn test_add_to_cart_new_and_merge() {
        let (catalog, cart, config) = setup();

        let response = add_to_cart(&catalog, &cart, &config, request("5", Some(2))).unwrap();
        assert_eq!(response.items.len(), 4);
        assert_eq!(response.items[3].id, "5");
        assert_eq!(response.items[3].quantity, 2);

        let response = add_to_cart(&catalog, &cart, &config, request("5", None)).unwrap();
        assert_eq!(response.items.len(), 4);
        assert_eq!(response.items[3].quantity, 3);
    }

    #[test]
    fn test_add_to_cart_with_variants() {
        let (catalog, _, config) = setup();
        let cart = CartState::new();

        let response = add_to_cart(
            &catalog,
            &cart,
            &config,
            AddToCartRequest {
                product_id: "1".to_string(),
                quantity: Some(1),
                color: Some("White".to_string()),
                size: Some("One Size".to_string()),
            },
        )
        .unwrap();

        assert_eq!(response.items[0].color.as_deref(), Some("White"));
        assert_eq!(response.items[0].size.as_deref(), Some("One Size"));
    }

    #[test]
    fn test_add_to_cart_errors() {
        let (catalog, cart, config) = setup();

        let err = add_to_cart(&catalog, &cart, &config, request("missing", Some(1))).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Product not found: missing");

        let err = add_to_cart(
            &catalog,
            &cart,
            &config,
            AddToCartRequest {
                product_id: "1".to_string(),
                color: Some("Plaid".to_string()),
                ..AddToCartRequest::default()
            },
        )
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        assert_eq!(get_cart(&cart, &config).items.len(), 3);
    }

    #[test]
    fn test_add_to_cart_out_of_stock() {
        let mut product = shop_core::Product::listing(
            "x",
            "Sold Out Lamp",
            Money::from_cents(2500),
            4.0,
            "Home",
            "lamp.jpg",
        );
        product.in_stock = false;
        let catalog = StaticCatalog::new(vec![product], Vec::new());
        let cart = CartState::new();

        let err = add_to_cart(&catalog, &cart, &ConfigState::default(), request("x", None))
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::CartError);
    }

    #[test]
    fn test_add_zero_quantity_is_ignored() {
        let (catalog, cart, config) = setup();
        let response = add_to_cart(&catalog, &cart, &config, request("5", Some(0))).unwrap();
        assert_eq!(response.items.len(), 3);
    }

    #[test]
    fn test_add_selection_to_cart() {
        let (catalog, _, config) = setup();
        let cart = CartState::new();
        let product = catalog.product("1").unwrap();

        let mut selection = DetailSelection::new();
        selection.adjust(2);
        selection.select_color(product, 2);

        let response = add_selection_to_cart(&catalog, &cart, &config, "1", &selection).unwrap();
        assert_eq!(response.items[0].quantity, 3);
        assert_eq!(response.items[0].color.as_deref(), Some("Blue"));
    }

    #[test]
    fn test_adjust_to_zero_removes() {
        let (_, cart, config) = setup();

        let response = adjust_cart_item(&cart, &config, "2", -2);
        assert_eq!(response.summary.item_count, 2);
        assert!(response.items.iter().all(|i| i.id != "2"));

        // Unknown id: no change, no error.
        let response = adjust_cart_item(&cart, &config, "Z", -1);
        assert_eq!(response.summary.item_count, 2);
    }

    #[test]
    fn test_set_quantity_and_remove() {
        let (_, cart, config) = setup();

        let response = set_cart_item_quantity(&cart, &config, "1", 4);
        assert_eq!(quantity_in_cart(&cart, "1"), Some(4));
        assert_eq!(response.summary.total_quantity, 7);

        set_cart_item_quantity(&cart, &config, "1", 0);
        assert_eq!(quantity_in_cart(&cart, "1"), None);

        let response = remove_from_cart(&cart, &config, "3");
        assert_eq!(response.items.len(), 1);
        let response = remove_from_cart(&cart, &config, "3");
        assert_eq!(response.items.len(), 1);
    }

    #[test]
    fn test_clear_cart_keeps_shipping() {
        let (_, cart, config) = setup();
        let response = clear_cart(&cart, &config);

        assert!(response.items.is_empty());
        assert!(response.summary.is_empty());
        assert_eq!(response.summary.total, Money::from_cents(999));
    }

    #[test]
    fn test_response_serialization() {
        let (_, cart, config) = setup();
        let json = serde_json::to_value(get_cart(&cart, &config)).unwrap();

        assert_eq!(json["items"][0]["unitPrice"], 7999);
        assert_eq!(json["summary"]["itemCount"], 3);
        assert_eq!(json["display"]["total"], "$625.55");
    }
}
