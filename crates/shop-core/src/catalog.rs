//! # Catalog
//!
//! The upstream side of the ledger: where products come from, how the home
//! screen filters them, which ones are favorited, and how a product detail
//! selection turns into a line item.
//!
//! ## Catalog Provider Seam
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   CatalogProvider (trait)                                               │
//! │     ├── products() / product(id)     ──► home grid, detail screen       │
//! │     ├── categories()                 ──► categories screen              │
//! │     └── initial_cart()               ──► seeds the session ledger       │
//! │                                                                         │
//! │   StaticCatalog   ◄── fixture implementation (sample data)             │
//! │   <remote catalog> ◄── could replace it without touching the ledger     │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::{Category, LineItem, Product};

// =============================================================================
// Provider Trait
// =============================================================================

/// Source of catalog data for a session.
pub trait CatalogProvider {
    /// All listed products, in display order.
    fn products(&self) -> &[Product];

    /// All categories, in display order.
    fn categories(&self) -> &[Category];

    /// Looks up a product by id.
    fn product(&self, id: &str) -> Option<&Product> {
        self.products().iter().find(|p| p.id == id)
    }

    /// Line items a fresh session starts with. Empty by default.
    fn initial_cart(&self) -> Vec<LineItem> {
        Vec::new()
    }
}

// =============================================================================
// Filters
// =============================================================================

/// Returns the products whose name contains `query`, ignoring case.
///
/// The query is used as typed, only lowercased: surrounding spaces are part
/// of the needle. An empty query matches everything. Catalog order is
/// preserved.
///
/// ```rust
/// use shop_core::catalog::{filter_by_name, CatalogProvider, StaticCatalog};
///
/// let catalog = StaticCatalog::sample();
/// let hits = filter_by_name(catalog.products(), "WATCH");
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0].name, "Smart Watch");
/// ```
pub fn filter_by_name<'a>(products: &'a [Product], query: &str) -> Vec<&'a Product> {
    let needle = query.to_lowercase();
    products
        .iter()
        .filter(|p| p.name.to_lowercase().contains(&needle))
        .collect()
}

/// Returns the products in `category`, compared case-insensitively.
pub fn filter_by_category<'a>(products: &'a [Product], category: &str) -> Vec<&'a Product> {
    let category = category.trim().to_lowercase();
    products
        .iter()
        .filter(|p| p.category.to_lowercase() == category)
        .collect()
}

// =============================================================================
// Favorites
// =============================================================================

/// Ordered set of favorited product ids.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Favorites {
    ids: Vec<String>,
}

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips the favorite flag for `id`. Returns whether it is now a favorite.
    pub fn toggle(&mut self, id: &str) -> bool {
        if let Some(pos) = self.ids.iter().position(|f| f == id) {
            self.ids.remove(pos);
            false
        } else {
            self.ids.push(id.to_string());
            true
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|f| f == id)
    }

    /// Favorited ids, oldest first.
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

// =============================================================================
// Product Detail Selection
// =============================================================================

/// Quantity stepper and color picker state on the product detail screen.
///
/// Unlike the ledger, the stepper never goes below one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailSelection {
    quantity: i64,
    color_index: usize,
}

impl DetailSelection {
    pub fn new() -> Self {
        DetailSelection {
            quantity: 1,
            color_index: 0,
        }
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn color_index(&self) -> usize {
        self.color_index
    }

    /// `quantity = max(1, quantity + delta)`.
    pub fn adjust(&mut self, delta: i64) -> i64 {
        self.quantity = self.quantity.saturating_add(delta).max(1);
        self.quantity
    }

    /// Selects a color, clamped to the product's last color.
    pub fn select_color(&mut self, product: &Product, index: usize) {
        self.color_index = index.min(product.colors.len().saturating_sub(1));
    }

    /// The color currently selected for `product`, if it has any.
    pub fn selected_color<'a>(&self, product: &'a Product) -> Option<&'a str> {
        product.colors.get(self.color_index).map(String::as_str)
    }

    /// Builds the line item handed to the ledger by "add to cart".
    pub fn to_line_item(&self, product: &Product) -> LineItem {
        let item = LineItem::from_product(product, self.quantity);
        match self.selected_color(product) {
            Some(color) => item.with_color(color),
            None => item,
        }
    }
}

impl Default for DetailSelection {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Static Catalog
// =============================================================================

/// In-memory catalog backed by fixed data.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    products: Vec<Product>,
    categories: Vec<Category>,
    initial_cart: Vec<LineItem>,
}

impl StaticCatalog {
    pub fn new(products: Vec<Product>, categories: Vec<Category>) -> Self {
        StaticCatalog {
            products,
            categories,
            initial_cart: Vec::new(),
        }
    }

    pub fn with_initial_cart(mut self, items: Vec<LineItem>) -> Self {
        self.initial_cart = items;
        self
    }

    /// The storefront's sample data: six products, six categories and a
    /// three-item starting cart.
    pub fn sample() -> Self {
        StaticCatalog::new(sample_products(), sample_categories())
            .with_initial_cart(sample_cart())
    }
}

impl CatalogProvider for StaticCatalog {
    fn products(&self) -> &[Product] {
        &self.products
    }

    fn categories(&self) -> &[Category] {
        &self.categories
    }

    fn initial_cart(&self) -> Vec<LineItem> {
        self.initial_cart.clone()
    }
}

// =============================================================================
// Sample Data
// =============================================================================

const IMG_HEADPHONES: &str =
    "https://images.pexels.com/photos/3394650/pexels-photo-3394650.jpeg?auto=compress&cs=tinysrgb&w=400";
const IMG_WATCH: &str =
    "https://images.pexels.com/photos/437037/pexels-photo-437037.jpeg?auto=compress&cs=tinysrgb&w=400";
const IMG_SHOES: &str =
    "https://images.pexels.com/photos/2529148/pexels-photo-2529148.jpeg?auto=compress&cs=tinysrgb&w=400";
const IMG_COFFEE: &str =
    "https://images.pexels.com/photos/4226806/pexels-photo-4226806.jpeg?auto=compress&cs=tinysrgb&w=400";
const IMG_BAG: &str =
    "https://images.pexels.com/photos/2905238/pexels-photo-2905238.jpeg?auto=compress&cs=tinysrgb&w=400";
const IMG_SPEAKER: &str =
    "https://images.pexels.com/photos/3394651/pexels-photo-3394651.jpeg?auto=compress&cs=tinysrgb&w=400";
const IMG_FASHION: &str =
    "https://images.pexels.com/photos/1926769/pexels-photo-1926769.jpeg?auto=compress&cs=tinysrgb&w=600";
const IMG_GARDEN: &str =
    "https://images.pexels.com/photos/1080721/pexels-photo-1080721.jpeg?auto=compress&cs=tinysrgb&w=600";

fn sample_products() -> Vec<Product> {
    let mut headphones = Product::listing(
        "1",
        "Wireless Headphones",
        Money::from_cents(7999),
        4.5,
        "Electronics",
        IMG_HEADPHONES,
    );
    headphones.original_price = Some(Money::from_cents(9999));
    headphones.review_count = 128;
    headphones.description = Some(
        "Experience premium sound quality with our latest wireless headphones. \
         Featuring active noise cancellation, 30-hour battery life, and \
         crystal-clear audio for all your favorite music."
            .to_string(),
    );
    headphones.colors = vec!["Black".into(), "White".into(), "Blue".into()];
    headphones.features = vec![
        "Active Noise Cancellation".into(),
        "30-hour battery life".into(),
        "Wireless charging case".into(),
        "Premium sound quality".into(),
        "Quick charge: 15 min = 3 hours".into(),
    ];

    vec![
        headphones,
        Product::listing("2", "Smart Watch", Money::from_cents(19999), 4.8, "Electronics", IMG_WATCH),
        Product::listing("3", "Running Shoes", Money::from_cents(8999), 4.3, "Fashion", IMG_SHOES),
        Product::listing("4", "Coffee Maker", Money::from_cents(14999), 4.6, "Home", IMG_COFFEE),
        Product::listing("5", "Laptop Bag", Money::from_cents(4599), 4.2, "Accessories", IMG_BAG),
        Product::listing(
            "6",
            "Bluetooth Speaker",
            Money::from_cents(5999),
            4.4,
            "Electronics",
            IMG_SPEAKER,
        ),
    ]
}

fn sample_categories() -> Vec<Category> {
    let category = |id: &str, name: &str, accent: &str, image: &str, count: u32| Category {
        id: id.to_string(),
        name: name.to_string(),
        accent_color: accent.to_string(),
        image: image.to_string(),
        product_count: count,
    };

    vec![
        category("1", "Electronics", "#2563EB", IMG_HEADPHONES, 245),
        category("2", "Fashion", "#7C3AED", IMG_FASHION, 189),
        category("3", "Home & Garden", "#10B981", IMG_GARDEN, 156),
        category("4", "Audio", "#F97316", IMG_SPEAKER, 87),
        category("5", "Wearables", "#EF4444", IMG_WATCH, 124),
        category("6", "Kitchen", "#8B5CF6", IMG_COFFEE, 98),
    ]
}

fn sample_cart() -> Vec<LineItem> {
    vec![
        LineItem::new("1", "Wireless Headphones", Money::from_cents(7999), 1)
            .with_image(IMG_HEADPHONES)
            .with_color("Black"),
        LineItem::new("2", "Smart Watch", Money::from_cents(19999), 2)
            .with_image(IMG_WATCH)
            .with_color("Silver"),
        LineItem::new("3", "Running Shoes", Money::from_cents(8999), 1)
            .with_image(IMG_SHOES)
            .with_size("US 9")
            .with_color("Navy"),
    ]
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::Ledger;
    use crate::pricing::Pricing;

    fn names(products: &[&Product]) -> Vec<String> {
        products.iter().map(|p| p.name.clone()).collect()
    }

    #[test]
    fn test_filter_by_name_is_case_insensitive() {
        let catalog = StaticCatalog::sample();

        for query in ["watch", "WATCH", "Watch", "wAtCh", "t wa"] {
            let hits = filter_by_name(catalog.products(), query);
            assert_eq!(names(&hits), ["Smart Watch"], "query {query:?}");
        }
    }

    #[test]
    fn test_filter_by_name_keeps_whitespace() {
        let catalog = StaticCatalog::sample();

        assert!(filter_by_name(catalog.products(), "watch ").is_empty());
        assert!(filter_by_name(catalog.products(), "   ").is_empty());
        assert_eq!(filter_by_name(catalog.products(), " ").len(), 6);
        assert!(filter_by_name(catalog.products(), &"w".repeat(101)).is_empty());
    }

    #[test]
    fn test_filter_by_name_substring() {
        let catalog = StaticCatalog::sample();

        let hits = filter_by_name(catalog.products(), "er");
        assert_eq!(
            names(&hits),
            ["Coffee Maker", "Bluetooth Speaker"],
        );

        let hits = filter_by_name(catalog.products(), "es");
        assert_eq!(names(&hits), ["Wireless Headphones", "Running Shoes"]);
    }

    #[test]
    fn test_filter_by_name_empty_and_no_match() {
        let catalog = StaticCatalog::sample();

        assert_eq!(filter_by_name(catalog.products(), "").len(), 6);
        assert!(filter_by_name(catalog.products(), "television").is_empty());
    }

    #[test]
    fn test_filter_by_category() {
        let catalog = StaticCatalog::sample();

        let hits = filter_by_category(catalog.products(), "electronics");
        assert_eq!(
            names(&hits),
            ["Wireless Headphones", "Smart Watch", "Bluetooth Speaker"]
        );
        assert!(filter_by_category(catalog.products(), "Garden").is_empty());
    }

    #[test]
    fn test_favorites_toggle() {
        let mut favorites = Favorites::new();

        assert!(favorites.toggle("2"));
        assert!(favorites.toggle("5"));
        assert!(favorites.contains("2"));
        assert_eq!(favorites.ids(), ["2", "5"]);

        assert!(!favorites.toggle("2"));
        assert!(!favorites.contains("2"));
        assert_eq!(favorites.len(), 1);

        assert!(!favorites.toggle("5"));
        assert!(favorites.is_empty());
    }

    #[test]
    fn test_detail_selection_quantity_floor() {
        let mut selection = DetailSelection::new();

        assert_eq!(selection.adjust(1), 2);
        assert_eq!(selection.adjust(-1), 1);
        assert_eq!(selection.adjust(-1), 1);
        assert_eq!(selection.adjust(-100), 1);
    }

    #[test]
    fn test_detail_selection_color() {
        let catalog = StaticCatalog::sample();
        let headphones = catalog.product("1").unwrap();
        let watch = catalog.product("2").unwrap();
        let mut selection = DetailSelection::new();

        assert_eq!(selection.selected_color(headphones), Some("Black"));

        selection.select_color(headphones, 2);
        assert_eq!(selection.selected_color(headphones), Some("Blue"));

        selection.select_color(headphones, 9);
        assert_eq!(selection.color_index(), 2);

        assert_eq!(selection.selected_color(watch), None);
    }

    #[test]
    fn test_detail_selection_to_line_item() {
        let catalog = StaticCatalog::sample();
        let headphones = catalog.product("1").unwrap();
        let mut selection = DetailSelection::new();
        selection.adjust(2);
        selection.select_color(headphones, 1);

        let item = selection.to_line_item(headphones);

        assert_eq!(item.id, "1");
        assert_eq!(item.quantity, 3);
        assert_eq!(item.color.as_deref(), Some("White"));
        assert_eq!(item.unit_price.cents(), 7999);
    }

    #[test]
    fn test_sample_catalog_lookup() {
        let catalog = StaticCatalog::sample();

        assert_eq!(catalog.products().len(), 6);
        assert_eq!(catalog.categories().len(), 6);
        assert_eq!(catalog.product("4").unwrap().name, "Coffee Maker");
        assert!(catalog.product("99").is_none());
        assert!(catalog.product("1").unwrap().is_discounted());
    }

    #[test]
    fn test_sample_cart_seeds_ledger() {
        let catalog = StaticCatalog::sample();
        let ledger = Ledger::with_items(catalog.initial_cart()).unwrap();

        let summary = ledger.summarize(&Pricing::default());
        assert_eq!(summary.item_count, 3);
        assert_eq!(summary.total.cents(), 62555);
        assert_eq!(ledger.get("3").unwrap().size.as_deref(), Some("US 9"));
    }

    #[test]
    fn test_default_provider_cart_is_empty() {
        let catalog = StaticCatalog::new(sample_products(), Vec::new());
        assert!(catalog.initial_cart().is_empty());
    }
}
