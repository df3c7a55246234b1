//! # Product Commands
//!
//! Commands for the home grid, search, categories and product detail.
//!
//! ## Search Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Product Search Flow                                  │
//! │                                                                         │
//! │  User types "watch"                                                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  search_products("watch")                                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌───────────────────────────────────────────┐                         │
//! │  │  filter_by_name: case-insensitive match   │                         │
//! │  │  on the query exactly as typed            │                         │
//! │  └───────────────────────────────────────────┘                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Vec<ProductCard> in catalog order, favorites flagged                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::time::Instant;

use serde::Serialize;
use shop_core::catalog::{filter_by_category, filter_by_name};
use shop_core::{CatalogProvider, Category, CoreError, Money, Product};
use tracing::{debug, info};
use ts_rs::TS;

use crate::commands::cart::quantity_in_cart;
use crate::error::ApiError;
use crate::state::{CartState, FavoritesState};

/// Product as shown on a grid card.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ProductCard {
    pub id: String,
    pub name: String,
    pub price: Money,
    pub rating: f32,
    pub category: String,
    pub image: String,
    pub is_favorite: bool,
    pub is_discounted: bool,
}

impl ProductCard {
    fn new(product: &Product, favorites: &FavoritesState) -> Self {
        ProductCard {
            id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            rating: product.rating,
            category: product.category.clone(),
            image: product.image.clone(),
            is_favorite: favorites.contains(&product.id),
            is_discounted: product.is_discounted(),
        }
    }
}

/// Everything the product detail screen renders.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ProductDetail {
    pub product: Product,
    pub is_favorite: bool,
    /// Units of this product already in the cart.
    pub quantity_in_cart: Option<i64>,
}

/// Searches the catalog by product name.
///
/// An empty query returns the whole catalog. A query nothing matches returns
/// an empty list, never an error.
pub fn search_products<C: CatalogProvider>(
    catalog: &C,
    favorites: &FavoritesState,
    query: &str,
) -> Vec<ProductCard> {
    let start = Instant::now();
    debug!(query = %query, "search_products command");

    let results: Vec<ProductCard> = filter_by_name(catalog.products(), query)
        .into_iter()
        .map(|p| ProductCard::new(p, favorites))
        .collect();

    info!(
        query = %query,
        results = results.len(),
        elapsed_us = start.elapsed().as_micros() as u64,
        "Product search completed"
    );

    results
}

/// Gets one product with its detail fields.
pub fn get_product<C: CatalogProvider>(
    catalog: &C,
    favorites: &FavoritesState,
    cart: &CartState,
    id: &str,
) -> Result<ProductDetail, ApiError> {
    debug!(id = %id, "get_product command");

    let product = catalog
        .product(id)
        .ok_or_else(|| CoreError::ProductNotFound(id.to_string()))?;

    Ok(ProductDetail {
        product: product.clone(),
        is_favorite: favorites.contains(id),
        quantity_in_cart: quantity_in_cart(cart, id),
    })
}

pub fn list_categories<C: CatalogProvider>(catalog: &C) -> Vec<Category> {
    debug!("list_categories command");
    catalog.categories().to_vec()
}

/// Products whose category matches `category` (case-insensitive).
pub fn products_in_category<C: CatalogProvider>(
    catalog: &C,
    favorites: &FavoritesState,
    category: &str,
) -> Vec<ProductCard> {
    debug!(category = %category, "products_in_category command");
    filter_by_category(catalog.products(), category)
        .into_iter()
        .map(|p| ProductCard::new(p, favorites))
        .collect()
}

/// Flips a product's favorite flag. Returns the new state.
pub fn toggle_favorite<C: CatalogProvider>(
    catalog: &C,
    favorites: &FavoritesState,
    id: &str,
) -> Result<bool, ApiError> {
    if catalog.product(id).is_none() {
        return Err(CoreError::ProductNotFound(id.to_string()).into());
    }

    let favorite = favorites.with_favorites_mut(|f| f.toggle(id));
    debug!(id = %id, favorite = favorite, "toggle_favorite command");
    Ok(favorite)
}
