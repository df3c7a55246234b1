//! # Commands Module
//!
//! Functions the presentation layer calls into.
//!
//! Each command takes exactly the session state it needs, borrowed from a
//! [`crate::Storefront`], and returns a serializable response or an
//! [`crate::error::ApiError`].
//!
//! ## Command Categories
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Storefront Commands                                  │
//! │                                                                         │
//! │  ┌──────────────────────┐  ┌──────────────────────┐  ┌───────────────┐  │
//! │  │   Cart Commands      │  │  Product Commands    │  │Profile Cmds   │  │
//! │  │   (cart.rs)          │  │  (product.rs)        │  │(profile.rs)   │  │
//! │  │                      │  │                      │  │               │  │
//! │  │ • get_cart           │  │ • search_products    │  │ • get_profile │  │
//! │  │ • add_to_cart        │  │ • get_product        │  │ • set_notif.. │  │
//! │  │ • add_selection_..   │  │ • list_categories    │  │ • toggle_dark │  │
//! │  │ • adjust_cart_item   │  │ • products_in_cat..  │  │   _mode       │  │
//! │  │ • set_cart_item_qty  │  │ • toggle_favorite    │  │               │  │
//! │  │ • remove_from_cart   │  │                      │  │               │  │
//! │  │ • clear_cart         │  │                      │  │               │  │
//! │  └──────────────────────┘  └──────────────────────┘  └───────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod cart;
pub mod product;
pub mod profile;

pub use cart::{
    add_selection_to_cart, add_to_cart, adjust_cart_item, clear_cart, get_cart, remove_from_cart,
    set_cart_item_quantity, AddToCartRequest, CartResponse, SummaryDisplay,
};
pub use product::{
    get_product, list_categories, products_in_category, search_products, toggle_favorite,
    ProductCard, ProductDetail,
};
pub use profile::{get_profile, set_notifications, toggle_dark_mode, ProfileResponse};
