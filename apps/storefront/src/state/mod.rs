//! # State Module
//!
//! Per-session state owned by a [`crate::Storefront`].
//!
//! Each concern gets its own state type so a command names exactly the state
//! it touches.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Storefront (one per session)                    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                              │                                          │
//! │     ┌───────────────┬────────┴──────┬──────────────────┐               │
//! │     ▼               ▼               ▼                  ▼                │
//! │  ┌──────────┐  ┌──────────────┐  ┌──────────────┐  ┌─────────────┐     │
//! │  │CartState │  │FavoritesState│  │ ProfileState │  │ ConfigState │     │
//! │  │Arc<Mutex<│  │Arc<Mutex<    │  │ Arc<Mutex<   │  │ store name  │     │
//! │  │ Ledger>> │  │ Favorites>>  │  │ Preferences>>│  │ pricing     │     │
//! │  └──────────┘  └──────────────┘  └──────────────┘  └─────────────┘     │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • Cart, Favorites, Profile: exclusive access through a Mutex          │
//! │  • ConfigState: read-only after loading                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cart;
mod config;
mod favorites;
mod profile;

pub use cart::CartState;
pub use config::{ConfigState, ENV_SHIPPING_CENTS, ENV_STORE_NAME, ENV_TAX_RATE};
pub use favorites::FavoritesState;
pub use profile::{Preferences, ProfileState};
