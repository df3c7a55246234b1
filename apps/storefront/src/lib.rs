//! # Storefront Session Library
//!
//! Session layer of the mobile storefront. It owns one shopper's cart,
//! favorites and profile switches, and exposes them through command
//! functions with serializable responses.
//!
//! ## Module Organization
//! ```text
//! storefront/
//! ├── lib.rs          ◄─── You are here (Storefront session & tracing)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── cart.rs     ◄─── Ledger behind Arc<Mutex>
//! │   ├── config.rs   ◄─── Store settings & pricing
//! │   ├── favorites.rs◄─── Favorited product ids
//! │   └── profile.rs  ◄─── Preferences & order history
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── cart.rs     ◄─── Cart manipulation commands
//! │   ├── product.rs  ◄─── Search, detail, categories, favorites
//! │   └── profile.rs  ◄─── Profile screen commands
//! └── error.rs        ◄─── API & config error types
//! ```
//!
//! ## Session Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Storefront Session                                   │
//! │                                                                         │
//! │  1. init_tracing()            (once per process)                        │
//! │  2. ConfigState::load(..)     env > storefront.toml > defaults          │
//! │  3. Storefront::new(config, catalog)                                    │
//! │       • session_id = UUID v4                                            │
//! │       • cart seeded from catalog.initial_cart()                         │
//! │  4. commands::*(storefront.cart(), storefront.config(), ...)            │
//! │  5. drop(storefront)          session over, nothing persisted           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod error;
pub mod state;

use shop_core::{CatalogProvider, CoreResult, StaticCatalog};
use tracing::info;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

use state::{CartState, ConfigState, FavoritesState, ProfileState};

/// One shopper's session.
///
/// Commands borrow the pieces they need through the accessors, e.g.
/// `commands::get_cart(sf.cart(), sf.config())`.
#[derive(Debug)]
pub struct Storefront<C = StaticCatalog> {
    session_id: String,
    config: ConfigState,
    catalog: C,
    cart: CartState,
    favorites: FavoritesState,
    profile: ProfileState,
}

impl<C: CatalogProvider> Storefront<C> {
    /// Starts a session, seeding the cart from `catalog.initial_cart()`.
    ///
    /// Fails if the catalog hands over an invalid starting item.
    pub fn new(config: ConfigState, catalog: C) -> CoreResult<Self> {
        Self::with_profile(config, catalog, ProfileState::default())
    }

    pub fn with_profile(config: ConfigState, catalog: C, profile: ProfileState) -> CoreResult<Self> {
        let cart = CartState::seeded(catalog.initial_cart())?;
        let session_id = Uuid::new_v4().to_string();

        info!(
            session_id = %session_id,
            store = %config.store_name,
            cart_items = cart.with_ledger(|l| l.len()),
            "Storefront session started"
        );

        Ok(Storefront {
            session_id,
            config,
            catalog,
            cart,
            favorites: FavoritesState::new(),
            profile,
        })
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn config(&self) -> &ConfigState {
        &self.config
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    pub fn cart(&self) -> &CartState {
        &self.cart
    }

    pub fn favorites(&self) -> &FavoritesState {
        &self.favorites
    }

    pub fn profile(&self) -> &ProfileState {
        &self.profile
    }
}

impl Storefront<StaticCatalog> {
    /// Demo session: sample catalog, sample orders, config from environment.
    pub fn sample() -> CoreResult<Self> {
        Self::with_profile(
            ConfigState::from_env(),
            StaticCatalog::sample(),
            ProfileState::sample(),
        )
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=storefront=trace` - Show trace for this crate only
/// - Default: INFO, DEBUG for `storefront`
///
/// Safe to call more than once; later calls are ignored.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,storefront=debug"));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
