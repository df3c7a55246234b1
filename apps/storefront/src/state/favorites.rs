//! Favorited product ids for the session.

use std::sync::{Arc, Mutex, PoisonError};

use shop_core::Favorites;

#[derive(Debug, Clone, Default)]
pub struct FavoritesState {
    favorites: Arc<Mutex<Favorites>>,
}

impl FavoritesState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_favorites<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Favorites) -> R,
    {
        let favorites = self.favorites.lock().unwrap_or_else(PoisonError::into_inner);
        f(&favorites)
    }

    pub fn with_favorites_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Favorites) -> R,
    {
        let mut favorites = self.favorites.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut favorites)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.with_favorites(|f| f.contains(id))
    }
}
