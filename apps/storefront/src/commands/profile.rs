//! Profile screen commands.

use serde::Serialize;
use shop_core::OrderRecord;
use tracing::debug;
use ts_rs::TS;

use crate::state::{FavoritesState, Preferences, ProfileState};

#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ProfileResponse {
    pub preferences: Preferences,
    pub recent_orders: Vec<OrderRecord>,
    pub favorite_count: usize,
}

pub fn get_profile(profile: &ProfileState, favorites: &FavoritesState) -> ProfileResponse {
    debug!("get_profile command");
    ProfileResponse {
        preferences: profile.preferences(),
        recent_orders: profile.recent_orders().to_vec(),
        favorite_count: favorites.with_favorites(|f| f.len()),
    }
}

pub fn set_notifications(profile: &ProfileState, enabled: bool) -> Preferences {
    debug!(enabled = enabled, "set_notifications command");
    profile.set_notifications(enabled)
}

pub fn toggle_dark_mode(profile: &ProfileState) -> Preferences {
    let prefs = profile.toggle_dark_mode();
    debug!(dark_mode = prefs.dark_mode, "toggle_dark_mode command");
    prefs
}
