//! # Profile State
//!
//! Account-screen switches and the order history shown beneath them.
//!
//! Preferences live behind a mutex like the cart does. The order list is
//! fixed for the session and read without locking.

use std::sync::{Arc, Mutex, PoisonError};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use shop_core::{Money, OrderRecord, OrderStatus};
use ts_rs::TS;

/// User-facing switches on the profile screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Preferences {
    /// Push notifications (default on)
    pub notifications: bool,

    /// Dark theme (default off)
    pub dark_mode: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Preferences {
            notifications: true,
            dark_mode: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ProfileState {
    preferences: Arc<Mutex<Preferences>>,
    recent_orders: Arc<[OrderRecord]>,
}

impl ProfileState {
    pub fn new(recent_orders: Vec<OrderRecord>) -> Self {
        ProfileState {
            preferences: Arc::new(Mutex::new(Preferences::default())),
            recent_orders: recent_orders.into(),
        }
    }

    /// Profile with the demo order history.
    pub fn sample() -> Self {
        Self::new(sample_orders())
    }

    pub fn preferences(&self) -> Preferences {
        *self.lock()
    }

    pub fn recent_orders(&self) -> &[OrderRecord] {
        &self.recent_orders
    }

    pub fn set_notifications(&self, enabled: bool) -> Preferences {
        let mut prefs = self.lock();
        prefs.notifications = enabled;
        *prefs
    }

    pub fn toggle_notifications(&self) -> Preferences {
        let mut prefs = self.lock();
        prefs.notifications = !prefs.notifications;
        *prefs
    }

    pub fn set_dark_mode(&self, enabled: bool) -> Preferences {
        let mut prefs = self.lock();
        prefs.dark_mode = enabled;
        *prefs
    }

    pub fn toggle_dark_mode(&self) -> Preferences {
        let mut prefs = self.lock();
        prefs.dark_mode = !prefs.dark_mode;
        *prefs
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Preferences> {
        self.preferences.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for ProfileState {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

fn sample_orders() -> Vec<OrderRecord> {
    // (id, number, y, m, d, total cents, status, items)
    let rows = [
        ("1", "#12345", 2024, 1, 15, 12998, OrderStatus::Delivered, 2),
        ("2", "#12344", 2024, 1, 10, 7999, OrderStatus::Shipped, 1),
        ("3", "#12343", 2024, 1, 5, 24597, OrderStatus::Processing, 3),
    ];

    rows.into_iter()
        .filter_map(|(id, number, y, m, d, cents, status, items)| {
            Some(OrderRecord {
                id: id.to_string(),
                order_number: number.to_string(),
                placed_on: NaiveDate::from_ymd_opt(y, m, d)?,
                total: Money::from_cents(cents),
                status,
                item_count: items,
            })
        })
        .collect()
}
