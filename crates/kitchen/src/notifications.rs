//! Expiry notifications: the bell badge and the digest behind it.

use chrono::{DateTime, Utc};
use serde::Serialize;

use fridgekeeper_inventory::{Freshness, InventoryStore, Item, days_until};

use crate::shelves::item_shelf_label;

/// Alert window used when none is configured.
pub const DEFAULT_ALERT_WINDOW_DAYS: i64 = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice<'a> {
    pub item: &'a Item,
    pub freshness: Freshness,
    pub shelf_label: &'static str,
}

impl<'a> Notice<'a> {
    fn new(item: &'a Item, now: DateTime<Utc>) -> Self {
        Self {
            item,
            freshness: item.freshness(now),
            shelf_label: item_shelf_label(item),
        }
    }
}

/// Items that need attention, split into already expired and expiring soon.
///
/// `expired` holds everything whose expiry instant has passed. `expiring`
/// holds the rest of the items at most `window_days` whole days out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpiryDigest<'a> {
    pub window_days: i64,
    pub expired: Vec<Notice<'a>>,
    pub expiring: Vec<Notice<'a>>,
}

impl<'a> ExpiryDigest<'a> {
    pub fn build(store: &'a InventoryStore, now: DateTime<Utc>, window_days: i64) -> Self {
        let (expired, expiring): (Vec<&Item>, Vec<&Item>) = store
            .list_expiring_within(window_days, now)
            .into_iter()
            .partition(|item| item.expires_at() < now);

        Self {
            window_days,
            expired: expired.into_iter().map(|item| Notice::new(item, now)).collect(),
            expiring: expiring.into_iter().map(|item| Notice::new(item, now)).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.expired.is_empty() && self.expiring.is_empty()
    }

    pub fn len(&self) -> usize {
        self.expired.len() + self.expiring.len()
    }
}

/// Count shown on the bell: items between 0 and `window_days` whole days
/// from expiry. Items more than a day past expiry are left to the digest.
pub fn badge_count(store: &InventoryStore, now: DateTime<Utc>, window_days: i64) -> usize {
    store
        .iter()
        .filter(|item| (0..=window_days).contains(&days_until(item.expires_at(), now)))
        .count()
}
