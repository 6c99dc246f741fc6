//! Expiry classification.
//!
//! Pure functions of `(expires_at, now)`. Callers pass the current time in at
//! render time so every view recomputes freshly.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use fridgekeeper_core::ValueObject;

const MILLIS_PER_DAY: i64 = 86_400_000;

/// Freshness band of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExpiryStatus {
    Expired,
    ExpiringSoon,
    Expiring,
    Good,
    Fresh,
}

impl ExpiryStatus {
    /// Band for a whole-day distance to expiry.
    pub fn from_days(days: i64) -> Self {
        match days {
            d if d < 0 => ExpiryStatus::Expired,
            0..=2 => ExpiryStatus::ExpiringSoon,
            3..=5 => ExpiryStatus::Expiring,
            6..=10 => ExpiryStatus::Good,
            _ => ExpiryStatus::Fresh,
        }
    }

    /// Progress-bar fill for the band (0 = most urgent). Display only.
    pub fn urgency_percent(&self) -> u8 {
        match self {
            ExpiryStatus::Expired => 0,
            ExpiryStatus::ExpiringSoon => 25,
            ExpiryStatus::Expiring => 50,
            ExpiryStatus::Good => 75,
            ExpiryStatus::Fresh => 100,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ExpiryStatus::Expired => "expired",
            ExpiryStatus::ExpiringSoon => "expiring-soon",
            ExpiryStatus::Expiring => "expiring",
            ExpiryStatus::Good => "good",
            ExpiryStatus::Fresh => "fresh",
        }
    }

    /// Badge text.
    pub fn label(&self) -> &'static str {
        match self {
            ExpiryStatus::Expired => "Expired",
            ExpiryStatus::ExpiringSoon => "Expiring Soon",
            ExpiryStatus::Expiring => "Expiring",
            ExpiryStatus::Good => "Good",
            ExpiryStatus::Fresh => "Fresh",
        }
    }
}

impl core::fmt::Display for ExpiryStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of classifying one expiry date against `now`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Freshness {
    pub status: ExpiryStatus,
    pub urgency_percent: u8,
    /// `ceil((expires_at - now) / 1 day)`; negative once expired.
    pub days_remaining: i64,
}

impl ValueObject for Freshness {}

/// Whole days until expiry, rounded up.
///
/// Anything less than a full day past expiry rounds up to 0, so an item that
/// expired an hour ago is still "expiring soon", not "expired".
pub fn days_until(expires_at: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let millis = (expires_at - now).num_milliseconds();
    let whole = millis.div_euclid(MILLIS_PER_DAY);
    if millis.rem_euclid(MILLIS_PER_DAY) > 0 {
        whole + 1
    } else {
        whole
    }
}

pub fn classify(expires_at: DateTime<Utc>, now: DateTime<Utc>) -> Freshness {
    let days_remaining = days_until(expires_at, now);
    let status = ExpiryStatus::from_days(days_remaining);
    Freshness {
        status,
        urgency_percent: status.urgency_percent(),
        days_remaining,
    }
}
