use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Capabilities derived from a listing's plan and creation time. Never
/// persisted as a block; recomputed whenever the listing is evaluated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Entitlements {
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub expiry_date: DateTime<Utc>,
    pub is_trial_active: bool,
    pub is_premium_verified: bool,
    pub max_photos: i32,
}
