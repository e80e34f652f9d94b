use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::enums::cities::City;

/// Social media links attached to a listing, one optional URL per platform.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SocialLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tiktok: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kwai: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub youtube: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub whatsapp: Option<String>,
}

/// A published service listing. `id` and `created_at` are assigned by the
/// persisted store on creation and never change afterwards; `expiry_date`,
/// `is_premium_verified` and `is_trial_active` are derived from the owning
/// plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServiceEntity {
    pub id: String,
    pub title: String,
    pub category: String,
    pub professional_name: String,
    pub email: String,
    pub phone: String,
    pub description: String,
    pub location: City,
    pub neighborhood: String,
    #[serde(default)]
    pub has_physical_address: bool,
    #[serde(default)]
    pub address: Option<String>,
    /// Free-form display price ("R$ 80 / hora").
    #[serde(default)]
    pub price: Option<String>,
    pub image_url: String,
    /// Gallery, bounded by the owning plan's photo quota.
    #[serde(default)]
    pub images: Vec<String>,
    pub star_rating: f32,
    pub plan_id: String,
    /// Administrative verification grant, independent of the plan tier. Set
    /// only by the admin surface; `is_premium_verified` derives from it.
    #[serde(default)]
    pub premium_override: bool,
    #[serde(default)]
    pub is_premium_verified: bool,
    #[serde(default)]
    pub is_trial_active: bool,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub expiry_date: DateTime<Utc>,
    #[serde(default)]
    pub socials: SocialLinks,
}

/// Caller-supplied fields for a new listing. `duration_days` and
/// `is_premium_verified` are filled in by the lifecycle from the resolved
/// plan before the insert reaches the store; the store assigns `id`,
/// `created_at` and the matching `expiry_date`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InsertServiceEntity {
    pub title: String,
    pub category: String,
    pub professional_name: String,
    pub email: String,
    pub phone: String,
    pub description: String,
    pub location: City,
    pub neighborhood: String,
    #[serde(default)]
    pub has_physical_address: bool,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub price: Option<String>,
    pub image_url: String,
    #[serde(default)]
    pub images: Vec<String>,
    pub star_rating: f32,
    pub plan_id: String,
    #[serde(default)]
    pub duration_days: i32,
    #[serde(default)]
    pub is_premium_verified: bool,
    #[serde(default)]
    pub socials: SocialLinks,
}
