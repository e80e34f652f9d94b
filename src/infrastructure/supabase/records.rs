use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::services::{InsertServiceEntity, ServiceEntity, SocialLinks};
use crate::domain::value_objects::enums::cities::City;

/// Row shape of the `services` table. Timestamps are epoch millis on the
/// wire; `socials` is a JSON object column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceRecord {
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
    #[serde(default)]
    pub price: Option<String>,
    pub image_url: String,
    #[serde(default)]
    pub images: Vec<String>,
    pub star_rating: f32,
    pub plan_id: String,
    #[serde(default)]
    pub premium_override: bool,
    #[serde(default)]
    pub is_premium_verified: bool,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub expiry_date: DateTime<Utc>,
    #[serde(default)]
    pub socials: SocialLinks,
}

impl From<ServiceRecord> for ServiceEntity {
    fn from(record: ServiceRecord) -> Self {
        Self {
            id: record.id,
            title: record.title,
            category: record.category,
            professional_name: record.professional_name,
            email: record.email,
            phone: record.phone,
            description: record.description,
            location: record.location,
            neighborhood: record.neighborhood,
            has_physical_address: record.has_physical_address,
            address: record.address,
            price: record.price,
            image_url: record.image_url,
            images: record.images,
            star_rating: record.star_rating,
            plan_id: record.plan_id,
            premium_override: record.premium_override,
            is_premium_verified: record.is_premium_verified,
            // Wall-clock derived; the lifecycle recomputes it on read.
            is_trial_active: false,
            created_at: record.created_at,
            expiry_date: record.expiry_date,
            socials: record.socials,
        }
    }
}

impl From<ServiceEntity> for ServiceRecord {
    fn from(service: ServiceEntity) -> Self {
        Self {
            id: service.id,
            title: service.title,
            category: service.category,
            professional_name: service.professional_name,
            email: service.email,
            phone: service.phone,
            description: service.description,
            location: service.location,
            neighborhood: service.neighborhood,
            has_physical_address: service.has_physical_address,
            address: service.address,
            price: service.price,
            image_url: service.image_url,
            images: service.images,
            star_rating: service.star_rating,
            plan_id: service.plan_id,
            premium_override: service.premium_override,
            is_premium_verified: service.is_premium_verified,
            created_at: service.created_at,
            expiry_date: service.expiry_date,
            socials: service.socials,
        }
    }
}

/// Insert payload for `services`. The database assigns `id`; `created_at`
/// and the matching `expiry_date` are stamped by the adapter at insert time.
#[derive(Debug, Clone, Serialize)]
pub struct InsertServiceRecord {
    pub title: String,
    pub category: String,
    pub professional_name: String,
    pub email: String,
    pub phone: String,
    pub description: String,
    pub location: City,
    pub neighborhood: String,
    pub has_physical_address: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    pub image_url: String,
    pub images: Vec<String>,
    pub star_rating: f32,
    pub plan_id: String,
    pub is_premium_verified: bool,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub expiry_date: DateTime<Utc>,
    pub socials: SocialLinks,
}

impl InsertServiceRecord {
    pub fn from_insert(insert: InsertServiceEntity, now: DateTime<Utc>) -> Self {
        let expiry_date = now + chrono::Duration::days(i64::from(insert.duration_days));
        Self {
            title: insert.title,
            category: insert.category,
            professional_name: insert.professional_name,
            email: insert.email,
            phone: insert.phone,
            description: insert.description,
            location: insert.location,
            neighborhood: insert.neighborhood,
            has_physical_address: insert.has_physical_address,
            address: insert.address,
            price: insert.price,
            image_url: insert.image_url,
            images: insert.images,
            star_rating: insert.star_rating,
            plan_id: insert.plan_id,
            is_premium_verified: insert.is_premium_verified,
            created_at: now,
            expiry_date,
            socials: insert.socials,
        }
    }
}

/// Insert payload for the append-only `admin_logs` table.
#[derive(Debug, Clone, Serialize)]
pub struct InsertAdminLogRecord {
    pub admin_user: String,
    pub action: String,
    pub details: String,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn timestamps_serialize_as_epoch_millis() {
        let now = Utc.timestamp_millis_opt(1_700_000_000_000).unwrap();
        let record = InsertAdminLogRecord {
            admin_user: "ana@example.com".to_string(),
            action: "Remoção de Anúncio".to_string(),
            details: "Anúncio ID svc-1 removido pelo usuário.".to_string(),
            timestamp: now,
        };

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["timestamp"], 1_700_000_000_000_i64);
    }

    #[test]
    fn insert_record_keeps_expiry_equal_to_created_plus_duration() {
        let now = Utc.timestamp_millis_opt(0).unwrap();
        let insert = InsertServiceEntity {
            title: "Aulas de violão".to_string(),
            category: "Aulas".to_string(),
            professional_name: "João".to_string(),
            email: "joao@example.com".to_string(),
            phone: "71977776666".to_string(),
            description: "Iniciantes e intermediários".to_string(),
            location: City::LauroDeFreitas,
            neighborhood: "Ipitanga".to_string(),
            has_physical_address: false,
            address: None,
            price: None,
            image_url: "https://img.example/joao.jpg".to_string(),
            images: Vec::new(),
            star_rating: 5.0,
            plan_id: "quarterly".to_string(),
            duration_days: 90,
            is_premium_verified: false,
            socials: SocialLinks::default(),
        };

        let record = InsertServiceRecord::from_insert(insert, now);
        assert_eq!(record.expiry_date.timestamp_millis(), 90 * 86_400_000);
    }

    #[test]
    fn city_round_trips_through_its_display_name() {
        let json = serde_json::to_string(&City::SimoesFilho).unwrap();
        assert_eq!(json, "\"Simões Filho\"");
        let city: City = serde_json::from_str(&json).unwrap();
        assert_eq!(city, City::SimoesFilho);
    }
}
