use anyhow::{Result, anyhow};
use async_trait::async_trait;
use chrono::{Duration, Utc};
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::domain::entities::admin_logs::AdminLogEntity;
use crate::domain::entities::services::{InsertServiceEntity, ServiceEntity};
use crate::domain::repositories::{admin_logs::AdminLogRepository, services::ServiceRepository};

/// In-process stand-in for the persisted store. Assigns ids and timestamps
/// the way the remote store would; used by integration tests and local runs
/// without a Supabase project.
#[derive(Default)]
pub struct InMemoryStore {
    services: Mutex<Vec<ServiceEntity>>,
    logs: Mutex<Vec<AdminLogEntity>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded(services: Vec<ServiceEntity>) -> Self {
        Self {
            services: Mutex::new(services),
            logs: Mutex::new(Vec::new()),
        }
    }

    pub async fn logs(&self) -> Vec<AdminLogEntity> {
        self.logs.lock().await.clone()
    }
}

#[async_trait]
impl ServiceRepository for InMemoryStore {
    async fn get_services(&self) -> Result<Vec<ServiceEntity>> {
        let mut services = self.services.lock().await.clone();
        services.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(services)
    }

    async fn create_service(&self, insert: InsertServiceEntity) -> Result<ServiceEntity> {
        let created_at = Utc::now();
        let service = ServiceEntity {
            id: Uuid::new_v4().to_string(),
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
            premium_override: false,
            is_premium_verified: insert.is_premium_verified,
            is_trial_active: false,
            created_at,
            expiry_date: created_at + Duration::days(i64::from(insert.duration_days)),
            socials: insert.socials,
        };

        self.services.lock().await.push(service.clone());
        Ok(service)
    }

    async fn update_service(&self, service: ServiceEntity) -> Result<ServiceEntity> {
        let mut services = self.services.lock().await;
        let existing = services
            .iter_mut()
            .find(|candidate| candidate.id == service.id)
            .ok_or_else(|| anyhow!("service {} not found", service.id))?;
        *existing = service.clone();
        Ok(service)
    }

    async fn delete_service(&self, service_id: &str) -> Result<()> {
        let mut services = self.services.lock().await;
        let before = services.len();
        services.retain(|candidate| candidate.id != service_id);
        if services.len() == before {
            return Err(anyhow!("service {} not found", service_id));
        }
        Ok(())
    }
}

#[async_trait]
impl AdminLogRepository for InMemoryStore {
    async fn create_log(&self, admin_user: &str, action: &str, details: &str) -> Result<()> {
        let entry = AdminLogEntity {
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            admin_user: admin_user.to_string(),
            action: action.to_string(),
            details: details.to_string(),
        };
        self.logs.lock().await.push(entry);
        Ok(())
    }
}
