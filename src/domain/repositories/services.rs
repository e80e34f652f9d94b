use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;

use crate::domain::entities::services::{InsertServiceEntity, ServiceEntity};

#[async_trait]
#[automock]
pub trait ServiceRepository: Send + Sync {
    async fn get_services(&self) -> Result<Vec<ServiceEntity>>;
    /// Persists a new listing; the store assigns `id` and `created_at` and
    /// keeps `expiry_date = created_at + duration_days`.
    async fn create_service(&self, insert: InsertServiceEntity) -> Result<ServiceEntity>;
    async fn update_service(&self, service: ServiceEntity) -> Result<ServiceEntity>;
    async fn delete_service(&self, service_id: &str) -> Result<()>;
}
