use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use chrono::Utc;
use reqwest::header::{HeaderMap, HeaderValue};
use tracing::debug;

use crate::config::config_model::Supabase;
use crate::domain::entities::services::{InsertServiceEntity, ServiceEntity};
use crate::domain::repositories::{admin_logs::AdminLogRepository, services::ServiceRepository};
use crate::infrastructure::supabase::records::{
    InsertAdminLogRecord, InsertServiceRecord, ServiceRecord,
};

const SERVICES_TABLE: &str = "services";
const ADMIN_LOGS_TABLE: &str = "admin_logs";

/// PostgREST adapter for the persisted store. Transport failures and
/// non-success statuses all surface as persistence errors to the lifecycle.
pub struct SupabaseRestClient {
    http: reqwest::Client,
    project_url: String,
}

impl SupabaseRestClient {
    pub fn new(config: &Supabase) -> Result<Self> {
        let mut headers = HeaderMap::new();
        let api_key = HeaderValue::from_str(&config.api_key)
            .context("SUPABASE_API_KEY contains invalid header characters")?;
        let bearer = HeaderValue::from_str(&format!("Bearer {}", config.api_key))
            .context("SUPABASE_API_KEY contains invalid header characters")?;
        headers.insert("apikey", api_key);
        headers.insert(reqwest::header::AUTHORIZATION, bearer);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .context("failed to build Supabase http client")?;

        Ok(Self {
            http,
            project_url: config.project_url.trim_end_matches('/').to_string(),
        })
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.project_url, table)
    }

    /// PostgREST returns the affected rows as an array when asked for a
    /// representation; writes here always target exactly one row.
    fn single_row(mut rows: Vec<ServiceRecord>, operation: &str) -> Result<ServiceEntity> {
        if rows.len() > 1 {
            return Err(anyhow!("{} affected {} rows, expected 1", operation, rows.len()));
        }
        rows.pop()
            .map(ServiceEntity::from)
            .ok_or_else(|| anyhow!("{} returned no representation", operation))
    }
}

#[async_trait]
impl ServiceRepository for SupabaseRestClient {
    async fn get_services(&self) -> Result<Vec<ServiceEntity>> {
        let rows: Vec<ServiceRecord> = self
            .http
            .get(self.table_url(SERVICES_TABLE))
            .query(&[("select", "*"), ("order", "created_at.desc")])
            .send()
            .await
            .context("failed to reach the services store")?
            .error_for_status()
            .context("services query rejected by the store")?
            .json()
            .await
            .context("failed to decode services rows")?;

        debug!(row_count = rows.len(), "supabase: services loaded");
        Ok(rows.into_iter().map(ServiceEntity::from).collect())
    }

    async fn create_service(&self, insert: InsertServiceEntity) -> Result<ServiceEntity> {
        let record = InsertServiceRecord::from_insert(insert, Utc::now());
        let rows: Vec<ServiceRecord> = self
            .http
            .post(self.table_url(SERVICES_TABLE))
            .header("Prefer", "return=representation")
            .json(&record)
            .send()
            .await
            .context("failed to reach the services store")?
            .error_for_status()
            .context("service insert rejected by the store")?
            .json()
            .await
            .context("failed to decode inserted service row")?;

        Self::single_row(rows, "service insert")
    }

    async fn update_service(&self, service: ServiceEntity) -> Result<ServiceEntity> {
        let record = ServiceRecord::from(service);
        let rows: Vec<ServiceRecord> = self
            .http
            .patch(self.table_url(SERVICES_TABLE))
            .query(&[("id", format!("eq.{}", record.id))])
            .header("Prefer", "return=representation")
            .json(&record)
            .send()
            .await
            .context("failed to reach the services store")?
            .error_for_status()
            .context("service update rejected by the store")?
            .json()
            .await
            .context("failed to decode updated service row")?;

        Self::single_row(rows, "service update")
    }

    async fn delete_service(&self, service_id: &str) -> Result<()> {
        self.http
            .delete(self.table_url(SERVICES_TABLE))
            .query(&[("id", format!("eq.{}", service_id))])
            .send()
            .await
            .context("failed to reach the services store")?
            .error_for_status()
            .context("service delete rejected by the store")?;

        Ok(())
    }
}

#[async_trait]
impl AdminLogRepository for SupabaseRestClient {
    async fn create_log(&self, admin_user: &str, action: &str, details: &str) -> Result<()> {
        let record = InsertAdminLogRecord {
            admin_user: admin_user.to_string(),
            action: action.to_string(),
            details: details.to_string(),
            timestamp: Utc::now(),
        };

        self.http
            .post(self.table_url(ADMIN_LOGS_TABLE))
            .header("Prefer", "return=minimal")
            .json(&record)
            .send()
            .await
            .context("failed to reach the admin log store")?
            .error_for_status()
            .context("admin log insert rejected by the store")?;

        Ok(())
    }
}
