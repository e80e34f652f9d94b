use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;

#[async_trait]
#[automock]
pub trait AdminLogRepository: Send + Sync {
    /// Appends one entry to the admin log; the store assigns `id` and
    /// `timestamp`.
    async fn create_log(&self, admin_user: &str, action: &str, details: &str) -> Result<()>;
}
