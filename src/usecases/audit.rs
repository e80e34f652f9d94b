use std::sync::Arc;

use tracing::warn;

use crate::domain::repositories::admin_logs::AdminLogRepository;

/// Fire-and-forget recorder of privileged actions. The write runs on a
/// detached task after the primary mutation has already succeeded; a failed
/// write is logged for diagnostics and never surfaces to the caller.
pub struct AuditLogEmitter<L>
where
    L: AdminLogRepository + 'static,
{
    log_repo: Arc<L>,
}

impl<L> AuditLogEmitter<L>
where
    L: AdminLogRepository + 'static,
{
    pub fn new(log_repo: Arc<L>) -> Self {
        Self { log_repo }
    }

    pub fn record(&self, admin_user: String, action: String, details: String) {
        let log_repo = Arc::clone(&self.log_repo);
        tokio::spawn(async move {
            if let Err(err) = log_repo
                .create_log(&admin_user, &action, &details)
                .await
            {
                warn!(
                    error = ?err,
                    admin_user = %admin_user,
                    action = %action,
                    "audit: failed to record admin log entry"
                );
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::admin_logs::MockAdminLogRepository;
    use anyhow::anyhow;
    use mockall::predicate::eq;
    use std::time::Duration;

    #[tokio::test]
    async fn records_the_acting_identity_and_labels() {
        let mut log_repo = MockAdminLogRepository::new();
        log_repo
            .expect_create_log()
            .with(
                eq("ana@example.com"),
                eq("Remoção de Anúncio"),
                eq("Anúncio ID svc-1 removido pelo usuário."),
            )
            .times(1)
            .returning(|_, _, _| Box::pin(async { Ok(()) }));

        let emitter = AuditLogEmitter::new(Arc::new(log_repo));
        emitter.record(
            "ana@example.com".to_string(),
            "Remoção de Anúncio".to_string(),
            "Anúncio ID svc-1 removido pelo usuário.".to_string(),
        );

        tokio::time::sleep(Duration::from_millis(20)).await;
    }

    #[tokio::test]
    async fn a_failed_write_is_swallowed() {
        let mut log_repo = MockAdminLogRepository::new();
        log_repo
            .expect_create_log()
            .times(1)
            .returning(|_, _, _| Box::pin(async { Err(anyhow!("log store offline")) }));

        let emitter = AuditLogEmitter::new(Arc::new(log_repo));
        emitter.record(
            "ana@example.com".to_string(),
            "Remoção de Anúncio".to_string(),
            "Anúncio ID svc-2 removido pelo usuário.".to_string(),
        );

        // the spawned write failing must not panic or surface anywhere
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
}
