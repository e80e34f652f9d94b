use std::sync::{Arc, RwLock};

use tracing::info;

use crate::domain::entities::plans::PlanEntity;
use crate::domain::value_objects::registries;
use crate::usecases::errors::{ListingError, ListingResult};

/// One immutable view of the plan catalog. Readers hold the whole snapshot,
/// so a concurrent replacement can never expose a half-updated list.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogSnapshot {
    pub version: u64,
    pub plans: Vec<PlanEntity>,
}

/// Almost-always-read-only plan registry. Administrative replacement swaps
/// the snapshot reference wholesale and bumps the version.
pub struct PlanCatalog {
    inner: RwLock<Arc<CatalogSnapshot>>,
}

impl PlanCatalog {
    pub fn new(plans: Vec<PlanEntity>) -> Self {
        Self {
            inner: RwLock::new(Arc::new(CatalogSnapshot { version: 1, plans })),
        }
    }

    /// Catalog seeded with the shipped plans.
    pub fn with_initial_plans() -> Self {
        Self::new(registries::initial_plans())
    }

    pub fn snapshot(&self) -> Arc<CatalogSnapshot> {
        Arc::clone(&self.inner.read().unwrap_or_else(|poisoned| poisoned.into_inner()))
    }

    /// Looks a plan up by id. A miss means the caller's data and the catalog
    /// have drifted apart, so it surfaces as a configuration error instead of
    /// a default plan.
    pub fn find_plan(&self, plan_id: &str) -> ListingResult<PlanEntity> {
        self.snapshot()
            .plans
            .iter()
            .find(|plan| plan.id == plan_id)
            .cloned()
            .ok_or_else(|| {
                ListingError::Configuration(format!("plan {} is not in the catalog", plan_id))
            })
    }

    /// Administrative wholesale replacement of the catalog.
    pub fn replace(&self, plans: Vec<PlanEntity>) {
        let mut guard = self.inner.write().unwrap_or_else(|poisoned| poisoned.into_inner());
        let version = guard.version + 1;
        let plan_count = plans.len();
        *guard = Arc::new(CatalogSnapshot { version, plans });
        info!(version, plan_count, "catalog: plan catalog replaced");
    }
}

impl Default for PlanCatalog {
    fn default() -> Self {
        Self::with_initial_plans()
    }
}
