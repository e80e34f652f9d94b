use std::sync::{Arc, RwLock};

use chrono::Utc;
use tracing::{error, info, warn};

use crate::domain::entities::plans::PlanEntity;
use crate::domain::entities::services::{InsertServiceEntity, ServiceEntity};
use crate::domain::repositories::{
    admin_logs::AdminLogRepository, services::ServiceRepository, sessions::SessionGateway,
};
use crate::domain::value_objects::enums::cities::City;
use crate::domain::value_objects::filters::ListingFilter;
use crate::domain::value_objects::registries;
use crate::usecases::audit::AuditLogEmitter;
use crate::usecases::catalog::PlanCatalog;
use crate::usecases::entitlements::derive_entitlements;
use crate::usecases::errors::{ListingError, ListingResult};
use crate::usecases::filters::filter_listings;

pub const DELETE_ACTION: &str = "Remoção de Anúncio";

/// Outcome of the irreversible-action safeguard shown to the user before a
/// delete is attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteConfirmation {
    Confirmed,
    Aborted,
}

/// Listing lifecycle over the persisted store, plus the in-memory cache all
/// read surfaces consume during a session.
///
/// The cache is mutated only after the store has confirmed a mutation, and
/// every mutation replaces the whole snapshot `Arc`, so concurrent readers
/// either see the previous snapshot or the next one, never a torn state.
pub struct ListingUseCase<R, L, S>
where
    R: ServiceRepository + 'static,
    L: AdminLogRepository + 'static,
    S: SessionGateway + 'static,
{
    service_repo: Arc<R>,
    audit: AuditLogEmitter<L>,
    sessions: Arc<S>,
    catalog: Arc<PlanCatalog>,
    cache: RwLock<Arc<Vec<ServiceEntity>>>,
}

impl<R, L, S> ListingUseCase<R, L, S>
where
    R: ServiceRepository + 'static,
    L: AdminLogRepository + 'static,
    S: SessionGateway + 'static,
{
    pub fn new(
        service_repo: Arc<R>,
        log_repo: Arc<L>,
        sessions: Arc<S>,
        catalog: Arc<PlanCatalog>,
    ) -> Self {
        Self {
            service_repo,
            audit: AuditLogEmitter::new(log_repo),
            sessions,
            catalog,
            cache: RwLock::new(Arc::new(Vec::new())),
        }
    }

    /// Session-start load. Replaces the snapshot wholesale; there is no
    /// background refresh afterwards, so listings changed by other sessions
    /// stay invisible until the next call.
    pub async fn refresh(&self) -> ListingResult<usize> {
        let services = self.service_repo.get_services().await.map_err(|err| {
            error!(store_error = ?err, "listings: failed to load listings from store");
            ListingError::Persistence(err)
        })?;

        let now = Utc::now();
        let services: Vec<ServiceEntity> = services
            .into_iter()
            .map(|mut service| {
                // The trial flag is wall-clock derived and never trusted from
                // storage.
                match self.catalog.find_plan(&service.plan_id) {
                    Ok(plan) => {
                        let entitlements = derive_entitlements(
                            &plan,
                            service.created_at,
                            now,
                            service.premium_override,
                        );
                        service.is_trial_active = entitlements.is_trial_active;
                        service.is_premium_verified = entitlements.is_premium_verified;
                    }
                    Err(err) => {
                        error!(
                            service_id = %service.id,
                            plan_id = %service.plan_id,
                            error = %err,
                            "listings: stored listing references an unknown plan"
                        );
                    }
                }
                service
            })
            .collect();

        let listing_count = services.len();
        self.store_snapshot(services);
        info!(listing_count, "listings: cache refreshed from store");
        Ok(listing_count)
    }

    /// Current cache snapshot. Never touches the network.
    pub fn list(&self) -> Arc<Vec<ServiceEntity>> {
        Arc::clone(&self.cache.read().unwrap_or_else(|poisoned| poisoned.into_inner()))
    }

    /// Visible subset of the current snapshot for a filter specification.
    pub fn search(&self, filter: &ListingFilter) -> Vec<ServiceEntity> {
        filter_listings(&self.list(), filter)
    }

    /// Persists a new listing and, only once the store confirms, prepends it
    /// to the cache so fresh listings surface first.
    pub async fn create(&self, input: InsertServiceEntity) -> ListingResult<ServiceEntity> {
        let plan = self.catalog.find_plan(&input.plan_id)?;
        validate_listing(
            &input.category,
            input.location,
            &input.neighborhood,
            input.images.len(),
            input.star_rating,
            &plan,
        )?;

        let mut insert = input;
        insert.duration_days = plan.duration_days;
        insert.is_premium_verified = plan.highlight;

        let mut created = self.service_repo.create_service(insert).await.map_err(|err| {
            error!(store_error = ?err, "listings: create failed, cache untouched");
            ListingError::Persistence(err)
        })?;

        let entitlements =
            derive_entitlements(&plan, created.created_at, Utc::now(), created.premium_override);
        created.is_trial_active = entitlements.is_trial_active;

        {
            let snapshot = self.list();
            let mut services = Vec::with_capacity(snapshot.len() + 1);
            services.push(created.clone());
            services.extend(snapshot.iter().cloned());
            self.store_snapshot(services);
        }

        info!(
            service_id = %created.id,
            plan_id = %created.plan_id,
            "listings: listing created and cached"
        );
        Ok(created)
    }

    /// Pushes a changed listing to the store; on confirmation the cache entry
    /// with the same id is replaced by value. A plan change recomputes the
    /// expiry and badge from `created_at` and the new plan.
    pub async fn update(&self, service: ServiceEntity) -> ListingResult<ServiceEntity> {
        let plan = self.catalog.find_plan(&service.plan_id)?;
        validate_listing(
            &service.category,
            service.location,
            &service.neighborhood,
            service.images.len(),
            service.star_rating,
            &plan,
        )?;

        let mut service = service;
        let entitlements =
            derive_entitlements(&plan, service.created_at, Utc::now(), service.premium_override);
        service.expiry_date = entitlements.expiry_date;
        service.is_premium_verified = entitlements.is_premium_verified;
        service.is_trial_active = entitlements.is_trial_active;

        let updated = self.service_repo.update_service(service).await.map_err(|err| {
            error!(store_error = ?err, "listings: update failed, cache untouched");
            ListingError::Persistence(err)
        })?;

        {
            let snapshot = self.list();
            let services: Vec<ServiceEntity> = snapshot
                .iter()
                .map(|existing| {
                    if existing.id == updated.id {
                        updated.clone()
                    } else {
                        existing.clone()
                    }
                })
                .collect();
            self.store_snapshot(services);
        }

        info!(service_id = %updated.id, "listings: listing updated in cache");
        Ok(updated)
    }

    /// Administrative grant or revocation of the verification badge,
    /// independent of the listing's plan tier.
    pub async fn set_premium_override(
        &self,
        service_id: &str,
        granted: bool,
    ) -> ListingResult<ServiceEntity> {
        let service = self
            .list()
            .iter()
            .find(|service| service.id == service_id)
            .cloned()
            .ok_or_else(|| {
                ListingError::Validation(format!("service {} is not in the cache", service_id))
            })?;

        let mut service = service;
        service.premium_override = granted;
        info!(%service_id, granted, "listings: premium override changed");
        self.update(service).await
    }

    /// Irreversibly removes a listing. The cache entry goes away and an audit
    /// entry is emitted only after the store confirms; an unconfirmed request
    /// never reaches the store.
    pub async fn delete(
        &self,
        service_id: &str,
        confirmation: DeleteConfirmation,
    ) -> ListingResult<()> {
        if confirmation != DeleteConfirmation::Confirmed {
            warn!(%service_id, "listings: delete attempted without confirmation");
            return Err(ListingError::DeleteNotConfirmed);
        }

        self.service_repo.delete_service(service_id).await.map_err(|err| {
            error!(
                %service_id,
                store_error = ?err,
                "listings: delete failed, cache untouched"
            );
            ListingError::Persistence(err)
        })?;

        {
            let snapshot = self.list();
            let services: Vec<ServiceEntity> = snapshot
                .iter()
                .filter(|existing| existing.id != service_id)
                .cloned()
                .collect();
            self.store_snapshot(services);
        }

        // Best-effort trail, attributed only when a session is present.
        if let Some(actor) = self.sessions.current_identity() {
            self.audit.record(
                actor,
                DELETE_ACTION.to_string(),
                format!("Anúncio ID {} removido pelo usuário.", service_id),
            );
        }

        info!(%service_id, "listings: listing deleted");
        Ok(())
    }

    fn store_snapshot(&self, services: Vec<ServiceEntity>) {
        let mut guard = self.cache.write().unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = Arc::new(services);
    }
}

fn validate_listing(
    category: &str,
    location: City,
    neighborhood: &str,
    image_count: usize,
    star_rating: f32,
    plan: &PlanEntity,
) -> ListingResult<()> {
    if !registries::category_exists(category) {
        return Err(ListingError::Configuration(format!(
            "category {} is not registered",
            category
        )));
    }
    if !location.has_neighborhood(neighborhood) {
        return Err(ListingError::Validation(format!(
            "neighborhood {} is not registered for {}",
            neighborhood, location
        )));
    }
    if image_count > plan.max_photos as usize {
        return Err(ListingError::Validation(format!(
            "plan {} allows at most {} photos, got {}",
            plan.id, plan.max_photos, image_count
        )));
    }
    if !(0.0..=5.0).contains(&star_rating) {
        return Err(ListingError::Validation(format!(
            "star rating {} is outside 0..=5",
            star_rating
        )));
    }
    Ok(())
}
