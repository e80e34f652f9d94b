use crate::domain::entities::services::ServiceEntity;
use crate::domain::value_objects::filters::ListingFilter;

/// Computes the visible subset of a cache snapshot. Premium-verified
/// listings sort before the rest; within each tier the snapshot's own order
/// (most-recent-first) is preserved. Total and deterministic in
/// (snapshot, filter).
pub fn filter_listings(listings: &[ServiceEntity], filter: &ListingFilter) -> Vec<ServiceEntity> {
    let term = filter.term.as_ref().map(|term| term.to_lowercase());

    let matches = |service: &ServiceEntity| -> bool {
        if let Some(term) = term.as_deref() {
            let in_title = service.title.to_lowercase().contains(term);
            let in_description = service.description.to_lowercase().contains(term);
            if !in_title && !in_description {
                return false;
            }
        }
        if let Some(location) = filter.location {
            if service.location != location {
                return false;
            }
        }
        if let Some(neighborhood) = filter.neighborhood.as_deref() {
            if service.neighborhood != neighborhood {
                return false;
            }
        }
        if let Some(category) = filter.category.as_deref() {
            if service.category != category {
                return false;
            }
        }
        true
    };

    let mut verified = Vec::new();
    let mut unverified = Vec::new();
    for service in listings.iter().filter(|service| matches(service)) {
        if service.is_premium_verified {
            verified.push(service.clone());
        } else {
            unverified.push(service.clone());
        }
    }

    verified.extend(unverified);
    verified
}
