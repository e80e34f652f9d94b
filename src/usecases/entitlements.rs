use chrono::{DateTime, Duration, Utc};

use crate::domain::{entities::plans::PlanEntity, value_objects::entitlements::Entitlements};

/// Plan whose first week runs as a trial window.
pub const TRIAL_PLAN_ID: &str = "annual";

pub const TRIAL_WINDOW_DAYS: i64 = 7;

/// Derives a listing's effective entitlements from its plan and creation
/// time. Pure; the trial flag depends on `now`, so callers re-evaluate on
/// every read instead of caching the result.
///
/// `premium_override` carries an administratively granted verification badge
/// that is independent of the plan tier.
pub fn derive_entitlements(
    plan: &PlanEntity,
    created_at: DateTime<Utc>,
    now: DateTime<Utc>,
    premium_override: bool,
) -> Entitlements {
    let expiry_date = created_at + Duration::days(i64::from(plan.duration_days));
    let is_trial_active =
        plan.id == TRIAL_PLAN_ID && now - created_at < Duration::days(TRIAL_WINDOW_DAYS);

    Entitlements {
        expiry_date,
        is_trial_active,
        is_premium_verified: plan.highlight || premium_override,
        max_photos: plan.max_photos,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::registries::initial_plans;
    use chrono::TimeZone;

    fn plan(id: &str) -> PlanEntity {
        initial_plans()
            .into_iter()
            .find(|plan| plan.id == id)
            .expect("seed plan missing")
    }

    #[test]
    fn expiry_is_created_at_plus_duration_in_millis() {
        let created_at = Utc.timestamp_millis_opt(0).unwrap();
        let now = created_at;

        for seed in initial_plans() {
            let entitlements = derive_entitlements(&seed, created_at, now, false);
            assert_eq!(
                entitlements.expiry_date.timestamp_millis(),
                i64::from(seed.duration_days) * 86_400_000,
            );
        }
    }

    #[test]
    fn annual_listing_at_epoch_expires_after_a_year_and_is_verified() {
        let created_at = Utc.timestamp_millis_opt(0).unwrap();
        let entitlements = derive_entitlements(&plan("annual"), created_at, created_at, false);

        assert_eq!(entitlements.expiry_date.timestamp_millis(), 31_536_000_000);
        assert!(entitlements.is_premium_verified);
        assert_eq!(entitlements.max_photos, 10);
    }

    #[test]
    fn trial_window_is_open_for_the_first_week_of_annual() {
        let created_at = Utc.timestamp_millis_opt(0).unwrap();
        let within = created_at + Duration::days(6);
        let boundary = created_at + Duration::days(7);

        let annual = plan("annual");
        assert!(derive_entitlements(&annual, created_at, within, false).is_trial_active);
        assert!(!derive_entitlements(&annual, created_at, boundary, false).is_trial_active);
    }

    #[test]
    fn trial_never_applies_to_other_plans() {
        let created_at = Utc.timestamp_millis_opt(0).unwrap();
        for seed in initial_plans() {
            if seed.id == TRIAL_PLAN_ID {
                continue;
            }
            let entitlements = derive_entitlements(&seed, created_at, created_at, false);
            assert!(!entitlements.is_trial_active, "plan {}", seed.id);
        }
    }

    #[test]
    fn manual_override_grants_verification_on_any_plan() {
        let created_at = Utc.timestamp_millis_opt(0).unwrap();
        let entitlements = derive_entitlements(&plan("free"), created_at, created_at, true);
        assert!(entitlements.is_premium_verified);
    }
}
