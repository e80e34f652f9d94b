use std::sync::Arc;
use std::time::Duration;

use rede365::domain::entities::services::{InsertServiceEntity, SocialLinks};
use rede365::domain::value_objects::enums::cities::City;
use rede365::domain::repositories::services::ServiceRepository;
use rede365::domain::value_objects::filters::ListingFilter;
use rede365::infrastructure::memory::InMemoryStore;
use rede365::infrastructure::session::AuthState;
use rede365::usecases::catalog::PlanCatalog;
use rede365::usecases::errors::ListingError;
use rede365::usecases::listings::{DeleteConfirmation, ListingUseCase};

fn insert(title: &str, plan_id: &str) -> InsertServiceEntity {
    InsertServiceEntity {
        title: title.to_string(),
        category: "Beleza".to_string(),
        professional_name: "Ana".to_string(),
        email: "ana@example.com".to_string(),
        phone: "71999990000".to_string(),
        description: "Atendimento a domicílio em Salvador".to_string(),
        location: City::Salvador,
        neighborhood: "Rio Vermelho".to_string(),
        has_physical_address: false,
        address: None,
        price: Some("R$ 80".to_string()),
        image_url: "https://img.example/ana.jpg".to_string(),
        images: Vec::new(),
        star_rating: 4.9,
        plan_id: plan_id.to_string(),
        duration_days: 0,
        is_premium_verified: false,
        socials: SocialLinks::default(),
    }
}

fn build_core() -> (
    Arc<InMemoryStore>,
    Arc<AuthState>,
    ListingUseCase<InMemoryStore, InMemoryStore, AuthState>,
) {
    let store = Arc::new(InMemoryStore::new());
    let sessions = Arc::new(AuthState::new());
    let listings = ListingUseCase::new(
        Arc::clone(&store),
        Arc::clone(&store),
        Arc::clone(&sessions),
        Arc::new(PlanCatalog::with_initial_plans()),
    );
    (store, sessions, listings)
}

#[tokio::test]
async fn full_lifecycle_against_the_in_memory_store() {
    let (_store, sessions, listings) = build_core();
    sessions.sign_in("ana@example.com".to_string());
    listings.refresh().await.unwrap();

    // create under the annual plan: gold badge and a year of visibility
    let annual = listings.create(insert("Manicure Premium", "annual")).await.unwrap();
    assert!(annual.is_premium_verified);
    assert!(annual.is_trial_active);
    assert_eq!(
        annual.expiry_date.timestamp_millis() - annual.created_at.timestamp_millis(),
        365 * 86_400_000
    );

    let basic = listings.create(insert("Manicure Simples", "free")).await.unwrap();
    assert!(!basic.is_premium_verified);
    assert_eq!(
        basic.expiry_date.timestamp_millis() - basic.created_at.timestamp_millis(),
        7 * 86_400_000
    );

    // newest first, then the verified listing wins the visible ordering
    let snapshot = listings.list();
    assert_eq!(snapshot[0].id, basic.id);
    let visible = listings.search(&ListingFilter::default());
    assert_eq!(visible[0].id, annual.id);
    assert_eq!(visible[1].id, basic.id);

    // update: a plan change recomputes expiry from the original created_at
    let mut upgraded = basic.clone();
    upgraded.plan_id = "quarterly".to_string();
    let upgraded = listings.update(upgraded).await.unwrap();
    assert_eq!(
        upgraded.expiry_date.timestamp_millis() - upgraded.created_at.timestamp_millis(),
        90 * 86_400_000
    );
    let snapshot = listings.list();
    assert_eq!(snapshot[0].plan_id, "quarterly");
}

#[tokio::test]
async fn delete_removes_everywhere_and_leaves_an_audit_trail() {
    let (store, sessions, listings) = build_core();
    sessions.sign_in("ana@example.com".to_string());

    let listing = listings.create(insert("Manicure", "monthly")).await.unwrap();
    assert_eq!(listings.list().len(), 1);

    listings
        .delete(&listing.id, DeleteConfirmation::Confirmed)
        .await
        .unwrap();
    assert!(listings.list().is_empty());

    // the audit write is detached; give it a beat to land
    tokio::time::sleep(Duration::from_millis(50)).await;
    let logs = store.logs().await;
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].admin_user, "ana@example.com");
    assert_eq!(logs[0].action, "Remoção de Anúncio");
    assert!(logs[0].details.contains(&listing.id));
}

#[tokio::test]
async fn aborted_delete_changes_nothing() {
    let (store, _sessions, listings) = build_core();

    let listing = listings.create(insert("Manicure", "monthly")).await.unwrap();
    let err = listings
        .delete(&listing.id, DeleteConfirmation::Aborted)
        .await
        .unwrap_err();

    assert!(matches!(err, ListingError::DeleteNotConfirmed));
    assert_eq!(listings.list().len(), 1);
    assert_eq!(store.get_services().await.unwrap().len(), 1);
}

#[tokio::test]
async fn filters_narrow_by_city_neighborhood_category_and_term() {
    let (_store, _sessions, listings) = build_core();

    listings.create(insert("Manicure Pituba", "monthly")).await.unwrap();
    let mut other_city = insert("Manicure Centro", "monthly");
    other_city.location = City::SimoesFilho;
    other_city.neighborhood = "Centro".to_string();
    listings.create(other_city).await.unwrap();

    let filter = ListingFilter {
        term: Some("manicure".to_string()),
        location: Some(City::SimoesFilho),
        neighborhood: Some("Centro".to_string()),
        category: Some("Beleza".to_string()),
    };
    let visible = listings.search(&filter);
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].title, "Manicure Centro");
}
