use std::sync::Arc;

use anyhow::Result;
use rede365::config::config_loader;
use rede365::infrastructure::session::AuthState;
use rede365::infrastructure::supabase::rest_client::SupabaseRestClient;
use rede365::usecases::catalog::PlanCatalog;
use rede365::usecases::listings::ListingUseCase;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        error!("rede365 exited with error: {}", error);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = config_loader::load()?;
    info!("ENV has been loaded");

    let store = Arc::new(SupabaseRestClient::new(&config.supabase)?);
    let catalog = Arc::new(PlanCatalog::with_initial_plans());
    let sessions = Arc::new(AuthState::new());

    let listings = ListingUseCase::new(
        Arc::clone(&store),
        Arc::clone(&store),
        sessions,
        Arc::clone(&catalog),
    );

    // Startup load mirrors the session bootstrap: a failed fetch leaves an
    // empty cache instead of aborting.
    match listings.refresh().await {
        Ok(listing_count) => {
            let plan_count = catalog.snapshot().plans.len();
            info!(listing_count, plan_count, "rede365 core is ready");
        }
        Err(err) => {
            error!(error = %err, "initial listing load failed, starting with an empty cache");
        }
    }

    Ok(())
}
