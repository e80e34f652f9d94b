use anyhow::Result;

use super::config_model::{DotEnvyConfig, Supabase};

pub fn load() -> Result<DotEnvyConfig> {
    dotenvy::dotenv().ok();

    let supabase = Supabase {
        project_url: std::env::var("SUPABASE_PROJECT_URL")
            .expect("SUPABASE_PROJECT_URL is invalid"),
        api_key: std::env::var("SUPABASE_API_KEY").expect("SUPABASE_API_KEY is invalid"),
        timeout_secs: std::env::var("SUPABASE_TIMEOUT")
            .unwrap_or_else(|_| "30".to_string())
            .parse()?,
    };

    Ok(DotEnvyConfig { supabase })
}
