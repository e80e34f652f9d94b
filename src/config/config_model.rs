#[derive(Debug, Clone)]
pub struct DotEnvyConfig {
    pub supabase: Supabase,
}

#[derive(Debug, Clone)]
pub struct Supabase {
    pub project_url: String,
    pub api_key: String,
    pub timeout_secs: u64,
}
