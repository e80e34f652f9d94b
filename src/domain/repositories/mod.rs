pub mod admin_logs;
pub mod services;
pub mod sessions;
