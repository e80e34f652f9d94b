pub mod admin_logs;
pub mod plans;
pub mod services;
