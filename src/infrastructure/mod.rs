pub mod memory;
pub mod session;
pub mod supabase;
