pub mod audit;
pub mod catalog;
pub mod entitlements;
pub mod errors;
pub mod filters;
pub mod listings;
