pub mod entitlements;
pub mod enums;
pub mod filters;
pub mod registries;
