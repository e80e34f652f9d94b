pub mod records;
pub mod rest_client;
