pub mod config_service;
pub mod resource_service;
pub mod traits;
pub mod types;
