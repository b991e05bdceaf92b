pub mod provider_service;
pub mod runtime_service;
