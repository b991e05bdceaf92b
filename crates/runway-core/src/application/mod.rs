pub mod builders;
pub mod services;

pub use builders::{
    PipelineInputBuilder,
    RuntimeListItemBuilder,
};
pub use services::provider_service::ProviderService;
pub use services::runtime_service::RuntimeService;
