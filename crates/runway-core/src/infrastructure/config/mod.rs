pub mod loader;
pub mod schema;

pub use loader::{
    ConfigLoadError,
    ConfigLoadResult,
    ConfigLoader,
    CONFIG_PATH_ENV,
};
pub use schema::{
    LoggingConfig,
    PipelineListingConfig,
    ProviderFileConfig,
    RunwayConfig,
};
