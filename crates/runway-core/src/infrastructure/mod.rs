pub mod config;

pub use config::{
    ConfigLoadError,
    ConfigLoader,
    LoggingConfig,
    PipelineListingConfig,
    RunwayConfig,
};
