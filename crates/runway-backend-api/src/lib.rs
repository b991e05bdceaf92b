pub mod backend;
pub mod error;
pub mod types;

pub use backend::{
    PipelineBackend,
    RuntimeProvisioningBackend,
};
pub use error::{
    BackendError,
    BackendResult,
};
pub use types::{
    Input,
    PipelineStageItem,
    ProviderType,
    RuntimeQuery,
    RuntimeQueryBuilder,
    RuntimeQueryResultItem,
};
