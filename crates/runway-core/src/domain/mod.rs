pub mod error;
pub mod keys;
pub mod provider;
pub mod runtime;
pub mod source;
pub mod validation;

pub use error::{
    DomainError,
    DomainResult,
};
pub use keys::{
    PipelineExecutionTraceKey,
    PipelineKey,
    ProviderKey,
    ProviderTypeKey,
    RuntimeKey,
};
pub use provider::{
    Provider,
    ProviderConfiguration,
    ProviderLookup,
};
pub use runtime::{
    Pipeline,
    PipelineExecutionTrace,
    PipelineStatus,
    Runtime,
    RuntimeListItem,
    RuntimeStatus,
    RuntimesInfo,
};
pub use source::{
    InternalGitSource,
    Source,
};
pub use validation::{
    validate_provider_key,
    validate_runtime_name,
};
