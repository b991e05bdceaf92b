use async_trait::async_trait;

use crate::error::BackendResult;
use crate::types::*;

/// Answers structured queries over runtime and pipeline execution state
#[async_trait]
pub trait RuntimeProvisioningBackend: Send + Sync {
    /// Run a query and return every matching record
    async fn execute_query(
        &self, query: RuntimeQuery,
    ) -> BackendResult<Vec<RuntimeQueryResultItem>>;
}

/// Lists and runs provisioning pipelines
#[async_trait]
pub trait PipelineBackend: Send + Sync {
    /// Names of the pipelines usable with a provider type.
    ///
    /// `sort` names the sort field (empty for the backend default) and
    /// `sort_order` is `true` for ascending.
    async fn pipeline_names(
        &self, provider_type: &ProviderType, page: usize, page_size: usize, sort: &str,
        sort_order: bool,
    ) -> BackendResult<Vec<String>>;

    /// Start a pipeline by name and return the execution id.
    ///
    /// With `run_async` the backend schedules the execution and returns
    /// without waiting for it to finish.
    async fn run_pipeline(
        &self, pipeline_name: &str, input: Input, run_async: bool,
    ) -> BackendResult<String>;
}
