pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod logging;

use std::sync::Arc;

pub use application::{
    PipelineInputBuilder,
    ProviderService,
    RuntimeListItemBuilder,
    RuntimeService,
};
pub use domain::{
    DomainError,
    DomainResult,
    InternalGitSource,
    PipelineExecutionTraceKey,
    PipelineKey,
    Provider,
    ProviderConfiguration,
    ProviderKey,
    ProviderLookup,
    ProviderTypeKey,
    RuntimeListItem,
    RuntimesInfo,
    Source,
};
pub use infrastructure::{
    ConfigLoader,
    LoggingConfig,
    PipelineListingConfig,
    RunwayConfig,
};
use runway_backend_api::{
    PipelineBackend,
    RuntimeProvisioningBackend,
};

pub struct CoreContext {
    pub provider_service: Arc<ProviderService>,

    pub runtime_service: Arc<RuntimeService>,
}

impl CoreContext {
    /// Wires the services from a loaded config and the two backends
    pub async fn new(
        config: &RunwayConfig, runtime_provisioning: Arc<dyn RuntimeProvisioningBackend>,
        pipeline_backend: Arc<dyn PipelineBackend>,
    ) -> anyhow::Result<Self> {
        let provider_service = Arc::new(ProviderService::from_config(config).await?);

        let runtime_service = Arc::new(RuntimeService::with_pipeline_listing(
            runtime_provisioning,
            pipeline_backend,
            Arc::clone(&provider_service) as Arc<dyn ProviderLookup>,
            config.pipelines.clone(),
        ));

        tracing::info!(
            providers = provider_service.count().await,
            "Runtime services ready"
        );

        Ok(Self {
            provider_service,
            runtime_service,
        })
    }

    pub async fn from_default_config(
        runtime_provisioning: Arc<dyn RuntimeProvisioningBackend>,
        pipeline_backend: Arc<dyn PipelineBackend>,
    ) -> anyhow::Result<Self> {
        let config = ConfigLoader::load_default()?;
        Self::new(&config, runtime_provisioning, pipeline_backend).await
    }
}
