use std::sync::Arc;

use runway_backend_api::{
    PipelineBackend,
    ProviderType,
    RuntimeProvisioningBackend,
    RuntimeQuery,
    RuntimeQueryResultItem,
};

use crate::application::builders::{
    PipelineInputBuilder,
    RuntimeListItemBuilder,
};
use crate::domain::{
    validate_runtime_name,
    DomainError,
    DomainResult,
    PipelineExecutionTraceKey,
    PipelineKey,
    ProviderKey,
    ProviderLookup,
    ProviderTypeKey,
    RuntimeListItem,
    RuntimesInfo,
    Source,
};
use crate::infrastructure::PipelineListingConfig;

/// Entry point used by the UI to list, inspect and create runtimes
pub struct RuntimeService {
    runtime_provisioning: Arc<dyn RuntimeProvisioningBackend>,
    pipeline_backend: Arc<dyn PipelineBackend>,
    provider_lookup: Arc<dyn ProviderLookup>,
    pipeline_listing: PipelineListingConfig,
}

impl RuntimeService {
    pub fn new(
        runtime_provisioning: Arc<dyn RuntimeProvisioningBackend>,
        pipeline_backend: Arc<dyn PipelineBackend>, provider_lookup: Arc<dyn ProviderLookup>,
    ) -> Self {
        Self::with_pipeline_listing(
            runtime_provisioning,
            pipeline_backend,
            provider_lookup,
            PipelineListingConfig::default(),
        )
    }

    pub fn with_pipeline_listing(
        runtime_provisioning: Arc<dyn RuntimeProvisioningBackend>,
        pipeline_backend: Arc<dyn PipelineBackend>, provider_lookup: Arc<dyn ProviderLookup>,
        pipeline_listing: PipelineListingConfig,
    ) -> Self {
        Self {
            runtime_provisioning,
            pipeline_backend,
            provider_lookup,
            pipeline_listing,
        }
    }

    pub async fn runtime_items(
        &self, provider_key: &ProviderKey,
    ) -> DomainResult<Vec<RuntimeListItem>> {
        let query = RuntimeQuery::builder()
            .with_provider_id(provider_key.id.clone())
            .build();

        let items = self.execute_query(query).await?;
        Ok(build_runtime_items(items))
    }

    pub async fn runtime_item(
        &self, trace_key: &PipelineExecutionTraceKey,
    ) -> DomainResult<Option<RuntimeListItem>> {
        let query = RuntimeQuery::builder()
            .with_pipeline_execution_id(trace_key.id.clone())
            .build();

        let items = self.execute_query(query).await?;
        if items.len() > 1 {
            tracing::warn!(
                pipeline_execution_id = %trace_key,
                count = items.len(),
                "Several runtimes match one pipeline execution, using the first"
            );
        }

        Ok(items
            .into_iter()
            .next()
            .map(|item| RuntimeListItemBuilder::new().with_item(item).build()))
    }

    pub async fn pipelines(
        &self, provider_type_key: &ProviderTypeKey,
    ) -> DomainResult<Vec<PipelineKey>> {
        let provider_type = ProviderType::from(provider_type_key);
        let listing = &self.pipeline_listing;

        let names = self
            .pipeline_backend
            .pipeline_names(
                &provider_type,
                listing.page,
                listing.page_size,
                &listing.sort,
                listing.ascending,
            )
            .await?;

        tracing::debug!(
            provider_type = %provider_type_key,
            count = names.len(),
            "Fetched pipeline names"
        );

        Ok(names.into_iter().map(PipelineKey::from).collect())
    }

    /// Starts the pipeline that builds the runtime and returns its execution id.
    ///
    /// The pipeline runs in the background; the returned id can be used with
    /// [`RuntimeService::runtime_item`] to follow it.
    pub async fn create_runtime(
        &self, provider_key: &ProviderKey, runtime_name: &str, source: &Source,
        pipeline_key: &PipelineKey,
    ) -> DomainResult<String> {
        if self.provider_lookup.get_provider(provider_key).await?.is_none() {
            tracing::warn!(provider = %provider_key, "Runtime requested for unknown provider");
            return Err(DomainError::ProviderNotFound(provider_key.clone()));
        }
        validate_runtime_name(runtime_name)?;

        let input = PipelineInputBuilder::new()
            .with_provider(provider_key)
            .with_runtime_name(runtime_name)
            .with_source(source)
            .build();

        let execution_id = self
            .pipeline_backend
            .run_pipeline(&pipeline_key.id, input, true)
            .await?;

        tracing::info!(
            provider = %provider_key,
            runtime_name,
            pipeline = %pipeline_key,
            execution_id = %execution_id,
            "Runtime pipeline started"
        );

        Ok(execution_id)
    }

    pub async fn runtimes_info(
        &self, provider_key: &ProviderKey,
    ) -> DomainResult<Option<RuntimesInfo>> {
        let Some(provider) = self.provider_lookup.get_provider(provider_key).await? else {
            tracing::debug!(provider = %provider_key, "No provider, skipping runtimes query");
            return Ok(None);
        };

        let runtime_items = self.runtime_items(provider_key).await?;

        Ok(Some(RuntimesInfo {
            provider,
            runtime_items,
        }))
    }

    async fn execute_query(
        &self, query: RuntimeQuery,
    ) -> DomainResult<Vec<RuntimeQueryResultItem>> {
        tracing::debug!(?query, "Executing runtime query");
        let items = self.runtime_provisioning.execute_query(query).await?;
        tracing::debug!(count = items.len(), "Runtime query returned");
        Ok(items)
    }
}

fn build_runtime_items(items: Vec<RuntimeQueryResultItem>) -> Vec<RuntimeListItem> {
    items
        .into_iter()
        .map(|item| RuntimeListItemBuilder::new().with_item(item).build())
        .collect()
}
