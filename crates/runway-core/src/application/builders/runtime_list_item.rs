//! Projection of backend query records into runtime list rows

use runway_backend_api::RuntimeQueryResultItem;

use crate::domain::{
    Pipeline,
    PipelineExecutionTrace,
    PipelineExecutionTraceKey,
    PipelineKey,
    PipelineStatus,
    ProviderKey,
    ProviderTypeKey,
    Runtime,
    RuntimeKey,
    RuntimeListItem,
    RuntimeStatus,
};

#[derive(Debug, Default)]
pub struct RuntimeListItemBuilder {
    item: Option<RuntimeQueryResultItem>,
}

impl RuntimeListItemBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_item(mut self, item: RuntimeQueryResultItem) -> Self {
        self.item = Some(item);
        self
    }

    /// A record without a runtime id describes an execution whose runtime
    /// does not exist yet and becomes a pipeline trace row.
    pub fn build(self) -> RuntimeListItem {
        let item = self.item.unwrap_or_default();

        match item.runtime_id.clone() {
            Some(runtime_id) => {
                let pipeline_trace = item
                    .pipeline_execution_id
                    .is_some()
                    .then(|| build_pipeline_trace(&item));

                let runtime = Runtime {
                    key: RuntimeKey::new(provider_key(&item), runtime_id.clone()),
                    status: RuntimeStatus::parse(item.runtime_status.as_deref()),
                    endpoint: item.runtime_endpoint.clone(),
                    created_date: item.runtime_created_date,
                    pipeline_trace,
                };

                let label = item.runtime_name.unwrap_or(runtime_id);
                RuntimeListItem::from_runtime(label, runtime)
            }
            None => {
                let pipeline_trace = build_pipeline_trace(&item);
                let label = item
                    .runtime_name
                    .or(item.pipeline_id)
                    .unwrap_or_default();
                RuntimeListItem::from_pipeline_trace(label, pipeline_trace)
            }
        }
    }
}

fn provider_key(item: &RuntimeQueryResultItem) -> ProviderKey {
    ProviderKey::new(
        ProviderTypeKey::new(
            item.provider_type_name.clone().unwrap_or_default(),
            item.provider_version.clone().unwrap_or_default(),
        ),
        item.provider_id.clone().unwrap_or_default(),
    )
}

fn build_pipeline_trace(item: &RuntimeQueryResultItem) -> PipelineExecutionTrace {
    let stages = item
        .pipeline_stage_items
        .iter()
        .map(|stage| stage.name.clone())
        .collect();

    let stage_statuses = item
        .pipeline_stage_items
        .iter()
        .map(|stage| (stage.name.clone(), PipelineStatus::parse(Some(stage.status.as_str()))))
        .collect();

    PipelineExecutionTrace {
        key: PipelineExecutionTraceKey::new(
            item.pipeline_execution_id.clone().unwrap_or_default(),
        ),
        pipeline: Pipeline {
            key: PipelineKey::new(item.pipeline_id.clone().unwrap_or_default()),
            stages,
        },
        pipeline_status: PipelineStatus::parse(item.pipeline_status.as_deref()),
        stage_statuses,
        pipeline_error: item.pipeline_error.clone(),
    }
}
