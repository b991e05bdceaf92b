use runway_backend_api::{
    PipelineStageItem,
    RuntimeQueryResultItem,
};

/// Stages named `stage.{i}`; all finished except the last one, which is running
pub(crate) fn mock_pipeline_stage_items(count: usize) -> Vec<PipelineStageItem> {
    (0..count)
        .map(|i| {
            let status = if i + 1 == count { "RUNNING" } else { "FINISHED" };
            PipelineStageItem::new(format!("stage.{i}"), status)
        })
        .collect()
}

pub(crate) fn mock_runtime_query_result_item(
    suffix: &str, stage_items_count: usize,
) -> RuntimeQueryResultItem {
    let tagged = |field: &str| Some(format!("RuntimeQueryResultItem.{field}.{suffix}"));

    RuntimeQueryResultItem {
        provider_id: tagged("providerId"),
        provider_type_name: tagged("providerTypeName"),
        provider_version: tagged("providerVersion"),
        pipeline_id: tagged("pipelineId"),
        pipeline_execution_id: tagged("pipelineExecutionId"),
        pipeline_status: Some("RUNNING".to_string()),
        pipeline_error: tagged("pipelineError"),
        pipeline_stage_items: mock_pipeline_stage_items(stage_items_count),
        runtime_id: tagged("runtimeId"),
        runtime_name: tagged("runtimeName"),
        runtime_status: Some("RUNNING".to_string()),
        runtime_endpoint: tagged("runtimeEndpoint"),
        runtime_created_date: None,
    }
}

pub(crate) fn mock_runtime_query_result_items(count: usize) -> Vec<RuntimeQueryResultItem> {
    (0..count)
        .map(|i| mock_runtime_query_result_item(&i.to_string(), i))
        .collect()
}
