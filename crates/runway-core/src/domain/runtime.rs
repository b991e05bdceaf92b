use chrono::{
    DateTime,
    Utc,
};
use serde::{
    Deserialize,
    Serialize,
};

use super::keys::{
    PipelineExecutionTraceKey,
    PipelineKey,
    RuntimeKey,
};
use super::provider::Provider;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PipelineStatus {
    Scheduled,
    Running,
    Finished,
    Error,
    Stopped,
    Unknown,
}

impl PipelineStatus {
    /// Maps a backend status string, case-insensitively
    pub fn parse(status: Option<&str>) -> Self {
        match status.map(|s| s.trim().to_ascii_uppercase()).as_deref() {
            Some("SCHEDULED") => Self::Scheduled,
            Some("RUNNING") => Self::Running,
            Some("FINISHED") => Self::Finished,
            Some("ERROR") => Self::Error,
            Some("STOPPED") => Self::Stopped,
            _ => Self::Unknown,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuntimeStatus {
    Started,
    Running,
    Stopped,
    Failed,
    Unknown,
}

impl RuntimeStatus {
    pub fn parse(status: Option<&str>) -> Self {
        match status.map(|s| s.trim().to_ascii_uppercase()).as_deref() {
            Some("STARTED") => Self::Started,
            Some("RUNNING") => Self::Running,
            Some("STOPPED") => Self::Stopped,
            Some("FAILED") | Some("ERROR") => Self::Failed,
            _ => Self::Unknown,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pipeline {
    pub key: PipelineKey,
    pub stages: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineExecutionTrace {
    pub key: PipelineExecutionTraceKey,
    pub pipeline: Pipeline,
    pub pipeline_status: PipelineStatus,
    /// Stage name and status, in pipeline order
    pub stage_statuses: Vec<(String, PipelineStatus)>,
    pub pipeline_error: Option<String>,
}

impl PipelineExecutionTrace {
    pub fn stage_status(&self, stage: &str) -> Option<PipelineStatus> {
        self.stage_statuses
            .iter()
            .find(|(name, _)| name == stage)
            .map(|(_, status)| *status)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Runtime {
    pub key: RuntimeKey,
    pub status: RuntimeStatus,
    pub endpoint: Option<String>,
    pub created_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pipeline_trace: Option<PipelineExecutionTrace>,
}

/// Row shown in the runtimes list: either a runtime or, while the runtime
/// is still being built, the pipeline execution producing it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeListItem {
    pub item_label: String,
    pub item_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runtime: Option<Runtime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pipeline_trace: Option<PipelineExecutionTrace>,
}

impl RuntimeListItem {
    pub fn from_runtime(item_label: impl Into<String>, runtime: Runtime) -> Self {
        Self {
            item_label: item_label.into(),
            item_id: runtime.key.id.clone(),
            runtime: Some(runtime),
            pipeline_trace: None,
        }
    }

    pub fn from_pipeline_trace(
        item_label: impl Into<String>, pipeline_trace: PipelineExecutionTrace,
    ) -> Self {
        Self {
            item_label: item_label.into(),
            item_id: pipeline_trace.key.id.clone(),
            runtime: None,
            pipeline_trace: Some(pipeline_trace),
        }
    }

    pub fn is_runtime(&self) -> bool {
        self.runtime.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimesInfo {
    pub provider: Provider,
    pub runtime_items: Vec<RuntimeListItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipeline_status_parse() {
        assert_eq!(PipelineStatus::parse(Some("RUNNING")), PipelineStatus::Running);
        assert_eq!(PipelineStatus::parse(Some("finished")), PipelineStatus::Finished);
        assert_eq!(PipelineStatus::parse(Some("bogus")), PipelineStatus::Unknown);
        assert_eq!(PipelineStatus::parse(None), PipelineStatus::Unknown);
    }

    #[test]
    fn test_runtime_status_parse() {
        assert_eq!(RuntimeStatus::parse(Some("RUNNING")), RuntimeStatus::Running);
        assert_eq!(RuntimeStatus::parse(Some("Error")), RuntimeStatus::Failed);
        assert_eq!(RuntimeStatus::parse(Some("")), RuntimeStatus::Unknown);
    }

    #[test]
    fn test_status_serialization() {
        let json = serde_json::to_string(&PipelineStatus::Scheduled).unwrap();
        assert_eq!(json, "\"scheduled\"");
    }
}
