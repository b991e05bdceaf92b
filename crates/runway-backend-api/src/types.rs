use std::collections::BTreeMap;

use chrono::{
    DateTime,
    Utc,
};
use serde::{
    Deserialize,
    Serialize,
};

/// Provider type as understood by the backends (e.g. "openshift" / "3.11")
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProviderType {
    pub provider_type_name: String,
    pub version: String,
}

impl ProviderType {
    pub fn new(provider_type_name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            provider_type_name: provider_type_name.into(),
            version: version.into(),
        }
    }
}

/// Filters for a runtime query. Unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeQuery {
    pub provider_id: Option<String>,
    pub pipeline_execution_id: Option<String>,
    pub runtime_id: Option<String>,
    pub runtime_name: Option<String>,
}

impl RuntimeQuery {
    pub fn builder() -> RuntimeQueryBuilder {
        RuntimeQueryBuilder::default()
    }
}

#[derive(Debug, Clone, Default)]
pub struct RuntimeQueryBuilder {
    query: RuntimeQuery,
}

impl RuntimeQueryBuilder {
    pub fn with_provider_id(mut self, provider_id: impl Into<String>) -> Self {
        self.query.provider_id = Some(provider_id.into());
        self
    }

    pub fn with_pipeline_execution_id(mut self, pipeline_execution_id: impl Into<String>) -> Self {
        self.query.pipeline_execution_id = Some(pipeline_execution_id.into());
        self
    }

    pub fn build(self) -> RuntimeQuery {
        self.query
    }
}

/// Status of a single stage inside a pipeline execution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineStageItem {
    pub name: String,
    pub status: String,
}

impl PipelineStageItem {
    pub fn new(name: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: status.into(),
        }
    }
}

/// One runtime / pipeline execution pairing returned by the query backend.
///
/// A record may describe a runtime with the execution that produced it, or
/// only an execution whose runtime does not exist yet, so every field is
/// optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeQueryResultItem {
    pub provider_id: Option<String>,
    pub provider_type_name: Option<String>,
    pub provider_version: Option<String>,

    pub pipeline_id: Option<String>,
    pub pipeline_execution_id: Option<String>,
    pub pipeline_status: Option<String>,
    pub pipeline_error: Option<String>,
    #[serde(default)]
    pub pipeline_stage_items: Vec<PipelineStageItem>,

    pub runtime_id: Option<String>,
    pub runtime_name: Option<String>,
    pub runtime_status: Option<String>,
    pub runtime_endpoint: Option<String>,
    pub runtime_created_date: Option<DateTime<Utc>>,
}

/// Named string inputs handed to a pipeline execution
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Input(BTreeMap<String, String>);

impl Input {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(|s| s.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, String)> for Input {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
