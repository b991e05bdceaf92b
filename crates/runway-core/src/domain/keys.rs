use std::fmt;

use serde::{
    Deserialize,
    Serialize,
};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProviderTypeKey {
    pub id: String,
    pub version: String,
}

impl ProviderTypeKey {
    pub fn new(id: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            version: version.into(),
        }
    }
}

impl fmt::Display for ProviderTypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.id, self.version)
    }
}

impl From<&ProviderTypeKey> for runway_backend_api::ProviderType {
    fn from(key: &ProviderTypeKey) -> Self {
        runway_backend_api::ProviderType::new(key.id.clone(), key.version.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProviderKey {
    pub provider_type_key: ProviderTypeKey,
    pub id: String,
}

impl ProviderKey {
    pub fn new(provider_type_key: ProviderTypeKey, id: impl Into<String>) -> Self {
        Self {
            provider_type_key,
            id: id.into(),
        }
    }
}

impl fmt::Display for ProviderKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.id, self.provider_type_key)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PipelineKey {
    pub id: String,
}

impl PipelineKey {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

impl fmt::Display for PipelineKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}

impl From<String> for PipelineKey {
    fn from(id: String) -> Self {
        Self { id }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PipelineExecutionTraceKey {
    pub id: String,
}

impl PipelineExecutionTraceKey {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

impl fmt::Display for PipelineExecutionTraceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RuntimeKey {
    pub provider_key: ProviderKey,
    pub id: String,
}

impl RuntimeKey {
    pub fn new(provider_key: ProviderKey, id: impl Into<String>) -> Self {
        Self {
            provider_key,
            id: id.into(),
        }
    }
}

impl fmt::Display for RuntimeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.id, self.provider_key)
    }
}
