use std::collections::BTreeMap;

use async_trait::async_trait;
use serde::{
    Deserialize,
    Serialize,
};

use super::error::DomainResult;
use super::keys::ProviderKey;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProviderConfiguration {
    pub id: String,
    #[serde(default)]
    pub values: BTreeMap<String, String>,
}

impl ProviderConfiguration {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            values: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Provider {
    pub key: ProviderKey,
    pub configuration: ProviderConfiguration,
}

impl Provider {
    pub fn new(key: ProviderKey, configuration: ProviderConfiguration) -> Self {
        Self { key, configuration }
    }
}

/// Resolves provider keys to registered providers
#[async_trait]
pub trait ProviderLookup: Send + Sync {
    /// `Ok(None)` when no provider is registered under `key`
    async fn get_provider(&self, key: &ProviderKey) -> DomainResult<Option<Provider>>;
}
