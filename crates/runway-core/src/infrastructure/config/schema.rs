use std::collections::BTreeMap;

use indexmap::IndexMap;
use serde::{
    Deserialize,
    Serialize,
};

use crate::domain::{
    Provider,
    ProviderConfiguration,
    ProviderKey,
    ProviderTypeKey,
};

pub(super) const DEFAULT_PIPELINE_PAGE: usize = 0;

pub(super) const DEFAULT_PIPELINE_PAGE_SIZE: usize = 1000;

pub(super) const DEFAULT_PIPELINE_ASCENDING: bool = true;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RunwayConfig {
    #[serde(default)]
    pub pipelines: PipelineListingConfig,

    #[serde(default)]
    pub providers: IndexMap<String, ProviderFileConfig>,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl RunwayConfig {
    pub fn validate(&self) -> Result<(), String> {
        self.pipelines.validate()?;
        self.logging.validate()?;

        for (id, provider) in &self.providers {
            if id.is_empty() {
                return Err("Provider id cannot be empty".to_string());
            }
            if provider.provider_type.is_empty() {
                return Err(format!("Provider '{}' is missing a type", id));
            }
        }

        Ok(())
    }

    /// Providers declared in the file, in declaration order
    pub fn providers(&self) -> Vec<Provider> {
        self.providers
            .iter()
            .map(|(id, file_config)| file_config.to_provider(id))
            .collect()
    }
}

/// Paging and sorting used when listing pipeline names
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineListingConfig {
    #[serde(default = "default_page")]
    pub page: usize,

    #[serde(default = "default_page_size")]
    pub page_size: usize,

    #[serde(default)]
    pub sort: String,

    #[serde(default = "default_ascending")]
    pub ascending: bool,
}

impl Default for PipelineListingConfig {
    fn default() -> Self {
        Self {
            page: default_page(),
            page_size: default_page_size(),
            sort: String::new(),
            ascending: default_ascending(),
        }
    }
}

impl PipelineListingConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.page_size == 0 {
            return Err("Pipeline page size must be at least 1".to_string());
        }
        Ok(())
    }
}

fn default_page() -> usize {
    DEFAULT_PIPELINE_PAGE
}

fn default_page_size() -> usize {
    DEFAULT_PIPELINE_PAGE_SIZE
}

fn default_ascending() -> bool {
    DEFAULT_PIPELINE_ASCENDING
}

/// `[logging]` section; `RUST_LOG` still overrides `filter` at startup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub filter: Option<String>,

    #[serde(default)]
    pub verbose: bool,

    #[serde(default = "default_with_target")]
    pub with_target: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: None,
            verbose: false,
            with_target: default_with_target(),
        }
    }
}

impl LoggingConfig {
    pub fn validate(&self) -> Result<(), String> {
        if matches!(self.filter.as_deref(), Some(f) if f.trim().is_empty()) {
            return Err("Logging filter cannot be blank".to_string());
        }
        Ok(())
    }
}

fn default_with_target() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderFileConfig {
    #[serde(rename = "type")]
    pub provider_type: String,

    #[serde(default)]
    pub version: String,

    #[serde(default)]
    pub config: BTreeMap<String, String>,
}

impl ProviderFileConfig {
    pub fn provider_key(&self, id: &str) -> ProviderKey {
        ProviderKey::new(
            ProviderTypeKey::new(self.provider_type.clone(), self.version.clone()),
            id,
        )
    }

    pub fn to_provider(&self, id: &str) -> Provider {
        Provider::new(
            self.provider_key(id),
            ProviderConfiguration {
                id: id.to_string(),
                values: self.config.clone(),
            },
        )
    }
}
