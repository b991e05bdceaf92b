use std::sync::Arc;

use async_trait::async_trait;
use indexmap::IndexMap;
use tokio::sync::RwLock;

use crate::domain::{
    validate_provider_key,
    DomainError,
    DomainResult,
    Provider,
    ProviderKey,
    ProviderLookup,
    ProviderTypeKey,
};
use crate::infrastructure::RunwayConfig;

/// In-memory provider registry, kept in registration order
pub struct ProviderService {
    providers: Arc<RwLock<IndexMap<ProviderKey, Provider>>>,
}

impl ProviderService {
    pub fn new() -> Self {
        Self {
            providers: Arc::new(RwLock::new(IndexMap::new())),
        }
    }

    /// Registry seeded with the providers declared in the config file
    pub async fn from_config(config: &RunwayConfig) -> DomainResult<Self> {
        let service = Self::new();
        for provider in config.providers() {
            service.add_provider(provider).await?;
        }
        Ok(service)
    }

    pub async fn add_provider(&self, provider: Provider) -> DomainResult<()> {
        validate_provider_key(&provider.key)?;

        let mut providers = self.providers.write().await;
        if providers.contains_key(&provider.key) {
            return Err(DomainError::ProviderAlreadyExists(provider.key));
        }

        tracing::info!(provider = %provider.key, "Provider registered");
        providers.insert(provider.key.clone(), provider);
        Ok(())
    }

    pub async fn remove_provider(&self, key: &ProviderKey) -> DomainResult<Provider> {
        let mut providers = self.providers.write().await;
        let removed = providers
            .shift_remove(key)
            .ok_or_else(|| DomainError::ProviderNotFound(key.clone()))?;
        drop(providers);

        tracing::info!(provider = %key, "Provider removed");
        Ok(removed)
    }

    pub async fn providers(&self, provider_type_key: &ProviderTypeKey) -> Vec<Provider> {
        let providers = self.providers.read().await;
        providers
            .values()
            .filter(|provider| &provider.key.provider_type_key == provider_type_key)
            .cloned()
            .collect()
    }

    pub async fn count(&self) -> usize {
        self.providers.read().await.len()
    }
}

impl Default for ProviderService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProviderLookup for ProviderService {
    async fn get_provider(&self, key: &ProviderKey) -> DomainResult<Option<Provider>> {
        let providers = self.providers.read().await;
        Ok(providers.get(key).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ProviderConfiguration;
    use crate::infrastructure::ConfigLoader;

    fn provider(type_id: &str, id: &str) -> Provider {
        Provider::new(
            ProviderKey::new(ProviderTypeKey::new(type_id, "1.0"), id),
            ProviderConfiguration::new(id),
        )
    }

    #[tokio::test]
    async fn test_add_and_get_provider() {
        let service = ProviderService::new();
        let p = provider("openshift", "ocp-dev");
        service.add_provider(p.clone()).await.unwrap();

        let found = service.get_provider(&p.key).await.unwrap();
        assert_eq!(found, Some(p));
        assert_eq!(service.count().await, 1);
    }

    #[tokio::test]
    async fn test_get_unknown_provider_is_none() {
        let service = ProviderService::new();
        let key = ProviderKey::new(ProviderTypeKey::new("openshift", "1.0"), "missing");

        assert_eq!(service.get_provider(&key).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_add_duplicate_provider_fails() {
        let service = ProviderService::new();
        service.add_provider(provider("openshift", "ocp")).await.unwrap();

        let result = service.add_provider(provider("openshift", "ocp")).await;
        assert!(matches!(result, Err(DomainError::ProviderAlreadyExists(_))));
    }

    #[tokio::test]
    async fn test_add_provider_with_empty_id_fails() {
        let service = ProviderService::new();
        let result = service.add_provider(provider("openshift", "")).await;
        assert!(matches!(result, Err(DomainError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_remove_provider() {
        let service = ProviderService::new();
        let p = provider("docker", "local");
        service.add_provider(p.clone()).await.unwrap();

        let removed = service.remove_provider(&p.key).await.unwrap();
        assert_eq!(removed, p);
        assert_eq!(service.get_provider(&p.key).await.unwrap(), None);

        let again = service.remove_provider(&p.key).await;
        assert!(matches!(again, Err(DomainError::ProviderNotFound(_))));
    }

    #[tokio::test]
    async fn test_providers_by_type_keep_registration_order() {
        let service = ProviderService::new();
        service.add_provider(provider("openshift", "b")).await.unwrap();
        service.add_provider(provider("docker", "x")).await.unwrap();
        service.add_provider(provider("openshift", "a")).await.unwrap();

        let ids: Vec<String> = service
            .providers(&ProviderTypeKey::new("openshift", "1.0"))
            .await
            .into_iter()
            .map(|p| p.key.id)
            .collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[tokio::test]
    async fn test_from_config() {
        let config = ConfigLoader::parse(
            r#"
[providers.ocp-dev]
type = "openshift"
version = "3.11"
"#,
        )
        .unwrap();

        let service = ProviderService::from_config(&config).await.unwrap();
        let key = ProviderKey::new(ProviderTypeKey::new("openshift", "3.11"), "ocp-dev");
        assert!(service.get_provider(&key).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_from_config_keeps_file_order() {
        let config = ConfigLoader::parse(
            r#"
[providers.zeta]
type = "openshift"
version = "3.11"

[providers.alpha]
type = "openshift"
version = "3.11"

[providers.mid]
type = "openshift"
version = "3.11"
"#,
        )
        .unwrap();

        let service = ProviderService::from_config(&config).await.unwrap();
        let ids: Vec<String> = service
            .providers(&ProviderTypeKey::new("openshift", "3.11"))
            .await
            .into_iter()
            .map(|p| p.key.id)
            .collect();
        assert_eq!(ids, vec!["zeta", "alpha", "mid"]);
    }
}
