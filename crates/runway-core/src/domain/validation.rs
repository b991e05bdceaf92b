use super::keys::ProviderKey;
use super::{
    DomainError,
    DomainResult,
};

const MAX_RUNTIME_NAME_LENGTH: usize = 128;

pub fn validate_runtime_name(name: &str) -> DomainResult<()> {
    if name.trim().is_empty() {
        return Err(DomainError::InvalidInput(
            "Runtime name cannot be empty".to_string(),
        ));
    }

    if name.chars().count() > MAX_RUNTIME_NAME_LENGTH {
        return Err(DomainError::InvalidInput(format!(
            "Runtime name exceeds maximum length of {} characters",
            MAX_RUNTIME_NAME_LENGTH
        )));
    }

    Ok(())
}

pub fn validate_provider_key(key: &ProviderKey) -> DomainResult<()> {
    if key.id.is_empty() {
        return Err(DomainError::InvalidInput(
            "Provider id cannot be empty".to_string(),
        ));
    }

    if key.provider_type_key.id.is_empty() {
        return Err(DomainError::InvalidInput(format!(
            "Provider '{}' has an empty provider type",
            key.id
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ProviderTypeKey;

    #[test]
    fn test_validate_runtime_name_valid() {
        assert!(validate_runtime_name("my-runtime").is_ok());
        assert!(validate_runtime_name("irrelevant for the test").is_ok());
    }

    #[test]
    fn test_validate_runtime_name_blank() {
        assert!(validate_runtime_name("").is_err());
        assert!(validate_runtime_name("   ").is_err());
    }

    #[test]
    fn test_validate_runtime_name_too_long() {
        assert!(validate_runtime_name(&"a".repeat(129)).is_err());
        assert!(validate_runtime_name(&"a".repeat(128)).is_ok());
    }

    #[test]
    fn test_validate_provider_key() {
        let valid = ProviderKey::new(ProviderTypeKey::new("openshift", "3.11"), "ocp");
        assert!(validate_provider_key(&valid).is_ok());

        let no_type = ProviderKey::new(ProviderTypeKey::new("", "3.11"), "ocp");
        assert!(validate_provider_key(&no_type).is_err());
    }
}
