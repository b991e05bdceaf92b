use runway_backend_api::BackendError;
use thiserror::Error;

use super::keys::ProviderKey;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("No provider was found for providerKey: {0}")]
    ProviderNotFound(ProviderKey),

    #[error("A provider already exists for providerKey: {0}")]
    ProviderAlreadyExists(ProviderKey),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    Backend(#[from] BackendError),
}

pub type DomainResult<T> = Result<T, DomainError>;
