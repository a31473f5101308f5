use credential_orchestrator_sdk::CredentialError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation failed")]
    Validation(Vec<String>),

    #[error("clientEmail is required")]
    MissingClientEmail,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Color not found")]
    ColorNotFound,

    #[error(transparent)]
    Credential(#[from] CredentialError),

    #[error("Unable to connect to tenant database: {0}")]
    Connection(String),

    #[error("Tenant database failure: {0}")]
    Internal(#[from] anyhow::Error),
}
