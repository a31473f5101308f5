use std::sync::Arc;

use credential_orchestrator_sdk::{ResolvedCredentials, normalize_email};

use crate::domain::error::DomainError;
use crate::domain::repo::CredentialRepository;

pub struct Service<R: CredentialRepository> {
    repo: Arc<R>,
}

impl<R: CredentialRepository> Service<R> {
    #[must_use]
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Resolves the credential bundle for `raw_email`, trimming and lower-casing it first.
    ///
    /// # Errors
    /// `NotFound` when no client carries that email, `Internal` on store failure.
    pub async fn lookup(&self, raw_email: &str) -> Result<ResolvedCredentials, DomainError> {
        let email = normalize_email(raw_email);
        tracing::debug!(%email, "looking up client credentials");

        self.repo
            .find_by_email(&email)
            .await?
            .ok_or_else(|| DomainError::not_found(email))
    }

    /// # Errors
    /// `Internal` when the Credential Store is unreachable.
    pub async fn health(&self) -> Result<(), DomainError> {
        self.repo.ping().await.map_err(DomainError::from)
    }
}
