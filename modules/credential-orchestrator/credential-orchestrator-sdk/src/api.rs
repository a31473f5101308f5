use async_trait::async_trait;

use crate::error::CredentialError;
use crate::models::ResolvedCredentials;

/// Resolves a tenant's connection parameters by email.
///
/// Implementations perform the lookup fresh on every call. A caching layer,
/// if one is ever needed, belongs behind this trait.
#[async_trait]
pub trait CredentialClient: Send + Sync {
    /// Fetch the credentials registered for `email`.
    ///
    /// The email is matched case-insensitively.
    ///
    /// # Errors
    /// See [`CredentialError`] for the failure taxonomy.
    async fn fetch(&self, email: &str) -> Result<ResolvedCredentials, CredentialError>;
}
