use async_trait::async_trait;
use credential_orchestrator_sdk::ResolvedCredentials;

#[async_trait]
pub trait CredentialRepository: Send + Sync {
    /// Exact match on the stored (lower-case) email.
    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<ResolvedCredentials>>;

    /// Trivial round-trip to the Credential Store.
    async fn ping(&self) -> anyhow::Result<()>;
}
