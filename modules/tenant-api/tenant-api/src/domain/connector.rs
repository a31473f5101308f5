use std::sync::Arc;

use async_trait::async_trait;
use credential_orchestrator_sdk::ResolvedCredentials;

use crate::domain::error::DomainError;
use crate::domain::repo::ColorRepository;

/// An open, tenant-scoped database handle. Must be closed exactly once.
#[async_trait]
pub trait TenantConnection: Send + Sync {
    fn colors(&self) -> Arc<dyn ColorRepository>;

    async fn close(self: Box<Self>) -> anyhow::Result<()>;
}

/// Exchanges a tenant email for an open connection to that tenant's database.
#[async_trait]
pub trait TenantConnector: Send + Sync {
    /// Resolves credentials for `email` and opens a connection with them.
    ///
    /// # Errors
    /// `Credential` when the lookup fails (no connection is attempted),
    /// `Connection` when the tenant database refuses the connection.
    async fn open(
        &self,
        email: &str,
    ) -> Result<(Box<dyn TenantConnection>, ResolvedCredentials), DomainError>;
}
