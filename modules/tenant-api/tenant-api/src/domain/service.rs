use std::future::Future;
use std::sync::Arc;

use credential_orchestrator_sdk::{CredentialClient, ResolvedCredentials, normalize_email};
use secrecy::{ExposeSecret, SecretString};
use tracing::instrument;

use crate::domain::connector::TenantConnector;
use crate::domain::error::DomainError;
use crate::domain::model::{Color, ColorPatch, NewColor, Scoped};
use crate::domain::repo::ColorRepository;

/// Colors CRUD, each call bound to the database of the tenant owning `email`.
pub struct ColorService {
    connector: Arc<dyn TenantConnector>,
}

impl ColorService {
    #[must_use]
    pub fn new(connector: Arc<dyn TenantConnector>) -> Self {
        Self { connector }
    }

    /// Opens the tenant connection, runs `op` against its repository and
    /// closes the connection whatever `op` returned.
    async fn with_tenant<T, F, Fut>(&self, email: &str, op: F) -> Result<Scoped<T>, DomainError>
    where
        F: FnOnce(Arc<dyn ColorRepository>) -> Fut,
        Fut: Future<Output = Result<T, DomainError>>,
    {
        let (conn, creds) = self.connector.open(email).await?;
        let outcome = op(conn.colors()).await;

        if let Err(err) = conn.close().await {
            tracing::warn!(email = %creds.tenant.email, error = %err, "failed to close tenant connection");
        }

        Ok(Scoped {
            tenant: creds.tenant,
            value: outcome?,
        })
    }

    /// # Errors
    /// Lookup, connection or store failure.
    #[instrument(skip(self))]
    pub async fn list(&self, email: &str) -> Result<Scoped<Vec<Color>>, DomainError> {
        self.with_tenant(email, |repo| async move {
            Ok::<_, DomainError>(repo.all().await?)
        })
        .await
    }

    /// # Errors
    /// Lookup, connection or store failure.
    #[instrument(skip(self, color))]
    pub async fn create(&self, email: &str, color: NewColor) -> Result<Scoped<Color>, DomainError> {
        let scoped = self
            .with_tenant(email, |repo| async move {
                Ok::<_, DomainError>(repo.create(&color.name, &color.hexadecimal).await?)
            })
            .await?;
        tracing::info!(id = scoped.value.id, "color created");
        Ok(scoped)
    }

    /// # Errors
    /// `ColorNotFound` when no row has `id`; lookup, connection or store failure.
    #[instrument(skip(self, patch))]
    pub async fn update(
        &self,
        email: &str,
        id: i32,
        patch: ColorPatch,
    ) -> Result<Scoped<Color>, DomainError> {
        self.with_tenant(email, |repo| async move {
            repo.update(id, &patch)
                .await?
                .ok_or(DomainError::ColorNotFound)
        })
        .await
    }

    /// # Errors
    /// `ColorNotFound` when no row has `id`; lookup, connection or store failure.
    #[instrument(skip(self))]
    pub async fn delete(&self, email: &str, id: i32) -> Result<Scoped<()>, DomainError> {
        self.with_tenant(email, |repo| async move {
            if repo.delete(id).await? {
                Ok(())
            } else {
                Err(DomainError::ColorNotFound)
            }
        })
        .await
    }
}

/// Flat username/password gate in front of a credential lookup.
pub struct AuthService {
    client: Arc<dyn CredentialClient>,
    username: String,
    password: SecretString,
}

impl AuthService {
    #[must_use]
    pub fn new(client: Arc<dyn CredentialClient>, username: String, password: SecretString) -> Self {
        Self {
            client,
            username,
            password,
        }
    }

    /// Checks the configured pair, then resolves the tenant.
    ///
    /// # Errors
    /// `InvalidCredentials` on mismatch, `Credential` when the lookup fails.
    #[instrument(skip(self, password))]
    pub async fn login(
        &self,
        username: &str,
        password: &str,
        email: &str,
    ) -> Result<ResolvedCredentials, DomainError> {
        if username != self.username || password != self.password.expose_secret() {
            tracing::warn!("login rejected");
            return Err(DomainError::InvalidCredentials);
        }

        Ok(self.client.fetch(&normalize_email(email)).await?)
    }
}
