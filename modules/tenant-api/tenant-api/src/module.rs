use std::sync::Arc;

use axum::Router;
use credential_orchestrator_sdk::CredentialClient;

use crate::api::rest::routes::register_routes;
use crate::config::{CredentialsConfig, LoginConfig, TenantDbConfig};
use crate::domain::connector::TenantConnector;
use crate::domain::service::{AuthService, ColorService};
use crate::infra::credentials::HttpCredentialClient;
use crate::infra::storage::connection::SeaOrmTenantConnector;

/// Tenant API services, wired over a credential client and a connector.
pub struct TenantApi {
    colors: Arc<ColorService>,
    auth: Arc<AuthService>,
}

impl TenantApi {
    #[must_use]
    pub fn new(
        credentials: Arc<dyn CredentialClient>,
        connector: Arc<dyn TenantConnector>,
        login: &LoginConfig,
    ) -> Self {
        Self {
            colors: Arc::new(ColorService::new(connector)),
            auth: Arc::new(AuthService::new(
                credentials,
                login.username.clone(),
                login.password.clone(),
            )),
        }
    }

    /// HTTP credential client plus per-request `SeaORM` tenant connections.
    ///
    /// # Errors
    /// Fails when the outbound HTTP client cannot be built.
    pub fn from_config(
        credentials: &CredentialsConfig,
        tenant_db: &TenantDbConfig,
        login: &LoginConfig,
    ) -> anyhow::Result<Self> {
        if credentials.base_url().is_none() {
            tracing::warn!("credentials.base_url is not set; every tenant lookup will fail");
        }
        let client: Arc<dyn CredentialClient> = Arc::new(HttpCredentialClient::new(credentials)?);
        let connector = Arc::new(SeaOrmTenantConnector::new(
            Arc::clone(&client),
            tenant_db.clone(),
        ));
        Ok(Self::new(client, connector, login))
    }

    /// Routes of the tenant API, without the platform fallbacks.
    #[must_use]
    pub fn router(&self) -> Router {
        register_routes(Router::new(), Arc::clone(&self.colors), Arc::clone(&self.auth))
    }
}
