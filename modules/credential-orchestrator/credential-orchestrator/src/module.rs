use std::sync::Arc;

use axum::Router;
use sea_orm::DatabaseConnection;

use crate::api::rest::routes::{ConcreteService, register_routes};
use crate::config::AccessConfig;
use crate::domain::principal::AccessPolicy;
use crate::domain::service::Service;
use crate::infra::storage::sea_orm_repo::SeaOrmCredentialRepository;

/// Orchestrator wired over a single long-lived Credential Store connection.
pub struct CredentialOrchestrator {
    service: Arc<ConcreteService>,
    access: AccessPolicy,
}

impl CredentialOrchestrator {
    #[must_use]
    pub fn new(db: DatabaseConnection, access: &AccessConfig) -> Self {
        let repo = Arc::new(SeaOrmCredentialRepository::new(db));
        Self {
            service: Arc::new(Service::new(repo)),
            access: AccessPolicy::from(access),
        }
    }

    /// Routes of the orchestrator, without the platform fallbacks.
    #[must_use]
    pub fn router(&self) -> Router {
        register_routes(Router::new(), Arc::clone(&self.service), self.access.clone())
    }
}
