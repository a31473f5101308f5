use std::sync::Arc;

use axum::extract::Request;
use axum::middleware::{Next, from_fn};
use axum::routing::{get, post};
use axum::{Extension, Router};

use crate::api::rest::{handlers, principal};
use crate::domain::principal::AccessPolicy;
use crate::domain::service::Service;
use crate::infra::storage::sea_orm_repo::SeaOrmCredentialRepository;

/// Type alias for the concrete service type.
pub type ConcreteService = Service<SeaOrmCredentialRepository>;

#[must_use]
pub fn register_routes(
    router: Router,
    service: Arc<ConcreteService>,
    policy: AccessPolicy,
) -> Router {
    let lookup = post(handlers::lookup_client).route_layer(from_fn(move |req: Request, next: Next| {
        let policy = policy.clone();
        async move { principal::admin_gate(&policy, req, next).await }
    }));

    router
        .route("/", get(handlers::banner))
        .route("/health", get(handlers::health))
        .route("/client/{email}", lookup)
        .layer(Extension(service))
}
