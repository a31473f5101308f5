use std::sync::Arc;

use axum::Extension;
use axum::Json;
use axum::extract::Path;
use erp_errors::Problem;

use crate::api::rest::dto::{BannerDto, CredentialsDto, HealthDto};
use crate::api::rest::routes::ConcreteService;

type ApiResult<T> = Result<T, Problem>;

#[allow(clippy::unused_async)]
pub async fn banner() -> Json<BannerDto> {
    Json(BannerDto::default())
}

pub async fn health(
    Extension(svc): Extension<Arc<ConcreteService>>,
) -> ApiResult<Json<HealthDto>> {
    svc.health().await?;
    Ok(Json(HealthDto { status: "ok" }))
}

/// `POST /client/{email}`. The request body is ignored.
pub async fn lookup_client(
    Extension(svc): Extension<Arc<ConcreteService>>,
    Path(email): Path<String>,
) -> ApiResult<Json<CredentialsDto>> {
    let creds = svc.lookup(&email).await?;
    tracing::info!(email = %creds.tenant.email, "credentials resolved");
    Ok(Json(creds.into()))
}
