use std::sync::Arc;

use axum::Extension;
use axum::Json;
use axum::http::StatusCode;
use axum::response::Html;
use credential_orchestrator_sdk::normalize_email;
use erp_errors::{Problem, RESOURCE_NOT_FOUND_MESSAGE, method_not_allowed, not_found};

use crate::api::rest::dto::{
    ColorDataDto, ColorDto, ColorListDto, ColorRemovedDto, HealthDto, LoginDto,
};
use crate::api::rest::extract::{CLIENT_EMAIL, ColorId, Input};
use crate::domain::error::DomainError;
use crate::domain::service::{AuthService, ColorService};
use crate::domain::validation::{validate_new, validate_patch};

type ApiResult<T> = Result<T, Problem>;

const BANNER: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>ERP SaaS API</title>
</head>
<body>
    <h1>ERP SaaS Tenant API</h1>
    <ul>
        <li><code>POST /login</code> &ndash; authenticate and resolve a tenant.</li>
        <li><code>GET /colors?clientEmail=&lt;email&gt;</code> &ndash; list tenant colors.</li>
        <li><code>POST /colors</code>, <code>PUT /colors/{id}</code>, <code>DELETE /colors/{id}</code> &ndash; manage colors.</li>
    </ul>
    <p><code>clientEmail</code> must match a tenant known to the credential orchestrator.</p>
</body>
</html>
"#;

#[allow(clippy::unused_async)]
pub async fn banner() -> Html<&'static str> {
    Html(BANNER)
}

#[allow(clippy::unused_async)]
pub async fn health() -> Json<HealthDto> {
    Json(HealthDto { status: "ok" })
}

/// Paths served for one verb only; any other verb is an unknown resource.
#[allow(clippy::unused_async)]
pub async fn unrouted() -> Problem {
    not_found(RESOURCE_NOT_FOUND_MESSAGE)
}

/// Other verbs on `/colors/{id}`: the id is checked first, so a malformed id
/// is 404 whatever the verb.
#[allow(clippy::unused_async)]
pub async fn color_item_fallback(id: Result<ColorId, Problem>) -> Problem {
    match id {
        Ok(_) => method_not_allowed(),
        Err(problem) => problem,
    }
}

pub async fn login(
    Extension(auth): Extension<Arc<AuthService>>,
    input: Input,
) -> ApiResult<Json<LoginDto>> {
    let email = input
        .field(CLIENT_EMAIL)
        .filter(|email| !email.is_empty())
        .map(|email| normalize_email(&email))
        .ok_or(DomainError::MissingClientEmail)?;
    let username = input.field("username").unwrap_or_default();
    let password = input.field("password").unwrap_or_default();

    let creds = auth.login(&username, &password, &email).await?;
    tracing::info!(%email, "login succeeded");

    Ok(Json(LoginDto {
        message: "Authentication successful",
        tenant: creds.tenant.into(),
        storage: creds.storage.into(),
        client_email: email,
    }))
}

pub async fn list_colors(
    Extension(svc): Extension<Arc<ColorService>>,
    input: Input,
) -> ApiResult<Json<ColorListDto>> {
    let email = input.client_email()?;
    let scoped = svc.list(&email).await?;

    Ok(Json(ColorListDto {
        tenant: scoped.tenant.into(),
        count: scoped.value.len(),
        data: scoped.value.into_iter().map(ColorDto::from).collect(),
    }))
}

pub async fn create_color(
    Extension(svc): Extension<Arc<ColorService>>,
    input: Input,
) -> ApiResult<(StatusCode, Json<ColorDataDto>)> {
    let email = input.client_email()?;
    let color = validate_new(
        input.field("name").as_deref(),
        input.field("hexadecimal").as_deref(),
    )?;

    let scoped = svc.create(&email, color).await?;

    Ok((
        StatusCode::CREATED,
        Json(ColorDataDto {
            tenant: scoped.tenant.into(),
            data: scoped.value.into(),
        }),
    ))
}

pub async fn update_color(
    Extension(svc): Extension<Arc<ColorService>>,
    ColorId(id): ColorId,
    input: Input,
) -> ApiResult<Json<ColorDataDto>> {
    let email = input.client_email()?;
    let patch = validate_patch(
        input.field("name").as_deref(),
        input.field("hexadecimal").as_deref(),
    )?;

    let scoped = svc.update(&email, id, patch).await?;

    Ok(Json(ColorDataDto {
        tenant: scoped.tenant.into(),
        data: scoped.value.into(),
    }))
}

pub async fn delete_color(
    Extension(svc): Extension<Arc<ColorService>>,
    ColorId(id): ColorId,
    input: Input,
) -> ApiResult<Json<ColorRemovedDto>> {
    let email = input.client_email()?;

    let scoped = svc.delete(&email, id).await?;
    tracing::info!(id, tenant = %scoped.tenant.email, "color removed");

    Ok(Json(ColorRemovedDto {
        tenant: scoped.tenant.into(),
        message: "Color removed successfully",
    }))
}
