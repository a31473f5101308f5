use axum::extract::Request;
use axum::http::{HeaderMap, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use erp_errors::Problem;

use crate::domain::principal::{
    ADMIN_HEADER, AccessPolicy, ENTITY_ID_HEADER, Principal, ROLES_HEADER,
};

pub const ADMIN_REQUIRED_MESSAGE: &str = "Admin privileges required";

fn principal_from(headers: &HeaderMap) -> Principal {
    let header = |name: &str| headers.get(name).and_then(|v| v.to_str().ok());
    Principal::from_headers(header(ENTITY_ID_HEADER), header(ROLES_HEADER), header(ADMIN_HEADER))
}

/// Rejects callers the policy does not admit; passes everyone through when
/// the gate is disabled.
pub async fn admin_gate(policy: &AccessPolicy, req: Request, next: Next) -> Response {
    let principal = principal_from(req.headers());
    if !policy.permits(&principal) {
        tracing::warn!(roles = ?principal.roles, "credential lookup denied");
        return Problem::new(StatusCode::FORBIDDEN, ADMIN_REQUIRED_MESSAGE).into_response();
    }
    next.run(req).await
}
