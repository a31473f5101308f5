//! Router finishing layers and the HTTP serve loop.

use std::any::Any;
use std::net::SocketAddr;

use axum::extract::Request;
use axum::middleware::map_response;
use axum::response::{IntoResponse, Response};
use erp_errors::{
    Problem, RESOURCE_NOT_FOUND_MESSAGE, internal_error, method_not_allowed, not_found,
};
use tokio_util::sync::CancellationToken;
use axum::{Router, ServiceExt};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::normalize_path::NormalizePath;
use tower_http::trace::TraceLayer;

/// A finished router behind trailing-slash trimming.
pub type App = NormalizePath<Router>;

/// Add the platform-wide fallbacks and layers to a fully routed `Router`.
///
/// - unmatched path: 404 `{message: "Resource not found"}`
/// - known path, wrong verb: 405 `{message: "Method not allowed"}`
/// - panic in a handler: 500 `{message: "Unexpected server error", detail?}`
/// - `detail` stripped from every error body unless `expose_error_detail`
/// - request/response tracing
///
/// Must be called after all routes are registered.
#[must_use]
pub fn finish_router(router: Router, expose_error_detail: bool) -> Router {
    let mut router = router
        .fallback(|| async { not_found(RESOURCE_NOT_FOUND_MESSAGE) })
        .method_not_allowed_fallback(|| async { method_not_allowed() })
        .layer(CatchPanicLayer::custom(|payload: Box<dyn Any + Send>| {
            panic_response(payload.as_ref())
        }));

    if !expose_error_detail {
        router = router.layer(map_response(|response: Response| async move {
            redact_detail(response)
        }));
    }

    router.layer(TraceLayer::new_for_http())
}

fn redact_detail(response: Response) -> Response {
    let redacted = response
        .extensions()
        .get::<Problem>()
        .filter(|p| p.detail.is_some())
        .map(|p| p.clone().without_detail());

    match redacted {
        Some(problem) => problem.into_response(),
        None => response,
    }
}

fn panic_response(payload: &(dyn Any + Send)) -> Response {
    let detail = payload
        .downcast_ref::<&str>()
        .map(|s| (*s).to_owned())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "handler panicked".to_owned());
    tracing::error!(detail = %detail, "Unexpected server error");
    internal_error(detail).into_response()
}

/// Trim trailing slashes before route matching, so `/colors/` is served as
/// `/colors`. Wraps the router from the outside: layers added with
/// `Router::layer` run after routing and cannot rewrite the path.
#[must_use]
pub fn trim_trailing_slash(router: Router) -> App {
    NormalizePath::trim_trailing_slash(router)
}

/// Bind `addr` and serve `router`, trailing slashes trimmed, until `cancel` fires.
///
/// # Errors
/// Returns an error if the address cannot be parsed or bound, or the server
/// fails while running.
pub async fn serve(router: Router, addr: &str, cancel: CancellationToken) -> anyhow::Result<()> {
    let addr: SocketAddr = addr
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid bind address '{addr}': {e}"))?;

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("HTTP server bound on {}", addr);

    let shutdown = async move {
        cancel.cancelled().await;
        tracing::info!("HTTP server shutting down gracefully (cancellation)");
    };

    let app = trim_trailing_slash(router);
    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| anyhow::anyhow!(e))
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::routing::get;
    use serde_json::Value;
    use tower::ServiceExt as _;

    #[allow(clippy::unused_async)]
    async fn boom() -> &'static str {
        panic!("kaboom")
    }

    fn app(expose: bool) -> Router {
        let router = Router::new()
            .route("/ok", get(|| async { "ok" }))
            .route("/boom", get(boom))
            .route("/db", get(|| async { internal_error("connection reset") }));
        finish_router(router, expose)
    }

    async fn call(app: Router, method: &str, uri: &str) -> (StatusCode, Value) {
        let response = trim_trailing_slash(app)
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body).unwrap_or(Value::Null))
    }

    #[tokio::test]
    async fn unknown_route_is_404() {
        let (status, json) = call(app(true), "GET", "/nope").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["message"], RESOURCE_NOT_FOUND_MESSAGE);
    }

    #[tokio::test]
    async fn trailing_slash_reaches_the_route() {
        let (status, _) = call(app(true), "GET", "/ok/").await;
        assert_eq!(status, StatusCode::OK);
        let (status, _) = call(app(true), "GET", "/ok//").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn wrong_verb_is_405() {
        let (status, json) = call(app(true), "DELETE", "/ok").await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(json["message"], "Method not allowed");
    }

    #[tokio::test]
    async fn panic_is_500_with_detail_in_development() {
        let (status, json) = call(app(true), "GET", "/boom").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["message"], erp_errors::INTERNAL_ERROR_MESSAGE);
        assert_eq!(json["detail"], "kaboom");
    }

    #[tokio::test]
    async fn panic_detail_suppressed_in_production() {
        let (status, json) = call(app(false), "GET", "/boom").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["message"], erp_errors::INTERNAL_ERROR_MESSAGE);
        assert!(json.get("detail").is_none());
    }

    #[tokio::test]
    async fn handler_error_detail_suppressed_in_production() {
        let (_, shown) = call(app(true), "GET", "/db").await;
        assert_eq!(shown["detail"], "connection reset");

        let (status, hidden) = call(app(false), "GET", "/db").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(hidden.get("detail").is_none());
    }
}
