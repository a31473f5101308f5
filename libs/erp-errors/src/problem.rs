//! `Problem`: the JSON error body (`message`, `errors`, `detail`).

use http::StatusCode;
use serde::Serialize;

/// Message used whenever an internal fault is rendered to the caller.
pub const INTERNAL_ERROR_MESSAGE: &str = "Unexpected server error";

/// Message for requests that match no route or address no resource.
pub const RESOURCE_NOT_FOUND_MESSAGE: &str = "Resource not found";

/// Error response body.
///
/// The status travels with the body so that handlers can return
/// `Result<_, Problem>` and let `?` do the conversion; it is not serialized.
#[derive(Debug, Clone, Serialize)]
#[must_use]
pub struct Problem {
    #[serde(skip)]
    pub status: StatusCode,
    /// Human-readable explanation of the failure.
    pub message: String,
    /// Per-field validation messages, reported together.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
    /// Underlying cause of an internal fault; omitted in production.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl Problem {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            errors: None,
            detail: None,
        }
    }

    /// Build a problem from a status code carried by a lower layer.
    ///
    /// Codes outside `400..=599` are not meaningful HTTP failures and are
    /// rendered as 500.
    pub fn from_code(code: u16, message: impl Into<String>) -> Self {
        let status = match code {
            400..=599 => StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self::new(status, message)
    }

    pub fn with_errors(mut self, errors: Vec<String>) -> Self {
        self.errors = Some(errors);
        self
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Drop internal detail before the body leaves the process.
    pub fn without_detail(mut self) -> Self {
        self.detail = None;
        self
    }
}

impl axum::response::IntoResponse for Problem {
    fn into_response(self) -> axum::response::Response {
        let status = self.status;
        if status.is_server_error() {
            tracing::debug!(status = status.as_u16(), message = %self.message, "rendering server error");
        }
        let mut resp = axum::Json(&self).into_response();
        *resp.status_mut() = status;
        // Kept on the response so outer layers can re-render it (e.g. redaction).
        resp.extensions_mut().insert(self);
        resp
    }
}

pub fn not_found(message: impl Into<String>) -> Problem {
    Problem::new(StatusCode::NOT_FOUND, message)
}

pub fn method_not_allowed() -> Problem {
    Problem::new(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
}

pub fn unprocessable(message: impl Into<String>) -> Problem {
    Problem::new(StatusCode::UNPROCESSABLE_ENTITY, message)
}

/// Generic 500 carrying the underlying cause as `detail`.
///
/// Production deployments strip `detail` at the router edge.
pub fn internal_error(detail: impl Into<String>) -> Problem {
    Problem::new(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE).with_detail(detail)
}
