use axum::http::StatusCode;
use erp_errors::{Problem, internal_error, unprocessable};

use crate::domain::error::DomainError;

/// Map domain errors to the `{message, errors?}` envelope.
impl From<DomainError> for Problem {
    fn from(e: DomainError) -> Self {
        let message = e.to_string();
        match e {
            DomainError::Validation(errors) => unprocessable(message).with_errors(errors),
            DomainError::MissingClientEmail => unprocessable(message),
            DomainError::InvalidCredentials => Problem::new(StatusCode::UNAUTHORIZED, message),
            DomainError::ColorNotFound => Problem::new(StatusCode::NOT_FOUND, message),
            DomainError::Credential(err) => {
                if err.is_not_found() {
                    tracing::info!(%message, "unknown tenant");
                } else {
                    tracing::warn!(status = err.status_code(), %message, "credential lookup failed");
                }
                Problem::from_code(err.status_code(), message)
            }
            DomainError::Connection(_) => Problem::new(StatusCode::INTERNAL_SERVER_ERROR, message),
            DomainError::Internal(err) => {
                let detail = format!("{err:#}");
                tracing::error!(%detail, "tenant request failed");
                internal_error(detail)
            }
        }
    }
}
