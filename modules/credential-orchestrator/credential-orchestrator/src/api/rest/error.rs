use erp_errors::{Problem, internal_error, not_found};

use crate::domain::error::DomainError;

/// Map domain errors to the `{message}` envelope.
impl From<DomainError> for Problem {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::NotFound { .. } => not_found(e.to_string()),
            DomainError::Internal(err) => {
                let detail = format!("{err:#}");
                tracing::error!(%detail, "credential store failure");
                internal_error(detail)
            }
        }
    }
}
