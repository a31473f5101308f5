//! Error types for credential resolution.

use thiserror::Error;

/// Status used for failures that did not come from the orchestrator itself.
pub const LOCAL_FAILURE_STATUS: u16 = 500;

/// Errors that can occur while resolving tenant credentials.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CredentialError {
    /// The orchestrator base address is not configured. Not retried.
    #[error("{0}")]
    Configuration(String),

    /// Network, DNS or timeout failure talking to the orchestrator.
    #[error("Credential API error: {0}")]
    Transport(String),

    /// The orchestrator answered with a status >= 400.
    #[error("{message}")]
    Remote {
        /// Status code returned by the orchestrator.
        status: u16,
        /// The orchestrator's `message` field, or a generic fallback.
        message: String,
    },

    /// The orchestrator answered 200 but the payload lacked required fields.
    #[error("Credential response is malformed")]
    Malformed,
}

impl CredentialError {
    /// HTTP-like status carried by this error.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Remote { status, .. } => *status,
            Self::Configuration(_) | Self::Transport(_) | Self::Malformed => LOCAL_FAILURE_STATUS,
        }
    }

    /// Whether the orchestrator reported that no tenant matches.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Remote { status: 404, .. })
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn remote_error_passes_status_and_message_through() {
        let err = CredentialError::Remote {
            status: 404,
            message: "Client with email ghost@x.com was not found".to_owned(),
        };
        assert_eq!(err.status_code(), 404);
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Client with email ghost@x.com was not found");
    }

    #[test]
    fn local_failures_default_to_500() {
        assert_eq!(CredentialError::Configuration("x".to_owned()).status_code(), 500);
        assert_eq!(CredentialError::Transport("refused".to_owned()).status_code(), 500);
        assert_eq!(CredentialError::Malformed.status_code(), 500);
    }

    #[test]
    fn transport_message_names_the_cause() {
        let err = CredentialError::Transport("connection refused".to_owned());
        assert_eq!(err.to_string(), "Credential API error: connection refused");
    }
}
