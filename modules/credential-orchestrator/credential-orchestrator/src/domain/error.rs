use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Client with email {email} was not found")]
    NotFound { email: String },

    #[error("Credential store failure: {0}")]
    Internal(#[from] anyhow::Error),
}

impl DomainError {
    #[must_use]
    pub fn not_found(email: impl Into<String>) -> Self {
        Self::NotFound {
            email: email.into(),
        }
    }
}
