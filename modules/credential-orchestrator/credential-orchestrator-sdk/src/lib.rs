//! Credential Orchestrator SDK
//!
//! Transport-agnostic contract between the orchestrator and its consumers:
//! - [`CredentialClient`]: resolve a tenant's credentials by email
//! - [`ResolvedCredentials`] and friends: the resolved record
//! - [`CredentialError`]: failure taxonomy with HTTP-like status codes

pub mod api;
pub mod error;
pub mod models;

pub use api::CredentialClient;
pub use error::CredentialError;
pub use models::{
    DbCredentials, ResolvedCredentials, StorageCredentials, TenantIdentity, normalize_email,
};
