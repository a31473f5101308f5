//! Credential Orchestrator
//!
//! Single source of truth mapping a tenant email to the parameters needed to
//! reach that tenant's own database and object-storage bucket.
//!
//! The wire contract consumers rely on is
//! `POST /client/{email}` → `{tenant, db, storage}` or 404 `{message}`.

pub mod config;
pub mod module;
pub use module::CredentialOrchestrator;

#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
