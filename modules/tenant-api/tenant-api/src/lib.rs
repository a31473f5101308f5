//! Tenant API
//!
//! Every colors request carries a tenant email. The email is exchanged for
//! connection parameters at the credential orchestrator, a connection to that
//! tenant's own database is opened for the request, and closed again on every
//! exit path.

pub mod config;
pub mod module;
pub use module::TenantApi;

#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
