//! Configuration for the tenant API.

use std::time::Duration;

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// Where and how to reach the credential orchestrator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CredentialsConfig {
    /// Orchestrator base URL. Lookups fail with a configuration error when unset.
    pub base_url: Option<String>,
    #[serde(with = "humantime_serde")]
    pub connect_timeout: Duration,
    /// Total budget for one lookup, connect included.
    #[serde(with = "humantime_serde")]
    pub request_timeout: Duration,
}

impl Default for CredentialsConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            connect_timeout: Duration::from_secs(5),
            request_timeout: Duration::from_secs(10),
        }
    }
}

impl CredentialsConfig {
    /// Configured base URL, treating an empty string as unset.
    #[must_use]
    pub fn base_url(&self) -> Option<&str> {
        self.base_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }
}

/// Flat username/password pair checked by `/login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoginConfig {
    pub username: String,
    #[serde(skip_serializing)]
    pub password: SecretString,
}

impl Default for LoginConfig {
    fn default() -> Self {
        Self {
            username: "admin".to_owned(),
            password: SecretString::from("secret123".to_owned()),
        }
    }
}

/// How tenant connection URLs are assembled from resolved credentials.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TenantDbConfig {
    pub scheme: String,
    pub charset: Option<String>,
    /// Appended to the resolved host when set.
    pub port: Option<u16>,
    #[serde(with = "humantime_serde")]
    pub connect_timeout: Duration,
}

impl Default for TenantDbConfig {
    fn default() -> Self {
        Self {
            scheme: "mysql".to_owned(),
            charset: Some("utf8mb4".to_owned()),
            port: None,
            connect_timeout: Duration::from_secs(5),
        }
    }
}
